pub mod container;
pub mod crc;
pub mod fit;
pub mod preview;

pub use container::{encode_indexed, encode_raw, read_chunks, Chunk, SIGNATURE};
pub use fit::{fit_frame, FitLimits, FitStrategy, PadColor};
pub use preview::{decode_rgba, encode_preview};
