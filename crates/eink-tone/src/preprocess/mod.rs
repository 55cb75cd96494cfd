//! Tone stages that run before quantization.
//!
//! In pipeline order:
//!
//! 1. **Grayscale** ([`rgba_to_luma`]) - RGBA to BT.601 luma
//! 2. **Gamma** ([`apply_gamma`]) - power-law lift of shadow detail
//! 3. **Sharpen** ([`sharpen_edges`]) - 4-neighbour Laplacian boost
//!
//! The contrast stretch lives in [`crate::contrast`]; the optional
//! [`apply_tone_layers`] pass runs after it.
//!
//! Each stage works on an owned [`SampleBuffer`](crate::SampleBuffer) in
//! place and keeps its dimensions.

mod gamma;
mod grayscale;
mod sharpen;
mod tone_layers;

pub use gamma::{apply_gamma, gamma_lut};
pub use grayscale::{luma, rgba_to_luma};
pub use sharpen::sharpen_edges;
pub use tone_layers::{apply_tone_layers, DEFAULT_TONE_LAYERS};
