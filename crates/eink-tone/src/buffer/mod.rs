//! Owned pixel buffers threaded through the stages.
//!
//! - [`SampleBuffer`]: one grey intensity per pixel, the working type of
//!   every tone stage
//! - [`PixelIndexBuffer`]: one palette index per pixel, the input of the
//!   container encoder
//!
//! Both keep `len == width * height` as an invariant; constructors that take
//! external data check it.

mod index_buffer;
mod sample_buffer;

pub use index_buffer::PixelIndexBuffer;
pub use sample_buffer::SampleBuffer;
