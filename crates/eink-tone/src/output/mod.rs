//! Output types of the tone pipeline.
//!
//! [`ToneResult`] carries the quantized buffer together with the
//! undithered preview and the stretch bounds, so callers can encode,
//! preview and diagnose from a single run.

mod tone_result;

pub use tone_result::ToneResult;
