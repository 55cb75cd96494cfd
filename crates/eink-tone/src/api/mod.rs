//! Public API for the eink-tone crate.
//!
//! This module provides the high-level API: the [`TonePipeline`] builder and
//! the [`ToneError`] error type.

mod builder;
mod error;

pub use builder::TonePipeline;
pub use error::ToneError;
