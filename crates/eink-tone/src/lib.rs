//! eink-tone: tone reduction and error diffusion for grey e-paper panels
//!
//! This library turns RGBA images into the two or four grey levels that
//! 1-bit and 2-bit electrophoretic panels can show, while keeping as much
//! tonal range and edge detail as possible.
//!
//! # Quick Start
//!
//! The [`TonePipeline`] builder is the primary entry point:
//!
//! ```
//! use eink_tone::{BitDepth, TonePipeline};
//!
//! let rgba = vec![200u8; 8 * 8 * 4];
//! let result = TonePipeline::new(BitDepth::TwoPixelBit)
//!     .gamma(1.4)
//!     .sharpen(0.5)
//!     .run(&rgba, 8, 8)
//!     .unwrap();
//!
//! assert_eq!(result.indices().indices().len(), 64);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA pixels
//!     |
//!     v
//! Grayscale           BT.601 luma, fixed-point, alpha ignored
//!     |
//!     v
//! Gamma               out = 255 * (in / 255) ^ (1 / gamma)
//!     |
//!     v
//! Sharpen             4-neighbour Laplacian on a snapshot, border kept
//!     |
//!     v
//! Contrast stretch    weighted approach picks (left, right)
//!     |
//!     v
//! Tone layers         optional quantile pull of mid-tones
//!     |
//!     +---> preview   (undithered, kept for inspection)
//!     |
//!     v
//! Quantize            serpentine Floyd-Steinberg to the depth's levels
//!     |
//!     v
//! PixelIndexBuffer    one palette index per pixel
//! ```
//!
//! Every stage owns its [`SampleBuffer`] and keeps `len == width * height`.
//!
//! # Weighted Approach
//!
//! A percentile stretch clips the same share from both ends of the
//! histogram. Here the black and white points move inward one level at a
//! time, always on the side where the clipped samples lie closer to their
//! new value (`count * distance`). Images dominated by shadows or
//! highlights get an asymmetric stretch without any tuning. The walk stops
//! at whichever of the clip budget and the cost budget runs out first; see
//! [`contrast::select_bounds`].

pub mod api;
pub mod buffer;
pub mod contrast;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;

#[cfg(test)]
mod domain_tests;

pub use api::{ToneError, TonePipeline};
pub use buffer::{PixelIndexBuffer, SampleBuffer};
pub use contrast::{Histogram, StretchBounds, StretchOptions, TieBreak};
pub use dither::{DitherOptions, FloydSteinberg, Quantize};
pub use output::ToneResult;
pub use palette::BitDepth;
