//! Histogram-driven contrast stretching.
//!
//! [`stretch_contrast`] picks black and white points with the weighted
//! approach described in [`stretch`] and remaps the working range onto the
//! full `0..=255`.

mod histogram;
mod options;
pub mod stretch;

pub use histogram::Histogram;
pub use options::{StretchOptions, TieBreak, SAFETY_CLIP_FRACTION};
pub use stretch::{apply_bounds, select_bounds, stretch_contrast, StretchBounds};
