//! Unified error type for the eink-tone public API.
//!
//! [`ToneError`] covers the structural problems a caller can hand to the
//! stages: bad dimensions, buffers of the wrong length, bit depths the
//! panels cannot show and palette indices outside the depth's range.
//! Everything else (out-of-range samples, marginal parameters) is clamped
//! silently by the stages themselves.

use std::fmt;

/// Error type for the eink-tone public API.
///
/// # Example
///
/// ```
/// use eink_tone::{BitDepth, ToneError};
///
/// assert_eq!(BitDepth::from_bits(3), Err(ToneError::UnsupportedBitDepth(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    /// Width or height is zero where a non-empty image is required.
    InvalidDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },
    /// Sample data does not match `width * height` (times channel count).
    LengthMismatch {
        /// Number of bytes implied by the dimensions
        expected: usize,
        /// Number of bytes actually supplied
        actual: usize,
    },
    /// Bit depth other than 1 or 2.
    UnsupportedBitDepth(u8),
    /// Palette index not representable at the buffer's bit depth.
    IndexOutOfRange {
        /// Offending index
        index: u8,
        /// Number of levels at the buffer's bit depth
        levels: u8,
    },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {}x{}", width, height)
            }
            ToneError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "sample length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            ToneError::UnsupportedBitDepth(bits) => {
                write!(f, "unsupported bit depth: {} (expected 1 or 2)", bits)
            }
            ToneError::IndexOutOfRange { index, levels } => {
                write!(
                    f,
                    "palette index {} out of range for {} levels",
                    index, levels
                )
            }
        }
    }
}

impl std::error::Error for ToneError {}
