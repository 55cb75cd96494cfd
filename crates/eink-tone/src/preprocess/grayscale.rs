//! RGBA to single-channel luma.

use crate::api::ToneError;
use crate::buffer::SampleBuffer;

/// ITU-R BT.601 luma weights in 16.16 fixed point (sum to 65536).
const LUMA_R: u32 = 19_595;
const LUMA_G: u32 = 38_470;
const LUMA_B: u32 = 7_471;

/// Luma of one RGB triple: `0.299 R + 0.587 G + 0.114 B`, rounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + 0x8000) >> 16) as u8
}

/// Reduce straight RGBA samples to a grey [`SampleBuffer`].
///
/// Alpha is ignored; every pixel is treated as opaque. A zero-size image
/// yields an empty buffer.
///
/// # Errors
///
/// [`ToneError::LengthMismatch`] if `rgba.len() != width * height * 4`.
///
/// # Example
///
/// ```
/// use eink_tone::preprocess::rgba_to_luma;
///
/// let rgba = [255, 255, 255, 255, 0, 0, 0, 0];
/// let gray = rgba_to_luma(&rgba, 2, 1).unwrap();
/// assert_eq!(gray.samples(), &[255, 0]);
/// ```
pub fn rgba_to_luma(rgba: &[u8], width: usize, height: usize) -> Result<SampleBuffer, ToneError> {
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(ToneError::LengthMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let samples = rgba
        .chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();
    Ok(SampleBuffer::from_raw(width, height, samples))
}
