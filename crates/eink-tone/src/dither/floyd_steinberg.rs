//! Floyd-Steinberg error diffusion.

use crate::buffer::SampleBuffer;
use crate::palette::BitDepth;

use super::{diffuse_with_kernel, DitherOptions, Quantize, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion with optional serpentine scanning.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights are in sixteenths and mirror on right-to-left rows. The
/// propagated error is scaled by [`DitherOptions::strength`], so a strength
/// of zero degenerates to a plain nearest-level snap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Quantize for FloydSteinberg {
    fn quantize(
        &self,
        buffer: &SampleBuffer,
        depth: BitDepth,
        options: &DitherOptions,
    ) -> SampleBuffer {
        diffuse_with_kernel(buffer, depth, &FLOYD_STEINBERG, options)
    }
}
