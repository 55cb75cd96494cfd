//! ToneResult: everything one pipeline run produces.

use crate::buffer::{PixelIndexBuffer, SampleBuffer};
use crate::contrast::StretchBounds;
use crate::palette::BitDepth;

/// Result of [`TonePipeline::run`](crate::TonePipeline::run).
///
/// - [`preview()`](ToneResult::preview): the stretched and tone-layered
///   buffer before quantization
/// - [`quantized()`](ToneResult::quantized): grey values, each one of the
///   depth's levels
/// - [`indices()`](ToneResult::indices): the same pixels as palette indices,
///   ready for the container encoder
///
/// # Example
///
/// ```
/// use eink_tone::{BitDepth, TonePipeline};
///
/// let rgba = [0u8, 0, 0, 255, 255, 255, 255, 255];
/// let result = TonePipeline::new(BitDepth::OnePixelBit)
///     .run(&rgba, 2, 1)
///     .unwrap();
///
/// assert_eq!(result.indices().indices(), &[0, 1]);
/// assert_eq!(result.quantized().samples(), &[0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneResult {
    preview: SampleBuffer,
    quantized: SampleBuffer,
    indices: PixelIndexBuffer,
    bounds: StretchBounds,
}

impl ToneResult {
    /// Assemble a result; `indices` is derived from `quantized`.
    pub fn new(
        preview: SampleBuffer,
        quantized: SampleBuffer,
        depth: BitDepth,
        bounds: StretchBounds,
    ) -> Self {
        let indices = PixelIndexBuffer::from_levels(&quantized, depth);
        Self {
            preview,
            quantized,
            indices,
            bounds,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.quantized.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.quantized.height()
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.indices.depth()
    }

    /// Undithered buffer after the contrast stretch.
    #[inline]
    pub fn preview(&self) -> &SampleBuffer {
        &self.preview
    }

    #[inline]
    pub fn quantized(&self) -> &SampleBuffer {
        &self.quantized
    }

    #[inline]
    pub fn indices(&self) -> &PixelIndexBuffer {
        &self.indices
    }

    /// Black and white points chosen by the stretch.
    #[inline]
    pub fn bounds(&self) -> StretchBounds {
        self.bounds
    }

    /// RGB bytes of the quantized image via the depth's fixed palette.
    pub fn to_rgb(&self) -> Vec<u8> {
        let palette = self.depth().palette();
        self.indices
            .indices()
            .iter()
            .flat_map(|&i| palette[i as usize])
            .collect()
    }

    pub fn into_parts(self) -> (SampleBuffer, SampleBuffer, PixelIndexBuffer, StretchBounds) {
        (self.preview, self.quantized, self.indices, self.bounds)
    }
}
