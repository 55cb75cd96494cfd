use crate::api::ToneError;
use crate::buffer::SampleBuffer;
use crate::palette::BitDepth;

/// Row-major palette indices for a given [`BitDepth`].
///
/// Every index is below `depth.levels()`. This is what the container
/// encoder packs into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelIndexBuffer {
    width: usize,
    height: usize,
    depth: BitDepth,
    indices: Vec<u8>,
}

impl PixelIndexBuffer {
    /// Wrap existing indices, checking length and index range.
    pub fn new(
        width: usize,
        height: usize,
        depth: BitDepth,
        indices: Vec<u8>,
    ) -> Result<Self, ToneError> {
        let expected = width * height;
        if indices.len() != expected {
            return Err(ToneError::LengthMismatch {
                expected,
                actual: indices.len(),
            });
        }
        let levels = depth.levels();
        if let Some(&index) = indices.iter().find(|&&i| i >= levels) {
            return Err(ToneError::IndexOutOfRange { index, levels });
        }
        Ok(Self {
            width,
            height,
            depth,
            indices,
        })
    }

    /// Map each grey sample to the index of its nearest level.
    ///
    /// For a quantized buffer every sample already sits on a level, so the
    /// mapping is exact.
    pub fn from_levels(buffer: &SampleBuffer, depth: BitDepth) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            depth,
            indices: buffer
                .samples()
                .iter()
                .map(|&v| depth.nearest_index(v))
                .collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate index rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks(self.width.max(1))
    }

    /// Look every index up in the palette, giving back grey samples.
    pub fn to_levels(&self) -> SampleBuffer {
        let samples = self
            .indices
            .iter()
            .map(|&i| self.depth.level_value(i))
            .collect();
        SampleBuffer::from_raw(self.width, self.height, samples)
    }
}
