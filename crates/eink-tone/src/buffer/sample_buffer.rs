use crate::api::ToneError;

/// Row-major grey samples with their dimensions.
///
/// Stages either mutate a buffer they own (`&mut SampleBuffer`) or read one
/// and return a fresh buffer (`&SampleBuffer -> SampleBuffer`), never both.
///
/// # Example
///
/// ```
/// use eink_tone::SampleBuffer;
///
/// let buffer = SampleBuffer::new(2, 2, vec![0, 255, 255, 0]).unwrap();
/// assert_eq!(buffer.get(1, 0), 255);
/// assert_eq!(buffer.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl SampleBuffer {
    /// Wrap existing samples, checking `samples.len() == width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, ToneError> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(ToneError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build from samples already known to have the right length.
    pub(crate) fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), width * height);
        Self {
            width,
            height,
            samples,
        }
    }

    /// A buffer with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width * height],
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
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    #[inline]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.samples[y * self.width + x]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, and a zero-width buffer has no rows anyway
        self.samples.chunks(self.width.max(1))
    }
}
