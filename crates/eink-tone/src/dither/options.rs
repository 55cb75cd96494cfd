//! Dithering options and configuration.

/// Configuration for error diffusion quantization.
///
/// # Example
///
/// ```
/// use eink_tone::DitherOptions;
///
/// let options = DitherOptions::new()
///     .strength(0.5)
///     .serpentine(false);
/// assert_eq!(options.strength, 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Fraction of the quantization error passed on to neighbours.
    ///
    /// 0.0 is a plain nearest-level snap, 1.0 full Floyd-Steinberg.
    ///
    /// Default: `1.0`
    pub strength: f32,

    /// Alternate the scan direction on every row.
    ///
    /// Odd rows are processed right-to-left with the kernel mirrored, which
    /// avoids directional "worm" artifacts.
    ///
    /// Default: `true`
    pub serpentine: bool,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            strength: 1.0,
            serpentine: true,
        }
    }
}

impl DitherOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error propagation strength; clamped to `0..=1`, NaN becomes 0.
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }
}
