//! TonePipeline builder, the main entry point of the crate.
//!
//! [`TonePipeline`] strings the stages together in their fixed order with
//! fluent configuration:
//!
//! ```text
//! RGBA -> luma -> gamma -> sharpen -> stretch -> tone layers -> quantize
//! ```

use crate::buffer::SampleBuffer;
use crate::contrast::{stretch_contrast, StretchOptions};
use crate::dither::{DitherOptions, FloydSteinberg, Quantize};
use crate::output::ToneResult;
use crate::palette::BitDepth;
use crate::preprocess::{
    apply_gamma, apply_tone_layers, rgba_to_luma, sharpen_edges, DEFAULT_TONE_LAYERS,
};

use super::ToneError;

/// Fluent builder over the whole tone pipeline.
///
/// - The constructor takes the target [`BitDepth`], everything else has a
///   default that leaves the stage inactive or at its usual setting
/// - Configuration methods consume and return `self`
/// - [`run()`](Self::run) takes `&self`, so one pipeline can process many
///   images
///
/// # Example
///
/// ```
/// use eink_tone::{BitDepth, TonePipeline};
///
/// let pipeline = TonePipeline::new(BitDepth::TwoPixelBit)
///     .gamma(1.4)
///     .sharpen(0.5)
///     .dither_strength(0.8);
///
/// let rgba = vec![128u8; 4 * 4 * 4];
/// let result = pipeline.run(&rgba, 4, 4).unwrap();
///
/// assert_eq!(result.width(), 4);
/// assert!(result
///     .quantized()
///     .samples()
///     .iter()
///     .all(|v| [0, 85, 170, 255].contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct TonePipeline {
    depth: BitDepth,
    gamma: f32,
    sharpen: f32,
    stretch: StretchOptions,
    tone_layers: u32,
    tone_strength: f32,
    dither: DitherOptions,
}

impl TonePipeline {
    /// New pipeline for `depth`.
    ///
    /// Defaults: gamma 1.0, no sharpening, stretch budgets 0.18 / 0.30,
    /// tone layering off, full-strength serpentine Floyd-Steinberg.
    pub fn new(depth: BitDepth) -> Self {
        Self {
            depth,
            gamma: 1.0,
            sharpen: 0.0,
            stretch: StretchOptions::default(),
            tone_layers: DEFAULT_TONE_LAYERS,
            tone_strength: 0.0,
            dither: DitherOptions::default(),
        }
    }

    /// Target bit depth.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Set the gamma exponent. Non-finite or non-positive values disable
    /// the stage.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the Laplacian sharpening amount, nominally `0.0..=2.0`.
    #[inline]
    pub fn sharpen(mut self, amount: f32) -> Self {
        self.sharpen = amount;
        self
    }

    /// Set the stretch clip budget.
    #[inline]
    pub fn clip_fraction(mut self, fraction: f64) -> Self {
        self.stretch = self.stretch.clip_fraction(fraction);
        self
    }

    /// Set the stretch cost budget.
    #[inline]
    pub fn cost_fraction(mut self, fraction: f64) -> Self {
        self.stretch = self.stretch.cost_fraction(fraction);
        self
    }

    /// Replace all stretch options at once.
    #[inline]
    pub fn stretch(mut self, options: StretchOptions) -> Self {
        self.stretch = options;
        self
    }

    /// Enable quantile tone layering after the stretch.
    #[inline]
    pub fn tone_layers(mut self, layers: u32, strength: f32) -> Self {
        self.tone_layers = layers;
        self.tone_strength = strength;
        self
    }

    /// Set the error diffusion strength, clamped to `0.0..=1.0`.
    #[inline]
    pub fn dither_strength(mut self, strength: f32) -> Self {
        self.dither = self.dither.strength(strength);
        self
    }

    /// Set serpentine scanning for the quantizer.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.dither = self.dither.serpentine(enabled);
        self
    }

    /// Run the pipeline over tightly packed RGBA pixels.
    ///
    /// Fails when either dimension is zero or `rgba` does not hold
    /// `width * height` pixels.
    pub fn run(&self, rgba: &[u8], width: usize, height: usize) -> Result<ToneResult, ToneError> {
        if width == 0 || height == 0 {
            return Err(ToneError::InvalidDimensions { width, height });
        }
        let gray = rgba_to_luma(rgba, width, height)?;
        Ok(self.run_gray(gray))
    }

    /// Run every stage after grayscale reduction on an existing buffer.
    pub fn run_gray(&self, mut buffer: SampleBuffer) -> ToneResult {
        apply_gamma(&mut buffer, self.gamma);
        sharpen_edges(&mut buffer, self.sharpen);
        let bounds = stretch_contrast(&mut buffer, &self.stretch);
        apply_tone_layers(&mut buffer, self.tone_layers, self.tone_strength);

        let quantized = FloydSteinberg.quantize(&buffer, self.depth, &self.dither);
        ToneResult::new(buffer, quantized, self.depth, bounds)
    }
}
