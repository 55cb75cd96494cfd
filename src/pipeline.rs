//! Pipeline entry point: RGBA in, container bytes out.

use eink_tone::{BitDepth, PixelIndexBuffer, SampleBuffer, StretchBounds, ToneResult};
use serde::Serialize;

use crate::error::PressError;
use crate::models::{PipelineConfig, RgbaImage};
use crate::rendering::encode_indexed;

/// Everything a pipeline run produces.
///
/// The container bytes are ready to persist or serve as is. The undithered
/// preview and the stretch bounds are kept for diagnostics.
#[derive(Debug, Clone)]
pub struct PressOutput {
    container: Vec<u8>,
    tone: ToneResult,
}

impl PressOutput {
    /// Encoded indexed PNG.
    pub fn container(&self) -> &[u8] {
        &self.container
    }

    pub fn into_container(self) -> Vec<u8> {
        self.container
    }

    /// Buffer after the contrast stretch, before quantization.
    pub fn preview(&self) -> &SampleBuffer {
        self.tone.preview()
    }

    pub fn quantized(&self) -> &SampleBuffer {
        self.tone.quantized()
    }

    pub fn indices(&self) -> &PixelIndexBuffer {
        self.tone.indices()
    }

    pub fn bounds(&self) -> StretchBounds {
        self.tone.bounds()
    }

    pub fn depth(&self) -> BitDepth {
        self.tone.depth()
    }

    pub fn report(&self) -> PressReport {
        let bounds = self.bounds();
        PressReport {
            width: self.tone.width(),
            height: self.tone.height(),
            bit_depth: self.depth().bits(),
            stretch_left: bounds.left(),
            stretch_right: bounds.right(),
            container_bytes: self.container.len(),
        }
    }
}

/// Serializable summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    pub width: usize,
    pub height: usize,
    pub bit_depth: u8,
    pub stretch_left: u8,
    pub stretch_right: u8,
    pub container_bytes: usize,
}

/// Run the full pipeline over straight RGBA samples.
///
/// Fails only on structural problems: zero dimensions, a sample count that
/// does not match `width * height * 4`, an unsupported bit depth or a
/// non-finite parameter. Everything else is clamped.
pub fn process(
    rgba: &[u8],
    width: u32,
    height: u32,
    config: &PipelineConfig,
) -> Result<PressOutput, PressError> {
    if width == 0 || height == 0 {
        return Err(PressError::InvalidDimensions { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(PressError::LengthMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let validated = config.validate()?;
    tracing::debug!(
        width,
        height,
        gamma = validated.gamma,
        sharpen = validated.sharpen,
        clip = validated.clip_fraction,
        cost = validated.cost_fraction,
        dither = validated.dither_strength,
        bits = validated.depth.bits(),
        "Processing image"
    );

    let tone = validated
        .tone_pipeline()
        .run(rgba, width as usize, height as usize)?;
    let bounds = tone.bounds();
    tracing::debug!(
        left = bounds.left(),
        right = bounds.right(),
        "Contrast stretch bounds"
    );

    let container = encode_indexed(tone.indices())?;
    tracing::info!(width, height, bytes = container.len(), "Encoded container");

    Ok(PressOutput { container, tone })
}

/// [`process`] for an [`RgbaImage`].
pub fn process_image(
    image: &RgbaImage,
    config: &PipelineConfig,
) -> Result<PressOutput, PressError> {
    if image.is_empty() {
        return Err(PressError::EmptyImage);
    }
    process(image.pixels(), image.width(), image.height(), config)
}
