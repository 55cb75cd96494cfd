use std::path::Path;

use eink_tone::{BitDepth, StretchOptions, TonePipeline};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PressError};

/// Pipeline parameters, loaded from YAML or built in code.
///
/// Every field has a default, so a YAML file only needs the keys it
/// changes:
///
/// ```yaml
/// gamma: 1.6
/// sharpen: 1.2
/// bit_depth: 1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Gamma exponent; `1.0` disables the stage
    pub gamma: f32,

    /// Laplacian sharpening amount, nominally 0..=2
    pub sharpen: f32,

    /// Share of samples the contrast stretch may clip
    pub clip_fraction: f32,

    /// Share of tonal damage the contrast stretch may spend
    pub cost_fraction: f32,

    /// Error diffusion strength, 0..=1
    pub dither_strength: f32,

    /// Output bits per pixel, 1 or 2
    pub bit_depth: u8,

    /// Number of tone layers
    pub tone_layers: u32,

    /// Tone layering strength; `0.0` disables the stage
    pub tone_strength: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            sharpen: 0.0,
            clip_fraction: 0.18,
            cost_fraction: 0.30,
            dither_strength: 1.0,
            bit_depth: 2,
            tone_layers: eink_tone::preprocess::DEFAULT_TONE_LAYERS,
            tone_strength: 0.0,
        }
    }
}

impl PipelineConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Like [`load`](Self::load), but falls back to defaults with a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    gamma = config.gamma,
                    sharpen = config.sharpen,
                    bit_depth = config.bit_depth,
                    "Loaded pipeline configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Check structural validity and clamp everything else.
    ///
    /// Rejected: non-finite floats, gamma `<= 0`, bit depths other than 1
    /// or 2. Clamped: sharpen to 0..=2, the fractions and strengths to
    /// 0..=1. Gamma outside its nominal 1.0..=2.4 is kept as is.
    pub fn validate(&self) -> Result<ValidatedConfig, PressError> {
        let finite = |name: &'static str, value: f32| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(PressError::ParameterOutOfRange { name, value })
            }
        };

        let gamma = finite("gamma", self.gamma)?;
        if gamma <= 0.0 {
            return Err(PressError::ParameterOutOfRange {
                name: "gamma",
                value: gamma,
            });
        }
        let sharpen = finite("sharpen", self.sharpen)?.clamp(0.0, 2.0);
        let clip_fraction = finite("clip_fraction", self.clip_fraction)?.clamp(0.0, 1.0);
        let cost_fraction = finite("cost_fraction", self.cost_fraction)?.clamp(0.0, 1.0);
        let dither_strength = finite("dither_strength", self.dither_strength)?.clamp(0.0, 1.0);
        let tone_strength = finite("tone_strength", self.tone_strength)?.clamp(0.0, 1.0);
        let depth = BitDepth::from_bits(self.bit_depth)?;

        Ok(ValidatedConfig {
            gamma,
            sharpen,
            clip_fraction,
            cost_fraction,
            dither_strength,
            depth,
            tone_layers: self.tone_layers,
            tone_strength,
        })
    }
}

/// A [`PipelineConfig`] that passed [`validate`](PipelineConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub gamma: f32,
    pub sharpen: f32,
    pub clip_fraction: f32,
    pub cost_fraction: f32,
    pub dither_strength: f32,
    pub depth: BitDepth,
    pub tone_layers: u32,
    pub tone_strength: f32,
}

impl ValidatedConfig {
    /// Stage chain configured with these values.
    pub fn tone_pipeline(&self) -> TonePipeline {
        let stretch = StretchOptions::new()
            .clip_fraction(self.clip_fraction as f64)
            .cost_fraction(self.cost_fraction as f64);
        TonePipeline::new(self.depth)
            .gamma(self.gamma)
            .sharpen(self.sharpen)
            .stretch(stretch)
            .tone_layers(self.tone_layers, self.tone_strength)
            .dither_strength(self.dither_strength)
    }
}
