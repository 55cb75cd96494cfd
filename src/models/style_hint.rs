//! Content style hints and advisory parameter overrides.
//!
//! A [`StyleHint`] describes what an image is (photo, screenshot, comic, ...)
//! and maps it onto pipeline parameters that suit that kind of content.
//! [`ParameterOverrides`] carries loose numeric advice from an external
//! classifier; values outside their legal range fall back to fixed defaults
//! instead of being rejected.

use serde::{Deserialize, Serialize};

use super::PipelineConfig;

/// What kind of picture an image is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Photography,
    Screenshot,
    Meme,
    Illustration,
    Comic,
    Diagram,
    LineArt,
    Mixed,
}

impl ContentCategory {
    /// Base `(gamma, sharpen)` for the category.
    ///
    /// Photos get a gentle lift and little sharpening; flat or line-based
    /// content gets strong edges.
    pub fn base_parameters(self) -> (f32, f32) {
        match self {
            ContentCategory::Photography => (1.2, 0.3),
            ContentCategory::Screenshot
            | ContentCategory::Diagram
            | ContentCategory::Comic
            | ContentCategory::LineArt => (1.6, 1.2),
            ContentCategory::Illustration => (1.4, 0.6),
            ContentCategory::Meme => (1.4, 0.8),
            ContentCategory::Mixed => (1.3, 0.5),
        }
    }
}

/// How much smooth gradation the image contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientClass {
    High,
    #[default]
    Medium,
    Low,
}

impl GradientClass {
    /// Error diffusion strength for this amount of gradation.
    pub fn dither_strength(self) -> f32 {
        match self {
            GradientClass::High => 0.85,
            GradientClass::Medium => 0.6,
            GradientClass::Low => 0.3,
        }
    }
}

/// Style description of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHint {
    pub category: ContentCategory,

    /// Image carries text that must stay legible
    #[serde(default)]
    pub text_overlay: bool,

    #[serde(default)]
    pub gradient: GradientClass,
}

impl StyleHint {
    pub fn new(category: ContentCategory) -> Self {
        Self {
            category,
            text_overlay: false,
            gradient: GradientClass::default(),
        }
    }

    pub fn text_overlay(mut self, enabled: bool) -> Self {
        self.text_overlay = enabled;
        self
    }

    pub fn gradient(mut self, gradient: GradientClass) -> Self {
        self.gradient = gradient;
        self
    }

    /// Replace gamma, sharpen and dither strength of `base`.
    ///
    /// Text overlays raise sharpening to at least 1.0.
    pub fn apply_to(&self, base: PipelineConfig) -> PipelineConfig {
        let (gamma, mut sharpen) = self.category.base_parameters();
        if self.text_overlay {
            sharpen = sharpen.max(1.0);
        }
        PipelineConfig {
            gamma,
            sharpen,
            dither_strength: self.gradient.dither_strength(),
            ..base
        }
    }
}

/// Fallback gamma for out-of-range advice
pub const FALLBACK_GAMMA: f32 = 1.0;
/// Fallback sharpen amount for out-of-range advice
pub const FALLBACK_SHARPEN: f32 = 0.5;
/// Fallback dither value (percent) for out-of-range advice
pub const FALLBACK_DITHER: f32 = 50.0;

/// Advisory numeric parameters, e.g. from an image classifier.
///
/// `dither` is given in percent (0..=100). Absent values leave the base
/// configuration unchanged; present values outside their range are
/// replaced by the fallbacks above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    #[serde(default)]
    pub gamma: Option<f32>,
    #[serde(default)]
    pub sharpen: Option<f32>,
    #[serde(default)]
    pub dither: Option<f32>,
}

impl ParameterOverrides {
    pub fn apply_to(&self, base: PipelineConfig) -> PipelineConfig {
        let gamma = self
            .gamma
            .map(|g| in_range_or(g, 1.0, 2.4, FALLBACK_GAMMA))
            .unwrap_or(base.gamma);
        let sharpen = self
            .sharpen
            .map(|s| in_range_or(s, 0.0, 2.0, FALLBACK_SHARPEN))
            .unwrap_or(base.sharpen);
        let dither_strength = self
            .dither
            .map(|d| in_range_or(d, 0.0, 100.0, FALLBACK_DITHER) / 100.0)
            .unwrap_or(base.dither_strength);

        PipelineConfig {
            gamma,
            sharpen,
            dither_strength,
            ..base
        }
    }
}

fn in_range_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if (min..=max).contains(&value) {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photography_is_gentle() {
        let config = StyleHint::new(ContentCategory::Photography)
            .gradient(GradientClass::High)
            .apply_to(PipelineConfig::default());
        assert_eq!(config.gamma, 1.2);
        assert_eq!(config.sharpen, 0.3);
        assert_eq!(config.dither_strength, 0.85);
    }

    #[test]
    fn test_line_content_is_sharp() {
        for category in [
            ContentCategory::Screenshot,
            ContentCategory::Diagram,
            ContentCategory::Comic,
            ContentCategory::LineArt,
        ] {
            let config = StyleHint::new(category)
                .gradient(GradientClass::Low)
                .apply_to(PipelineConfig::default());
            assert_eq!(config.gamma, 1.6);
            assert_eq!(config.sharpen, 1.2);
            assert_eq!(config.dither_strength, 0.3);
        }
    }

    #[test]
    fn test_text_overlay_raises_sharpen() {
        let config = StyleHint::new(ContentCategory::Photography)
            .text_overlay(true)
            .apply_to(PipelineConfig::default());
        assert_eq!(config.sharpen, 1.0);
    }

    #[test]
    fn test_apply_keeps_other_fields() {
        let base = PipelineConfig {
            bit_depth: 1,
            clip_fraction: 0.4,
            ..Default::default()
        };
        let config = StyleHint::new(ContentCategory::Mixed).apply_to(base);
        assert_eq!(config.bit_depth, 1);
        assert_eq!(config.clip_fraction, 0.4);
    }

    #[test]
    fn test_hint_from_yaml() {
        let hint: StyleHint =
            serde_yaml::from_str("category: line_art\ntext_overlay: true").unwrap();
        assert_eq!(hint.category, ContentCategory::LineArt);
        assert!(hint.text_overlay);
        assert_eq!(hint.gradient, GradientClass::Medium);
    }

    #[test]
    fn test_overrides_in_range() {
        let overrides = ParameterOverrides {
            gamma: Some(1.8),
            sharpen: Some(1.5),
            dither: Some(70.0),
        };
        let config = overrides.apply_to(PipelineConfig::default());
        assert_eq!(config.gamma, 1.8);
        assert_eq!(config.sharpen, 1.5);
        assert!((config.dither_strength - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_overrides_out_of_range_fall_back() {
        let overrides = ParameterOverrides {
            gamma: Some(3.0),
            sharpen: Some(-1.0),
            dither: Some(150.0),
        };
        let config = overrides.apply_to(PipelineConfig::default());
        assert_eq!(config.gamma, 1.0);
        assert_eq!(config.sharpen, 0.5);
        assert_eq!(config.dither_strength, 0.5);

        let nan = ParameterOverrides {
            gamma: Some(f32::NAN),
            ..Default::default()
        };
        assert_eq!(nan.apply_to(PipelineConfig::default()).gamma, 1.0);
    }

    #[test]
    fn test_overrides_absent_keep_base() {
        let base = PipelineConfig {
            gamma: 2.0,
            ..Default::default()
        };
        let config = ParameterOverrides::default().apply_to(base.clone());
        assert_eq!(config, base);
    }
}
