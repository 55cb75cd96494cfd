pub mod config;
pub mod display_spec;
pub mod rgba_image;
pub mod style_hint;

pub use config::{PipelineConfig, ValidatedConfig};
pub use display_spec::DisplaySpec;
pub use rgba_image::RgbaImage;
pub use style_hint::{ContentCategory, GradientClass, ParameterOverrides, StyleHint};
