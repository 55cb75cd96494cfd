//! Inkpress - image pipeline for grey e-paper panels
//!
//! Turns decoded RGBA images into 1-bit or 2-bit indexed PNGs: grayscale,
//! gamma, sharpening, a weighted contrast stretch and Floyd-Steinberg
//! dithering (from the `eink-tone` crate), followed by a hand-written
//! indexed container encoder.
//!
//! ```
//! use inkpress::models::{PipelineConfig, RgbaImage};
//! use inkpress::pipeline::process_image;
//!
//! let image = RgbaImage::filled(8, 4, [120, 160, 200, 255]);
//! let output = process_image(&image, &PipelineConfig::default()).unwrap();
//!
//! assert_eq!(output.indices().width(), 8);
//! assert!(output.container().starts_with(&inkpress::rendering::SIGNATURE));
//! ```

pub mod error;
pub mod models;
pub mod pipeline;
pub mod rendering;
pub mod services;

pub use error::{ConfigError, EncodeError, FitError, PressError};
pub use pipeline::{process, process_image, PressOutput, PressReport};
