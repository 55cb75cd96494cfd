//! Test fixtures and constants.

use inkpress::models::{PipelineConfig, RgbaImage};

/// Output levels per bit depth
pub mod levels {
    pub const ONE_BIT: [u8; 2] = [0, 255];
    pub const TWO_BIT: [u8; 4] = [0, 85, 170, 255];
}

/// Opaque gray RGBA pixels for the given luma values
pub fn gray_rgba(values: &[u8]) -> Vec<u8> {
    values.iter().flat_map(|&v| [v, v, v, 255]).collect()
}

/// Opaque gray image from row-major luma values
pub fn gray_image(width: u32, height: u32, values: &[u8]) -> RgbaImage {
    RgbaImage::new(width, height, gray_rgba(values)).unwrap()
}

/// Horizontal ramp from black to white with a colour tint per row
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            let tint = (y * 40 % 256) as u8;
            pixels.extend_from_slice(&[v, v.saturating_sub(tint / 4), v / 2 + tint / 2, 255]);
        }
    }
    RgbaImage::new(width, height, pixels).unwrap()
}

/// Config that leaves grayscale values untouched
pub fn identity_config() -> PipelineConfig {
    PipelineConfig {
        gamma: 1.0,
        sharpen: 0.0,
        clip_fraction: 0.0,
        cost_fraction: 0.0,
        dither_strength: 0.0,
        ..Default::default()
    }
}

/// Config with every stage active
pub fn busy_config(bit_depth: u8) -> PipelineConfig {
    PipelineConfig {
        gamma: 1.6,
        sharpen: 1.2,
        clip_fraction: 0.18,
        cost_fraction: 0.30,
        dither_strength: 1.0,
        bit_depth,
        tone_layers: 16,
        tone_strength: 0.5,
    }
}
