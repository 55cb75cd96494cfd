use eink_tone::BitDepth;

use crate::error::PressError;

/// Geometry and grey depth of a target panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
}

impl DisplaySpec {
    /// 4.2" panel: 400x300, four greys
    pub const EPD_4IN2: Self = Self {
        width: 400,
        height: 300,
        bit_depth: BitDepth::TwoPixelBit,
    };

    /// 7.5" panel: 800x480, black and white
    pub const EPD_7IN5: Self = Self {
        width: 800,
        height: 480,
        bit_depth: BitDepth::OnePixelBit,
    };

    /// Custom panel; rejects zero area and depths other than 1 or 2.
    pub fn new(width: u32, height: u32, bits: u8) -> Result<Self, PressError> {
        if width == 0 || height == 0 {
            return Err(PressError::InvalidDimensions { width, height });
        }
        let bit_depth = BitDepth::from_bits(bits)?;
        Ok(Self {
            width,
            height,
            bit_depth,
        })
    }

    /// Look up a preset by its short name (`4in2`, `7in5`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "4in2" | "epd_4in2" => Some(Self::EPD_4IN2),
            "7in5" | "epd_7in5" => Some(Self::EPD_7IN5),
            _ => None,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Uncompressed size of the filtered, bit-packed pixel rows.
    pub fn packed_size(&self) -> usize {
        (self.bit_depth.row_bytes(self.width as usize) + 1) * self.height as usize
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::EPD_4IN2
    }
}
