//! Bit depth selection and the fixed grey palettes that go with it.
//!
//! The panels this crate targets show either two or four grey levels. Both
//! modes are modelled as a closed enum so the palette, packing width and
//! quantization step are chosen once and can never disagree.

use crate::api::ToneError;

/// Black and white.
static ONE_BIT_PALETTE: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

/// Four evenly spaced greys.
static TWO_BIT_PALETTE: [[u8; 3]; 4] = [
    [0, 0, 0],
    [85, 85, 85],
    [170, 170, 170],
    [255, 255, 255],
];

/// Output bit depth of an e-paper panel.
///
/// Index `i` in the palette always has grey value `i * step()`, so a
/// palette lookup recovers exactly the quantized intensity.
///
/// # Example
///
/// ```
/// use eink_tone::BitDepth;
///
/// let depth = BitDepth::from_bits(2).unwrap();
/// assert_eq!(depth, BitDepth::TwoPixelBit);
/// assert_eq!(depth.levels(), 4);
/// assert_eq!(depth.level_value(2), 170);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 1 bit per pixel: black and white, 8 pixels per byte.
    OnePixelBit,
    /// 2 bits per pixel: four grey levels, 4 pixels per byte.
    #[default]
    TwoPixelBit,
}

impl BitDepth {
    /// Select a depth from its bit count.
    pub fn from_bits(bits: u8) -> Result<Self, ToneError> {
        match bits {
            1 => Ok(BitDepth::OnePixelBit),
            2 => Ok(BitDepth::TwoPixelBit),
            other => Err(ToneError::UnsupportedBitDepth(other)),
        }
    }

    /// Bits per pixel.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            BitDepth::OnePixelBit => 1,
            BitDepth::TwoPixelBit => 2,
        }
    }

    /// Number of grey levels (`2^bits`).
    #[inline]
    pub const fn levels(self) -> u8 {
        1 << self.bits()
    }

    /// Distance between adjacent grey levels (255 or 85).
    #[inline]
    pub const fn step(self) -> u8 {
        255 / (self.levels() - 1)
    }

    /// Pixels stored per packed byte.
    #[inline]
    pub const fn pixels_per_byte(self) -> usize {
        8 / self.bits() as usize
    }

    /// Packed bytes needed for one row of `width` pixels, excluding any
    /// filter prefix.
    #[inline]
    pub const fn row_bytes(self, width: usize) -> usize {
        width.div_ceil(self.pixels_per_byte())
    }

    /// The fixed RGB palette for this depth.
    #[inline]
    pub fn palette(self) -> &'static [[u8; 3]] {
        match self {
            BitDepth::OnePixelBit => &ONE_BIT_PALETTE,
            BitDepth::TwoPixelBit => &TWO_BIT_PALETTE,
        }
    }

    /// Grey value for a palette index. Indices past the last level saturate.
    #[inline]
    pub fn level_value(self, index: u8) -> u8 {
        index.min(self.levels() - 1) * self.step()
    }

    /// Palette index of the level nearest to `value`.
    #[inline]
    pub fn nearest_index(self, value: u8) -> u8 {
        let step = self.step() as u16;
        ((value as u16 + step / 2) / step).min(self.levels() as u16 - 1) as u8
    }

    /// All grey values reachable at this depth, darkest first.
    pub fn level_values(self) -> Vec<u8> {
        (0..self.levels()).map(|i| self.level_value(i)).collect()
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = ToneError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        BitDepth::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(BitDepth::from_bits(1), Ok(BitDepth::OnePixelBit));
        assert_eq!(BitDepth::from_bits(2), Ok(BitDepth::TwoPixelBit));
        assert_eq!(
            BitDepth::from_bits(0),
            Err(ToneError::UnsupportedBitDepth(0))
        );
        assert_eq!(
            BitDepth::from_bits(4),
            Err(ToneError::UnsupportedBitDepth(4))
        );
    }

    #[test]
    fn test_palette_length_matches_levels() {
        for depth in [BitDepth::OnePixelBit, BitDepth::TwoPixelBit] {
            assert_eq!(depth.palette().len(), depth.levels() as usize);
        }
    }

    #[test]
    fn test_palette_entries_are_level_values() {
        for depth in [BitDepth::OnePixelBit, BitDepth::TwoPixelBit] {
            for (i, rgb) in depth.palette().iter().enumerate() {
                let v = depth.level_value(i as u8);
                assert_eq!(rgb, &[v, v, v], "{depth:?} entry {i}");
            }
        }
    }

    #[test]
    fn test_level_values() {
        assert_eq!(BitDepth::OnePixelBit.level_values(), vec![0, 255]);
        assert_eq!(BitDepth::TwoPixelBit.level_values(), vec![0, 85, 170, 255]);
    }

    #[test]
    fn test_nearest_index() {
        let d = BitDepth::TwoPixelBit;
        assert_eq!(d.nearest_index(0), 0);
        assert_eq!(d.nearest_index(42), 0);
        assert_eq!(d.nearest_index(43), 1);
        assert_eq!(d.nearest_index(85), 1);
        assert_eq!(d.nearest_index(170), 2);
        assert_eq!(d.nearest_index(255), 3);

        let d = BitDepth::OnePixelBit;
        assert_eq!(d.nearest_index(127), 0);
        assert_eq!(d.nearest_index(128), 1);
    }

    #[test]
    fn test_row_bytes() {
        assert_eq!(BitDepth::OnePixelBit.row_bytes(8), 1);
        assert_eq!(BitDepth::OnePixelBit.row_bytes(9), 2);
        assert_eq!(BitDepth::TwoPixelBit.row_bytes(4), 1);
        assert_eq!(BitDepth::TwoPixelBit.row_bytes(5), 2);
        assert_eq!(BitDepth::TwoPixelBit.row_bytes(400), 100);
    }

    #[test]
    fn test_level_value_saturates() {
        assert_eq!(BitDepth::OnePixelBit.level_value(3), 255);
    }
}
