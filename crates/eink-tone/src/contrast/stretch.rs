//! Weighted-approaching auto-contrast.
//!
//! Instead of clipping a symmetric percentile from each end, the black and
//! white points walk inward one level at a time, always taking the step
//! that destroys less tonal information. Images weighted toward shadows or
//! highlights are therefore stretched asymmetrically without a bias knob.

use super::{Histogram, StretchOptions, TieBreak};
use crate::buffer::SampleBuffer;

/// Black and white points chosen by the stretch.
///
/// Invariant: `left < right`, so the remap divisor is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StretchBounds {
    left: u8,
    right: u8,
}

impl StretchBounds {
    /// Full range, the remap leaves every sample unchanged.
    pub const IDENTITY: Self = Self {
        left: 0,
        right: 255,
    };

    /// Bounds with `left < right`, or `None`.
    pub fn new(left: u8, right: u8) -> Option<Self> {
        (left < right).then_some(Self { left, right })
    }

    /// Black point: samples at or below map to 0.
    #[inline]
    pub fn left(&self) -> u8 {
        self.left
    }

    /// White point: samples at or above map to 255.
    #[inline]
    pub fn right(&self) -> u8 {
        self.right
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Lookup table for the linear remap of `[left, right]` onto `[0, 255]`.
    pub fn lut(&self) -> [u8; 256] {
        let (left, right) = (self.left as u32, self.right as u32);
        let span = right.saturating_sub(left).max(1) as f32;
        let scale = 255.0 / span;
        let mut lut = [0u8; 256];
        for (v, entry) in lut.iter_mut().enumerate() {
            let v = v as u32;
            *entry = if v <= left {
                0
            } else if v >= right {
                255
            } else {
                ((v - left) as f32 * scale).clamp(0.0, 255.0) as u8
            };
        }
        lut
    }
}

impl Default for StretchBounds {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Choose black and white points for `hist`.
///
/// 1. Disabled options, an empty histogram or a single occupied level give
///    [`StretchBounds::IDENTITY`].
/// 2. Safety clip: each end independently advances past at least
///    `safety_clip_fraction` of all samples.
/// 3. Weighted approach: compare `hist[left] * left` with
///    `hist[right] * (255 - right)` and advance the cheaper end (ties per
///    [`TieBreak`]). Stop before the accumulated cost would exceed
///    `total_damage * cost_fraction` or the clipped count would exceed
///    `total * clip_fraction`.
///
/// Neither walk ever lets the ends meet, so `left < right` always holds.
pub fn select_bounds(hist: &Histogram, options: &StretchOptions) -> StretchBounds {
    if options.is_disabled() {
        return StretchBounds::IDENTITY;
    }
    match hist.occupied_range() {
        Some((lo, hi)) if lo < hi => {}
        _ => return StretchBounds::IDENTITY,
    }

    let bins = hist.bins();
    let total = hist.total() as f64;
    let target_area = total * options.clip_fraction;
    let target_cost = hist.total_damage() * options.cost_fraction;
    let min_clip = total * options.safety_clip_fraction;

    let mut left = 0usize;
    let mut right = 255usize;

    let mut clipped_left = 0u64;
    while left + 1 < right && (clipped_left as f64) < min_clip {
        clipped_left += bins[left];
        left += 1;
    }
    let mut clipped_right = 0u64;
    while left + 1 < right && (clipped_right as f64) < min_clip {
        clipped_right += bins[right];
        right -= 1;
    }

    let mut clipped_total = clipped_left + clipped_right;
    let mut total_cost = 0.0f64;

    while left + 1 < right {
        let cost_left = bins[left] as f64 * left as f64;
        let cost_right = bins[right] as f64 * (255 - right) as f64;
        let go_left = match options.tie_break {
            TieBreak::FavorLeft => cost_left <= cost_right,
            TieBreak::FavorRight => cost_left < cost_right,
        };
        let (area, cost) = if go_left {
            (bins[left], cost_left)
        } else {
            (bins[right], cost_right)
        };

        if total_cost + cost > target_cost || (clipped_total + area) as f64 > target_area {
            break;
        }
        total_cost += cost;
        clipped_total += area;
        if go_left {
            left += 1;
        } else {
            right -= 1;
        }
    }

    StretchBounds {
        left: left as u8,
        right: right as u8,
    }
}

/// Remap `buffer` in place through `bounds`.
pub fn apply_bounds(buffer: &mut SampleBuffer, bounds: StretchBounds) {
    if bounds.is_identity() {
        return;
    }
    let lut = bounds.lut();
    for v in buffer.samples_mut() {
        *v = lut[*v as usize];
    }
}

/// Stretch `buffer` in place and report the bounds used.
///
/// # Example
///
/// ```
/// use eink_tone::{contrast::stretch_contrast, SampleBuffer, StretchOptions};
///
/// let mut buffer = SampleBuffer::new(4, 1, vec![60, 90, 120, 150]).unwrap();
/// let bounds = stretch_contrast(&mut buffer, &StretchOptions::new());
/// assert!(bounds.left() < bounds.right());
/// assert_eq!(buffer.samples()[0], 0);
/// ```
pub fn stretch_contrast(buffer: &mut SampleBuffer, options: &StretchOptions) -> StretchBounds {
    let hist = Histogram::from_buffer(buffer);
    let bounds = select_bounds(&hist, options);
    apply_bounds(buffer, bounds);
    bounds
}
