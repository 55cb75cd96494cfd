//! Contrast stretch configuration.

/// Fraction of all samples clipped from each end before the weighted
/// approach, whatever the other parameters say.
pub const SAFETY_CLIP_FRACTION: f64 = 0.002;

/// Which side wins when clipping either end would cost the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Advance the black point (`cost_left <= cost_right`).
    #[default]
    FavorLeft,
    /// Advance the white point (`cost_left < cost_right` to go left).
    FavorRight,
}

/// Parameters of the weighted-approaching contrast stretch.
///
/// # Example
///
/// ```
/// use eink_tone::StretchOptions;
///
/// let options = StretchOptions::new()
///     .clip_fraction(0.2)
///     .cost_fraction(0.4);
/// assert!(!options.is_disabled());
/// ```
#[derive(Debug, Clone)]
pub struct StretchOptions {
    /// Share of samples that may be clipped in total (0..=1).
    pub clip_fraction: f64,
    /// Share of the total tonal damage that may be spent (0..=1).
    pub cost_fraction: f64,
    /// Minimum share clipped from each end before the weighted approach.
    pub safety_clip_fraction: f64,
    /// Tie resolution between the two ends.
    pub tie_break: TieBreak,
}

impl Default for StretchOptions {
    fn default() -> Self {
        Self {
            clip_fraction: 0.18,
            cost_fraction: 0.30,
            safety_clip_fraction: SAFETY_CLIP_FRACTION,
            tie_break: TieBreak::FavorLeft,
        }
    }
}

impl StretchOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that leave every sample untouched.
    pub fn disabled() -> Self {
        Self {
            clip_fraction: 0.0,
            cost_fraction: 0.0,
            ..Self::default()
        }
    }

    /// Set the clip budget; clamped to `0..=1`, NaN becomes 0.
    #[inline]
    pub fn clip_fraction(mut self, fraction: f64) -> Self {
        self.clip_fraction = clamp_unit(fraction);
        self
    }

    /// Set the cost budget; clamped to `0..=1`, NaN becomes 0.
    #[inline]
    pub fn cost_fraction(mut self, fraction: f64) -> Self {
        self.cost_fraction = clamp_unit(fraction);
        self
    }

    #[inline]
    pub fn safety_clip_fraction(mut self, fraction: f64) -> Self {
        self.safety_clip_fraction = clamp_unit(fraction);
        self
    }

    #[inline]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Both budgets are zero: the stretch is skipped entirely, including the
    /// safety clip.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.clip_fraction <= 0.0 && self.cost_fraction <= 0.0
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
