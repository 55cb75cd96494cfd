//! Fitting source images into the panel frame.
//!
//! Three strategies, each with its own tolerance:
//!
//! - **Stretch**: resample to the exact frame, distorting the aspect ratio
//! - **Crop**: centre-crop to the frame's aspect ratio, then resample
//! - **Pad**: scale to fit inside the frame and centre on a filled canvas
//!
//! A strategy that would change more of the image than its threshold allows
//! fails with [`FitError::ThresholdExceeded`] rather than producing a badly
//! distorted or mostly empty frame.

use crate::error::FitError;
use crate::models::RgbaImage;

/// Canvas colour for [`FitStrategy::Pad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadColor {
    #[default]
    White,
    Black,
}

impl PadColor {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            PadColor::White => [255, 255, 255, 255],
            PadColor::Black => [0, 0, 0, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStrategy {
    Stretch,
    Crop,
    Pad(PadColor),
}

impl FitStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            FitStrategy::Stretch => "stretch",
            FitStrategy::Crop => "crop",
            FitStrategy::Pad(_) => "pad",
        }
    }
}

/// Per-strategy tolerances, as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLimits {
    /// Maximum `|src_ar / target_ar - 1|`
    pub stretch_threshold: f32,
    /// Maximum share of the source cut away
    pub crop_threshold: f32,
    /// Maximum share of the frame left as padding
    pub pad_threshold: f32,
}

impl Default for FitLimits {
    fn default() -> Self {
        Self {
            stretch_threshold: 0.30,
            crop_threshold: 0.50,
            pad_threshold: 0.50,
        }
    }
}

impl FitLimits {
    pub fn max_threshold(&self) -> f32 {
        self.stretch_threshold
            .max(self.crop_threshold)
            .max(self.pad_threshold)
    }

    /// Cheap pre-check before decoding work is spent on an image.
    ///
    /// Rejects sources smaller than half the frame on either side, and
    /// aspect ratios outside `[target_ar * (1 - max), target_ar / (1 - max)]`
    /// where `max` is the largest threshold.
    pub fn admits(&self, src: (u32, u32), target: (u32, u32)) -> bool {
        let (w, h) = src;
        let (tw, th) = target;
        if w == 0 || h == 0 || tw == 0 || th == 0 {
            return false;
        }
        if (w as f32) < tw as f32 * 0.5 || (h as f32) < th as f32 * 0.5 {
            return false;
        }
        let ratio = w as f32 / h as f32;
        let target_ar = tw as f32 / th as f32;
        let keep = 1.0 - self.max_threshold();
        if keep <= 0.0 {
            return true;
        }
        ratio >= target_ar * keep && ratio <= target_ar / keep
    }
}

/// Aspect distortion a stretch would introduce.
pub fn stretch_amount(src: (u32, u32), target: (u32, u32)) -> f32 {
    let (src_ar, target_ar) = aspect_ratios(src, target);
    (src_ar / target_ar - 1.0).abs()
}

/// Share of the source a centre crop would remove.
pub fn crop_amount(src: (u32, u32), target: (u32, u32)) -> f32 {
    let (w, h) = (src.0 as f32, src.1 as f32);
    let (src_ar, target_ar) = aspect_ratios(src, target);
    if src_ar > target_ar {
        (w - h * target_ar) / w
    } else {
        (h - w / target_ar) / h
    }
}

/// Share of the frame that padding would fill.
pub fn pad_amount(src: (u32, u32), target: (u32, u32)) -> f32 {
    let (tw, th) = (target.0 as f32, target.1 as f32);
    let (src_ar, target_ar) = aspect_ratios(src, target);
    if src_ar > target_ar {
        (th - tw / src_ar) / th
    } else {
        (tw - th * src_ar) / tw
    }
}

fn aspect_ratios(src: (u32, u32), target: (u32, u32)) -> (f32, f32) {
    (
        src.0 as f32 / src.1 as f32,
        target.0 as f32 / target.1 as f32,
    )
}

/// Fit `image` into a `width` x `height` frame.
pub fn fit_frame(
    image: &RgbaImage,
    width: u32,
    height: u32,
    strategy: FitStrategy,
    limits: &FitLimits,
) -> Result<RgbaImage, FitError> {
    if image.is_empty() {
        return Err(FitError::EmptySource);
    }
    if width == 0 || height == 0 {
        return Err(FitError::EmptyTarget);
    }
    let src = (image.width(), image.height());
    let target = (width, height);

    let check = |amount: f32, limit: f32| {
        if amount > limit {
            Err(FitError::ThresholdExceeded {
                strategy: strategy.name(),
                amount,
                limit,
            })
        } else {
            Ok(amount)
        }
    };

    let fitted = match strategy {
        FitStrategy::Stretch => {
            let amount = check(stretch_amount(src, target), limits.stretch_threshold)?;
            tracing::debug!(amount, "Stretching to frame");
            let mut canvas = RgbaImage::filled(width, height, [0; 4]);
            resample_into(&mut canvas, image, Region::full(image), (0, 0, width, height));
            canvas
        }
        FitStrategy::Crop => {
            let amount = check(crop_amount(src, target), limits.crop_threshold)?;
            let region = centre_crop(src, target);
            tracing::debug!(amount, ?region, "Cropping to frame");
            let mut canvas = RgbaImage::filled(width, height, [0; 4]);
            resample_into(&mut canvas, image, region, (0, 0, width, height));
            canvas
        }
        FitStrategy::Pad(color) => {
            let amount = check(pad_amount(src, target), limits.pad_threshold)?;
            let scale = (width as f32 / src.0 as f32).min(height as f32 / src.1 as f32);
            let inner_w = ((src.0 as f32 * scale).round() as u32).clamp(1, width);
            let inner_h = ((src.1 as f32 * scale).round() as u32).clamp(1, height);
            let x0 = (width - inner_w) / 2;
            let y0 = (height - inner_h) / 2;
            tracing::debug!(amount, inner_w, inner_h, "Padding to frame");
            let mut canvas = RgbaImage::filled(width, height, color.rgba());
            resample_into(
                &mut canvas,
                image,
                Region::full(image),
                (x0, y0, inner_w, inner_h),
            );
            canvas
        }
    };
    Ok(fitted)
}

/// Source rectangle for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Region {
    fn full(image: &RgbaImage) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }
}

fn centre_crop(src: (u32, u32), target: (u32, u32)) -> Region {
    let (w, h) = src;
    let (src_ar, target_ar) = aspect_ratios(src, target);
    if src_ar > target_ar {
        let cw = ((h as f32 * target_ar).round() as u32).clamp(1, w);
        Region {
            x: (w - cw) / 2,
            y: 0,
            width: cw,
            height: h,
        }
    } else {
        let ch = ((w as f32 / target_ar).round() as u32).clamp(1, h);
        Region {
            x: 0,
            y: (h - ch) / 2,
            width: w,
            height: ch,
        }
    }
}

/// Bilinearly resample `region` of `src` into the `(x0, y0, w, h)`
/// rectangle of `canvas`, mapping pixel centres.
fn resample_into(
    canvas: &mut RgbaImage,
    src: &RgbaImage,
    region: Region,
    (x0, y0, out_w, out_h): (u32, u32, u32, u32),
) {
    let stride = canvas.width();
    let pixels = canvas.pixels_mut();
    let scale_x = region.width as f32 / out_w as f32;
    let scale_y = region.height as f32 / out_h as f32;
    let max_x = (region.width - 1) as f32;
    let max_y = (region.height - 1) as f32;

    for oy in 0..out_h {
        let sy = ((oy as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_y);
        let y_lo = sy.floor() as u32;
        let y_hi = (y_lo + 1).min(region.height - 1);
        let fy = sy - y_lo as f32;

        for ox in 0..out_w {
            let sx = ((ox as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_x);
            let x_lo = sx.floor() as u32;
            let x_hi = (x_lo + 1).min(region.width - 1);
            let fx = sx - x_lo as f32;

            let p00 = src.pixel(region.x + x_lo, region.y + y_lo);
            let p10 = src.pixel(region.x + x_hi, region.y + y_lo);
            let p01 = src.pixel(region.x + x_lo, region.y + y_hi);
            let p11 = src.pixel(region.x + x_hi, region.y + y_hi);

            let dst = ((y0 + oy) as usize * stride as usize + (x0 + ox) as usize) * 4;
            for c in 0..4 {
                let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
                let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
                let v = top * (1.0 - fy) + bottom * fy;
                pixels[dst + c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
