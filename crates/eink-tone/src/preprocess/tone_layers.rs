//! Quantile tone layering.
//!
//! Pulls mid-tones toward `layers` evenly spaced targets chosen by the
//! image's own quantiles. Applied after the contrast stretch it reduces the
//! number of distinct mid-tones the ditherer has to reproduce, which keeps
//! large flat areas calm on 1-bit panels.

use crate::buffer::SampleBuffer;

/// Default number of tone layers.
pub const DEFAULT_TONE_LAYERS: u32 = 32;

/// Apply tone layering in place.
///
/// Only samples strictly between 0 and 255 are considered and moved. The
/// pull toward a layer target is weighted by distance from mid-grey:
/// `(0.2 + 0.8 * |v - 128| / 128) * strength`.
///
/// No-op when `layers <= 1`, `strength <= 0` or there are no mid-tones.
pub fn apply_tone_layers(buffer: &mut SampleBuffer, layers: u32, strength: f32) {
    if layers <= 1 || strength.is_nan() || strength <= 0.0 {
        return;
    }

    let mut interior: Vec<u8> = buffer
        .samples()
        .iter()
        .copied()
        .filter(|&v| v > 0 && v < 255)
        .collect();
    if interior.is_empty() {
        return;
    }
    interior.sort_unstable();

    let n = interior.len();
    let thresholds: Vec<u8> = (1..layers as usize)
        .map(|i| interior[(n * i / layers as usize).min(n - 1)])
        .collect();
    let step = 253.0 / (layers - 1) as f32;

    for v in buffer.samples_mut() {
        if *v == 0 || *v == 255 {
            continue;
        }
        let layer = thresholds
            .iter()
            .position(|&t| *v < t)
            .unwrap_or(layers as usize - 1);
        let target = 1.0 + layer as f32 * step;
        let value = *v as f32;
        let pull = (0.2 + 0.8 * ((value - 128.0).abs() / 128.0)) * strength;
        *v = (value + pull * (target - value)).clamp(0.0, 255.0) as u8;
    }
}
