//! Power-law gamma remapping.
//!
//! Values above 1.0 lift shadow detail that would otherwise collapse into
//! the darkest level after 2-bit quantization.

use crate::buffer::SampleBuffer;

/// Build the 256-entry lookup table `255 * (v / 255)^(1 / gamma)`, rounded.
///
/// Returns the identity table for `gamma == 1.0` and for gammas that are
/// not finite and positive.
pub fn gamma_lut(gamma: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    if gamma == 1.0 || !gamma.is_finite() || gamma <= 0.0 {
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        return lut;
    }

    let inv_gamma = 1.0 / gamma as f64;
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f64 / 255.0;
        let mapped = 255.0 * x.powf(inv_gamma) + 0.5;
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Apply gamma in place.
///
/// `gamma == 1.0` returns without touching the buffer. Non-finite or
/// non-positive gammas are also left alone; callers validate them earlier.
pub fn apply_gamma(buffer: &mut SampleBuffer, gamma: f32) {
    if gamma == 1.0 || !gamma.is_finite() || gamma <= 0.0 {
        return;
    }

    let lut = gamma_lut(gamma);
    for v in buffer.samples_mut() {
        *v = lut[*v as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SampleBuffer {
        SampleBuffer::new(256, 1, (0..=255u8).collect()).unwrap()
    }

    #[test]
    fn test_identity_gamma_is_noop() {
        let mut buffer = ramp();
        apply_gamma(&mut buffer, 1.0);
        assert_eq!(buffer, ramp());
    }

    #[test]
    fn test_endpoints_fixed() {
        for gamma in [0.5, 1.4, 2.2, 2.4, 3.0] {
            let lut = gamma_lut(gamma);
            assert_eq!(lut[0], 0, "gamma {gamma}");
            assert_eq!(lut[255], 255, "gamma {gamma}");
        }
    }

    #[test]
    fn test_gamma_above_one_lightens() {
        let lut = gamma_lut(2.2);
        // 255 * (64/255)^(1/2.2) = 136.0
        assert_eq!(lut[64], 136);
        for i in 1..255 {
            assert!(lut[i] >= i as u8, "entry {i} should not darken");
        }
    }

    #[test]
    fn test_gamma_below_one_darkens() {
        let lut = gamma_lut(0.5);
        // 255 * (128/255)^2 = 64.25
        assert_eq!(lut[128], 64);
    }

    #[test]
    fn test_lut_is_monotonic() {
        let lut = gamma_lut(1.8);
        for w in lut.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_invalid_gamma_leaves_buffer() {
        let mut buffer = ramp();
        apply_gamma(&mut buffer, 0.0);
        apply_gamma(&mut buffer, -1.0);
        apply_gamma(&mut buffer, f32::NAN);
        assert_eq!(buffer, ramp());
    }
}
