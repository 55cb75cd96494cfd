//! Domain-critical regression tests for eink-tone.
//!
//! These tests pin down the properties the panel firmware and the container
//! encoder rely on. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::TonePipeline;
    use crate::buffer::{PixelIndexBuffer, SampleBuffer};
    use crate::contrast::{
        select_bounds, stretch_contrast, Histogram, StretchBounds, StretchOptions,
    };
    use crate::dither::{DitherOptions, FloydSteinberg, Quantize};
    use crate::palette::BitDepth;
    use crate::preprocess::{apply_gamma, rgba_to_luma, sharpen_edges};

    fn gray_rgba(values: &[u8]) -> Vec<u8> {
        values.iter().flat_map(|&v| [v, v, v, 255]).collect()
    }

    /// Deterministic pseudo-random samples with a broad histogram.
    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed.wrapping_mul(2654435761).max(1);
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect()
    }

    // ========================================================================
    // Identity parameters leave grayscale untouched
    // ========================================================================

    /// If this breaks, it means: one of the "off" settings (gamma 1.0,
    /// sharpen 0, clip/cost 0) is no longer a byte-exact no-op, so users who
    /// disable processing still get altered tones.
    #[test]
    fn test_identity_parameters_preserve_luma() {
        let values = noise(64, 7);
        let rgba = gray_rgba(&values);
        let luma = rgba_to_luma(&rgba, 8, 8).unwrap();

        let result = TonePipeline::new(BitDepth::TwoPixelBit)
            .gamma(1.0)
            .sharpen(0.0)
            .clip_fraction(0.0)
            .cost_fraction(0.0)
            .dither_strength(0.0)
            .run(&rgba, 8, 8)
            .unwrap();

        assert_eq!(result.preview(), &luma);
        assert_eq!(result.bounds(), StretchBounds::IDENTITY);
    }

    // ========================================================================
    // Quantizer output is always on the level set
    // ========================================================================

    /// If this breaks, it means: error diffusion leaked into an
    /// already-written pixel or the level snap rounds outside the palette,
    /// and the index buffer would carry values the panel cannot show.
    #[test]
    fn test_quantizer_output_in_level_set() {
        for (seed, depth) in [
            (1, BitDepth::OnePixelBit),
            (2, BitDepth::TwoPixelBit),
            (3, BitDepth::TwoPixelBit),
        ] {
            let input = SampleBuffer::new(13, 11, noise(13 * 11, seed)).unwrap();
            let levels = depth.level_values();
            for strength in [0.0, 0.5, 1.0] {
                let out = FloydSteinberg.quantize(
                    &input,
                    depth,
                    &DitherOptions::new().strength(strength),
                );
                for &v in out.samples() {
                    assert!(
                        levels.contains(&v),
                        "REGRESSION: {v} not in {levels:?} (depth {depth:?}, strength {strength})"
                    );
                }
            }
        }
    }

    // ========================================================================
    // Stretch bounds invariant
    // ========================================================================

    /// If this breaks, it means: the weighted approach let the black and
    /// white points meet or cross, and the remap would divide by zero or
    /// invert the image.
    #[test]
    fn test_stretch_bounds_ordered_and_extremes_saturate() {
        for seed in 1..20u32 {
            let samples = noise(200, seed);
            let hist = Histogram::from_samples(&samples);
            let opts = StretchOptions::new()
                .clip_fraction((seed % 5) as f64 * 0.25)
                .cost_fraction((seed % 4) as f64 * 0.3);
            let bounds = select_bounds(&hist, &opts);
            assert!(bounds.left() < bounds.right(), "seed {seed}: {bounds:?}");

            let mut buffer = SampleBuffer::new(20, 10, samples.clone()).unwrap();
            let applied = stretch_contrast(&mut buffer, &opts);
            assert_eq!(applied, bounds);
            for (&before, &after) in samples.iter().zip(buffer.samples()) {
                if before <= bounds.left() {
                    assert_eq!(after, 0);
                }
                if before >= bounds.right() {
                    assert_eq!(after, 255);
                }
            }
        }
    }

    /// If this breaks, it means: a perfectly flat image gets "stretched"
    /// into solid black or white.
    #[test]
    fn test_flat_gray_stays_flat() {
        let rgba = gray_rgba(&[128; 16]);
        let result = TonePipeline::new(BitDepth::TwoPixelBit)
            .clip_fraction(0.5)
            .run(&rgba, 4, 4)
            .unwrap();

        assert!(result.preview().samples().iter().all(|&v| v == 128));
        assert_eq!(result.bounds(), StretchBounds::IDENTITY);
        let first = result.quantized().samples()[0];
        assert!(BitDepth::TwoPixelBit.level_values().contains(&first));
    }

    // ========================================================================
    // Exact levels propagate no error
    // ========================================================================

    /// If this breaks, it means: samples already sitting on a level produce
    /// spurious error, which shows up as noise in pure black and white art.
    #[test]
    fn test_checkerboard_snaps_exactly() {
        let input = SampleBuffer::new(2, 2, vec![0, 255, 255, 0]).unwrap();
        let out = FloydSteinberg.quantize(&input, BitDepth::TwoPixelBit, &DitherOptions::new());
        assert_eq!(out.samples(), &[0, 255, 255, 0]);

        let indices = PixelIndexBuffer::from_levels(&out, BitDepth::TwoPixelBit);
        assert_eq!(indices.indices(), &[0, 3, 3, 0]);
    }

    // ========================================================================
    // Disabled stages are byte-exact no-ops
    // ========================================================================

    /// If this breaks, it means: sharpening with amount 0 or gamma 1.0
    /// still round-trips through float math and shifts some samples.
    #[test]
    fn test_disabled_stages_are_noops() {
        let original = SampleBuffer::new(9, 7, noise(63, 42)).unwrap();

        let mut sharpened = original.clone();
        sharpen_edges(&mut sharpened, 0.0);
        assert_eq!(sharpened, original);

        let mut gamma = original.clone();
        apply_gamma(&mut gamma, 1.0);
        assert_eq!(gamma, original);
    }

    // ========================================================================
    // Index buffer agrees with the quantized grey values
    // ========================================================================

    /// If this breaks, it means: palette lookup of the encoded indices no
    /// longer reproduces the quantized intensities.
    #[test]
    fn test_indices_recover_quantized_values() {
        let values = noise(48, 9);
        for depth in [BitDepth::OnePixelBit, BitDepth::TwoPixelBit] {
            let result = TonePipeline::new(depth)
                .gamma(1.6)
                .sharpen(0.8)
                .run(&gray_rgba(&values), 8, 6)
                .unwrap();
            assert_eq!(&result.indices().to_levels(), result.quantized());
        }
    }
}
