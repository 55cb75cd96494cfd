//! Error diffusion quantization to the panel's grey levels.
//!
//! All quantizers implement [`Quantize`]. They read a
//! [`SampleBuffer`] and return a new one whose samples are all exact grey
//! levels of the target [`BitDepth`]; the input stays untouched so the
//! undithered buffer remains available for previews.
//!
//! # Example
//!
//! ```
//! use eink_tone::{BitDepth, DitherOptions, FloydSteinberg, Quantize, SampleBuffer};
//!
//! let gray = SampleBuffer::filled(4, 4, 128);
//! let out = FloydSteinberg.quantize(&gray, BitDepth::OnePixelBit, &DitherOptions::new());
//! assert!(out.samples().iter().all(|&v| v == 0 || v == 255));
//! ```

mod floyd_steinberg;
mod kernel;
mod options;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::DitherOptions;

use crate::buffer::SampleBuffer;
use crate::palette::BitDepth;

/// Reduction of a grey buffer to the levels of a [`BitDepth`].
pub trait Quantize {
    /// Quantize `buffer`, returning a buffer of the same size in which every
    /// sample is one of `depth.level_values()`.
    fn quantize(&self, buffer: &SampleBuffer, depth: BitDepth, options: &DitherOptions)
        -> SampleBuffer;
}

/// Generic kernel-driven error diffusion.
///
/// Works on an `f32` copy of the input. Each pixel snaps to the nearest
/// level, then `(old - quantized) * strength` is spread over the kernel's
/// unvisited neighbours. Neighbour values are clamped to `0.0..=255.0` after
/// every write. With serpentine scanning odd rows run right-to-left and the
/// kernel is mirrored.
pub fn diffuse_with_kernel(
    buffer: &SampleBuffer,
    depth: BitDepth,
    kernel: &Kernel,
    options: &DitherOptions,
) -> SampleBuffer {
    let width = buffer.width();
    let height = buffer.height();
    let mut work: Vec<f32> = buffer.samples().iter().map(|&v| v as f32).collect();
    let mut out = vec![0u8; work.len()];

    let step = depth.step() as f32;
    let max_index = (depth.levels() - 1) as f32;
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        let reverse = options.serpentine && y % 2 == 1;
        for i in 0..width {
            let x = if reverse { width - 1 - i } else { i };
            let idx = y * width + x;

            let old = work[idx];
            let index = (old / step).round().clamp(0.0, max_index) as u8;
            let quantized = depth.level_value(index);
            out[idx] = quantized;

            let error = (old - quantized as f32) * options.strength;
            if error == 0.0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let dx = if reverse { -dx } else { dx };
                let nx = x as isize + dx as isize;
                let ny = y + dy as usize;
                if nx < 0 || nx >= width as isize || ny >= height {
                    continue;
                }
                let n = ny * width + nx as usize;
                work[n] = (work[n] + error * weight as f32 / divisor).clamp(0.0, 255.0);
            }
        }
    }

    SampleBuffer::from_raw(width, height, out)
}
