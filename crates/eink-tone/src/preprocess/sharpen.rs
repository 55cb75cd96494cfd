//! Laplacian edge sharpening.

use crate::buffer::SampleBuffer;

/// Sharpen edges in place with the 4-neighbour Laplacian.
///
/// For each interior pixel:
///
/// ```text
///          -1
///     -1   +4   -1      out = center + laplacian * amount
///          -1
/// ```
///
/// The result is rounded and clamped to `0..=255`. The one-pixel border is
/// left unmodified, and every neighbour is read from a snapshot taken before
/// the pass so the result does not depend on scan order. `amount <= 0`
/// (or NaN) is a no-op.
pub fn sharpen_edges(buffer: &mut SampleBuffer, amount: f32) {
    if amount.is_nan() || amount <= 0.0 {
        return;
    }
    let (w, h) = (buffer.width(), buffer.height());
    if w < 3 || h < 3 {
        return;
    }

    let snapshot = buffer.samples().to_vec();
    let out = buffer.samples_mut();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            let center = snapshot[idx] as i32;
            let laplacian = 4 * center
                - snapshot[idx - w] as i32
                - snapshot[idx + w] as i32
                - snapshot[idx - 1] as i32
                - snapshot[idx + 1] as i32;
            let value = center as f32 + laplacian as f32 * amount;
            out[idx] = value.round().clamp(0.0, 255.0) as u8;
        }
    }
}
