//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: `dx` is the horizontal offset in the
/// scan direction (negated on right-to-left rows), `dy` is always below or
/// on the current row. A neighbour receives `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub entries: &'static [(i32, i32, u8)],
    pub divisor: u8,
}

impl Kernel {
    /// Share of the error the kernel propagates, 1.0 for lossless kernels.
    pub fn propagation(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg kernel, 100% propagation.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // ahead
        (-1, 1, 3), // diagonal-back
        (0, 1, 5),  // below
        (1, 1, 1),  // diagonal-ahead
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16);
        assert_eq!(FLOYD_STEINBERG.divisor, 16);
        assert!((FLOYD_STEINBERG.propagation() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_floyd_steinberg_only_reaches_unvisited() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(dy > 0 || dx > 0, "({dx}, {dy}) points backwards");
        }
    }
}
