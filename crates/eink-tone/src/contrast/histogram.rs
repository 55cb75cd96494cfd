use crate::buffer::SampleBuffer;

/// 256-bin intensity histogram with the running totals the stretch needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; 256],
    total: u64,
    sum: u64,
}

impl Histogram {
    /// Count every sample of `buffer`.
    pub fn from_buffer(buffer: &SampleBuffer) -> Self {
        Self::from_samples(buffer.samples())
    }

    pub fn from_samples(samples: &[u8]) -> Self {
        let mut bins = [0u64; 256];
        for &v in samples {
            bins[v as usize] += 1;
        }
        let sum = bins
            .iter()
            .enumerate()
            .map(|(v, &count)| v as u64 * count)
            .sum();
        Self {
            bins,
            total: samples.len() as u64,
            sum,
        }
    }

    #[inline]
    pub fn bins(&self) -> &[u64; 256] {
        &self.bins
    }

    /// Count in bin `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.bins[value as usize]
    }

    /// Number of samples counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of all sample values.
    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Mean intensity, 0.0 for an empty histogram.
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.sum as f64 / self.total as f64
        }
    }

    /// Total tonal spread: `sum(count[v] * |v - mean|)`.
    pub fn total_damage(&self) -> f64 {
        let mean = self.mean();
        self.bins
            .iter()
            .enumerate()
            .map(|(v, &count)| count as f64 * (v as f64 - mean).abs())
            .sum()
    }

    /// Darkest and brightest occupied bins, or `None` if empty.
    pub fn occupied_range(&self) -> Option<(u8, u8)> {
        let lo = self.bins.iter().position(|&c| c > 0)?;
        let hi = self.bins.iter().rposition(|&c| c > 0)?;
        Some((lo as u8, hi as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_totals() {
        let hist = Histogram::from_samples(&[0, 0, 10, 255]);
        assert_eq!(hist.count(0), 2);
        assert_eq!(hist.count(10), 1);
        assert_eq!(hist.count(255), 1);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.sum(), 265);
    }

    #[test]
    fn test_mean() {
        let hist = Histogram::from_samples(&[0, 100, 200]);
        assert!((hist.mean() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_damage() {
        // mean 100: |0-100| + |100-100| + |200-100| = 200
        let hist = Histogram::from_samples(&[0, 100, 200]);
        assert!((hist.total_damage() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        let hist = Histogram::from_samples(&[]);
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.mean(), 0.0);
        assert_eq!(hist.occupied_range(), None);
    }

    #[test]
    fn test_occupied_range() {
        let hist = Histogram::from_samples(&[40, 41, 200]);
        assert_eq!(hist.occupied_range(), Some((40, 200)));
    }
}
