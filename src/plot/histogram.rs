//! Equal-width histogram binning.
//!
//! Binning is kept separate from rendering so the ASCII and SVG renderers
//! share one set of bucket semantics: `bins` equal-width buckets over
//! `[min, max]`, half-open except the last, which is closed so the maximum
//! value is counted.

/// Binned frequency counts. `edges.len() == counts.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` into `bins` equal-width buckets over their observed range.
///
/// Returns `None` when there are no values or `bins` is zero. A sample where
/// every value is identical gets a half-unit pad on each side so the single
/// spike still renders.
pub fn build_histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    if hi - lo < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();
    Some(Histogram { edges, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_the_range_and_preserve_the_count() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = build_histogram(&values, 5).unwrap();
        assert_eq!(hist.counts.len(), 5);
        assert_eq!(hist.edges.len(), 6);
        assert_eq!(hist.total(), values.len());
        assert!((hist.edges[0] - 1.0).abs() < 1e-12);
        assert!((hist.edges[5] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn maximum_value_lands_in_the_last_bucket() {
        let values = [0.0, 10.0];
        let hist = build_histogram(&values, 5).unwrap();
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[4], 1);
    }

    #[test]
    fn identical_values_get_a_padded_range() {
        let values = [3.0, 3.0, 3.0];
        let hist = build_histogram(&values, 5).unwrap();
        assert_eq!(hist.total(), 3);
        assert!(hist.edges[0] < 3.0 && 3.0 < hist.edges[5]);
    }

    #[test]
    fn empty_input_or_zero_bins_is_none() {
        assert_eq!(build_histogram(&[], 5), None);
        assert_eq!(build_histogram(&[1.0], 0), None);
    }
}
