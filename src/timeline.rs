/// Default span of the synthetic time axis.
pub const DEFAULT_TIME_SPAN: f64 = 30.0;

/// `n` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Time axis for a series of `n` samples. Recorded timestamps are ignored,
/// so two series line up by fractional position in their own run.
pub fn synthetic_time(n: usize, span: f64) -> Vec<f64> {
    linspace(0.0, span, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let t = linspace(0.0, 30.0, 7);
        assert_eq!(t.len(), 7);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[6], 30.0);
        assert!((t[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 30.0, 0).is_empty());
        assert_eq!(linspace(0.0, 30.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 30.0, 2), vec![0.0, 30.0]);
    }
}
