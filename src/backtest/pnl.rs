//! Cumulative PnL computation, twice over.
//!
//! The compounding recurrence is implemented through two independent code
//! paths so their runtimes can be measured against each other: a
//! straightforward allocating scan, and a kernel-style routine that writes
//! into a caller-provided flat buffer. Both follow the same strict
//! left-to-right order (floating-point compounding is order-sensitive), so
//! their outputs are numerically equal.

use std::time::{Duration, Instant};

/// A cumulative PnL curve together with how long it took to compute.
#[derive(Debug, Clone)]
pub struct TimedCurve {
    pub curve: Vec<f64>,
    pub elapsed: Duration,
}

/// Running compounded product of `(1 + r)`: growth of one unit of capital.
///
/// `cum[0] = 1 + returns[0]`, `cum[i] = cum[i-1] * (1 + returns[i])`.
pub fn cumulative_pnl(returns: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0_f64, |acc, r| {
            *acc *= 1.0 + r;
            Some(*acc)
        })
        .collect()
}

/// Same recurrence over flat buffers, keeping the accumulator in a local
/// and writing each step into `out`.
///
/// This mirrors the calling convention of a native kernel (input buffer,
/// length, output buffer) without the foreign-function boundary.
///
/// # Panics
/// Panics if `out.len() != returns.len()`.
pub fn cumulative_pnl_into(returns: &[f64], out: &mut [f64]) {
    assert_eq!(
        returns.len(),
        out.len(),
        "output buffer length must match input"
    );

    let mut acc = 1.0_f64;
    for (slot, r) in out.iter_mut().zip(returns) {
        acc *= 1.0 + r;
        *slot = acc;
    }
}

/// Run the scan path under a wall-clock timer.
pub fn timed_scan_pnl(returns: &[f64]) -> TimedCurve {
    let start = Instant::now();
    let curve = cumulative_pnl(returns);
    TimedCurve {
        curve,
        elapsed: start.elapsed(),
    }
}

/// Run the buffer path under a wall-clock timer.
///
/// The output allocation happens before the timer starts so only the
/// kernel itself is measured.
pub fn timed_buffer_pnl(returns: &[f64]) -> TimedCurve {
    let mut curve = vec![0.0; returns.len()];
    let start = Instant::now();
    cumulative_pnl_into(returns, &mut curve);
    TimedCurve {
        curve,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() <= tol, "{x} vs {y}");
        }
    }

    #[test]
    fn test_recurrence_known_values() {
        let curve = cumulative_pnl(&[0.1, -0.05, 0.02]);
        assert_close(&curve, &[1.1, 1.045, 1.0659], 1e-9);
    }

    #[test]
    fn test_paths_agree() {
        let cases: Vec<Vec<f64>> = vec![
            vec![],
            vec![0.0],
            vec![0.042],
            vec![0.0; 100],
            vec![0.1, -0.05, 0.02],
            (0..5000)
                .map(|i| ((i as f64) * 0.73).sin() * 0.03)
                .collect(),
        ];

        for returns in cases {
            let scan = cumulative_pnl(&returns);
            let mut buffered = vec![0.0; returns.len()];
            cumulative_pnl_into(&returns, &mut buffered);
            assert_close(&scan, &buffered, 1e-12);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(cumulative_pnl(&[]).is_empty());
    }

    #[test]
    fn test_single_element() {
        let curve = cumulative_pnl(&[0.05]);
        assert_close(&curve, &[1.05], 1e-12);
    }

    #[test]
    #[should_panic(expected = "output buffer length")]
    fn test_mismatched_buffer_panics() {
        let mut out = vec![0.0; 2];
        cumulative_pnl_into(&[0.1, 0.2, 0.3], &mut out);
    }

    #[test]
    fn test_timed_wrappers_report_curves() {
        let returns = vec![0.01, 0.02, -0.01];
        let scan = timed_scan_pnl(&returns);
        let buffered = timed_buffer_pnl(&returns);
        assert_close(&scan.curve, &buffered.curve, 1e-12);
    }
}
