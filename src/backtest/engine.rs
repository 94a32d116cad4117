//! Backtest pipeline: frame -> dual-path PnL -> metrics -> result.

use tracing::info;

use crate::backtest::pnl::{cumulative_pnl, timed_buffer_pnl, timed_scan_pnl};
use crate::backtest::result::{BacktestResult, ScatterPoint};
use crate::models::PriceSeries;
use crate::strategy::{CrossoverParams, StrategyError, StrategyFrame};
use crate::utils::sharpe_ratio;

/// Run the crossover backtest over one price series.
///
/// Computes the strategy cumulative PnL through both code paths, the
/// buy-and-hold baseline, the annualized Sharpe ratio of the strategy
/// returns, and the elapsed wall-clock time of each path. Prints the two
/// timings and the Sharpe ratio; everything else is returned in the
/// result record.
pub fn run_backtest(
    symbol: &str,
    series: &PriceSeries,
    params: &CrossoverParams,
) -> Result<BacktestResult, StrategyError> {
    let frame = StrategyFrame::build(series, params)?;

    info!(
        "Running backtest for {} over {} rows (windows {}/{})",
        symbol,
        frame.len(),
        params.short_window,
        params.long_window
    );

    let scan = timed_scan_pnl(&frame.strategy_returns);
    let buffered = timed_buffer_pnl(&frame.strategy_returns);

    // Baseline: permanently long, no lag, raw daily returns.
    let buy_hold_pnl = cumulative_pnl(&frame.daily_returns);

    let sharpe = sharpe_ratio(&frame.strategy_returns, 0.0);

    let scatter = ScatterPoint {
        index: frame.len() - 1,
        pnl: buffered.curve.last().copied().unwrap_or(1.0),
    };

    println!("Scan path runtime:   {:.6} sec", scan.elapsed.as_secs_f64());
    println!(
        "Buffer path runtime: {:.6} sec",
        buffered.elapsed.as_secs_f64()
    );
    println!("Sharpe Ratio: {:.2}", sharpe);

    Ok(BacktestResult {
        symbol: symbol.to_string(),
        short_window: params.short_window,
        long_window: params.long_window,
        dates: frame.dates,
        strategy_pnl: scan.curve,
        strategy_pnl_fast: buffered.curve,
        buy_hold_pnl,
        sharpe,
        elapsed_scan: scan.elapsed,
        elapsed_buffer: buffered.elapsed,
        scatter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyBar;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| DailyBar::new(start + chrono::Duration::days(i as i64), c))
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    fn params(short: usize, long: usize) -> CrossoverParams {
        CrossoverParams::new(short, long).unwrap()
    }

    #[test]
    fn test_curves_aligned_and_equal() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.4).sin() * 5.0 + i as f64 * 0.1)
            .collect();
        let result = run_backtest("test", &series(&closes), &params(5, 10)).unwrap();

        let n = closes.len() - 9;
        assert_eq!(result.dates.len(), n);
        assert_eq!(result.strategy_pnl.len(), n);
        assert_eq!(result.strategy_pnl_fast.len(), n);
        assert_eq!(result.buy_hold_pnl.len(), n);

        for (a, b) in result.strategy_pnl.iter().zip(&result.strategy_pnl_fast) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_buy_hold_independent_of_signal() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 - i as f64 * 0.5).collect();
        let s = series(&closes);
        let result = run_backtest("test", &s, &params(3, 7)).unwrap();

        // Falling market: the strategy stays flat, the baseline compounds
        // the raw losses regardless.
        let frame = StrategyFrame::build(&s, &params(3, 7)).unwrap();
        let expected = cumulative_pnl(&frame.daily_returns);
        assert_eq!(result.buy_hold_pnl, expected);
        assert!(result.final_buy_hold() < 1.0);
        assert!((result.final_pnl() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scatter_is_final_buffer_value() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = run_backtest("test", &series(&closes), &params(2, 4)).unwrap();
        assert_eq!(result.scatter.index, result.strategy_pnl_fast.len() - 1);
        assert_eq!(
            result.scatter.pnl,
            *result.strategy_pnl_fast.last().unwrap()
        );
    }

    #[test]
    fn test_flat_market_sharpe_is_zero() {
        let result = run_backtest("test", &series(&[100.0; 20]), &params(2, 4)).unwrap();
        assert_eq!(result.sharpe, 0.0);
    }

    #[test]
    fn test_too_short_series_is_an_error() {
        let err = run_backtest("test", &series(&[100.0, 101.0]), &params(2, 4)).unwrap_err();
        assert!(matches!(err, StrategyError::InsufficientData { .. }));
    }
}
