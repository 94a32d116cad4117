//! Performance metrics and statistics.

use statrs::statistics::Statistics;

/// Trading days per year, used as a fixed annualization constant even for
/// windows shorter than a year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Calculate the annualized Sharpe ratio of a daily return series.
///
/// Uses sample standard deviation. A zero-variance series (and an empty
/// one) yields 0.0 rather than a division fault.
///
/// # Arguments
/// * `returns` - Daily period returns
/// * `risk_free_rate` - Annual risk-free rate (default 0)
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let daily_rf = risk_free_rate / TRADING_DAYS_PER_YEAR;
    let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();

    let mean_return = excess.iter().copied().mean();
    let std_dev = excess.iter().copied().std_dev();

    if std_dev == 0.0 || std_dev.is_nan() {
        return 0.0;
    }

    (mean_return / std_dev) * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Calculate maximum drawdown of an equity curve.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    if equity_curve.is_empty() {
        return 0.0;
    }

    let mut max_dd = 0.0;
    let mut peak = equity_curve[0];

    for &value in equity_curve {
        if value > peak {
            peak = value;
        }
        let dd = (peak - value) / peak;
        if dd > max_dd {
            max_dd = dd;
        }
    }

    max_dd
}
