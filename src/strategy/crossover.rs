//! Dual moving-average crossover signal and strategy returns.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::PriceSeries;
use crate::utils::{returns, sma};

/// Errors raised while deriving the strategy series.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("window lengths must satisfy 0 < short ({short}) < long ({long})")]
    InvalidWindows { short: usize, long: usize },

    #[error("need at least {needed} closes for the long window, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

/// Moving-average window lengths for the crossover signal.
#[derive(Debug, Clone, Copy)]
pub struct CrossoverParams {
    /// Short moving-average window
    pub short_window: usize,
    /// Long moving-average window
    pub long_window: usize,
}

impl Default for CrossoverParams {
    fn default() -> Self {
        Self {
            short_window: 20,
            long_window: 50,
        }
    }
}

impl CrossoverParams {
    pub fn new(short_window: usize, long_window: usize) -> Result<Self, StrategyError> {
        if short_window == 0 || short_window >= long_window {
            return Err(StrategyError::InvalidWindows {
                short: short_window,
                long: long_window,
            });
        }
        Ok(Self {
            short_window,
            long_window,
        })
    }
}

/// Index-aligned working series for the backtest, truncated to the rows
/// where both moving averages are defined.
///
/// Row 0 corresponds to index `long_window - 1` of the original series.
#[derive(Debug, Clone)]
pub struct StrategyFrame {
    /// Retained trading dates
    pub dates: Vec<NaiveDate>,
    /// Retained closing prices
    pub closes: Vec<f64>,
    /// Position signal per row: 1 = long, 0 = flat
    pub signals: Vec<u8>,
    /// Close-to-close return per row, 0.0 at the first retained row
    pub daily_returns: Vec<f64>,
    /// Prior row's signal times this row's return, 0.0 where undefined
    pub strategy_returns: Vec<f64>,
}

impl StrategyFrame {
    /// Derive signals and strategy returns from a price series.
    ///
    /// The signal is long while the short moving average is strictly above
    /// the long one; ties resolve to flat. The strategy holds yesterday's
    /// signal through today's move, so returns are lagged by one row and
    /// the first retained row is always 0.
    pub fn build(series: &PriceSeries, params: &CrossoverParams) -> Result<Self, StrategyError> {
        if params.short_window == 0 || params.short_window >= params.long_window {
            return Err(StrategyError::InvalidWindows {
                short: params.short_window,
                long: params.long_window,
            });
        }
        if series.len() < params.long_window {
            return Err(StrategyError::InsufficientData {
                needed: params.long_window,
                got: series.len(),
            });
        }

        let all_closes = series.closes();
        let all_dates = series.dates();
        let ma_short = sma(&all_closes, params.short_window);
        let ma_long = sma(&all_closes, params.long_window);

        // Both averages are defined from here on.
        let start = params.long_window - 1;
        let n = all_closes.len() - start;

        let dates = all_dates[start..].to_vec();
        let closes = all_closes[start..].to_vec();

        let signals: Vec<u8> = (start..all_closes.len())
            .map(|i| match (ma_short[i], ma_long[i]) {
                (Some(s), Some(l)) if s > l => 1,
                _ => 0,
            })
            .collect();

        // First retained row has no prior close; zero-fill by policy.
        let mut daily_returns = Vec::with_capacity(n);
        daily_returns.push(0.0);
        daily_returns.extend(returns(&closes));

        let mut strategy_returns = vec![0.0; n];
        for j in 1..n {
            // NaN/inf from degenerate prices must not propagate downstream.
            if !daily_returns[j].is_finite() {
                daily_returns[j] = 0.0;
            }
            let r = f64::from(signals[j - 1]) * daily_returns[j];
            strategy_returns[j] = if r.is_finite() { r } else { 0.0 };
        }

        debug!(
            "Built strategy frame: {} rows retained of {} ({} dropped for warm-up)",
            n,
            series.len(),
            start
        );

        Ok(Self {
            dates,
            closes,
            signals,
            daily_returns,
            strategy_returns,
        })
    }

    /// Number of retained rows.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}
