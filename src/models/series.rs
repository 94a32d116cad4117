//! Ordered price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DailyBar;

/// Errors raised while constructing a price series.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("price series is empty")]
    Empty,

    #[error("dates must be strictly increasing (violation at index {index})")]
    OutOfOrder { index: usize },
}

/// An ordered sequence of daily closing prices, strictly increasing by date.
///
/// Immutable once constructed; the backtest only ever reads from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// Build a series from bars, enforcing strict date ordering.
    pub fn new(bars: Vec<DailyBar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::Empty);
        }
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(DataError::OutOfOrder { index: i + 1 });
            }
        }
        Ok(Self { bars })
    }

    /// Number of trading days in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Extract the closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract the trading dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }
}
