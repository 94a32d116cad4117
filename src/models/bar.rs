//! Daily closing-price bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day: date and closing price.
///
/// Closing prices are expected to be positive but this is not enforced;
/// the data provider is trusted on that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

impl DailyBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}
