//! Data structures for daily bars and price series.

mod bar;
mod series;

pub use bar::DailyBar;
pub use series::{DataError, PriceSeries};
