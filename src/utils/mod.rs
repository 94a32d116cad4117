//! Utility functions: indicators, statistics, file I/O.

mod data;
mod indicators;
mod metrics;

pub use data::*;
pub use indicators::*;
pub use metrics::*;
