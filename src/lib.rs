//! # Crossover Backtest
//!
//! A single-strategy backtesting demonstration: fetch daily closing prices,
//! derive a dual moving-average crossover signal, simulate the long/flat
//! strategy, and compare two implementations of the cumulative PnL
//! recurrence against each other and a buy-and-hold baseline.
//!
//! ## Modules
//!
//! - `api` - Stooq client for fetching daily market data
//! - `models` - Price series data model
//! - `strategy` - Crossover signal and strategy-return derivation
//! - `backtest` - Dual-path PnL engine and result record
//! - `utils` - Indicators, statistics and file I/O

pub mod api;
pub mod backtest;
pub mod models;
pub mod strategy;
pub mod utils;

pub use api::StooqClient;
pub use backtest::{run_backtest, BacktestResult};
pub use models::{DailyBar, PriceSeries};
pub use strategy::{CrossoverParams, StrategyFrame};
