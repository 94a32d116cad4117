//! Backtesting engine: dual-path PnL computation and result record.

mod engine;
mod pnl;
mod result;

pub use engine::run_backtest;
pub use pnl::{cumulative_pnl, cumulative_pnl_into, timed_buffer_pnl, timed_scan_pnl, TimedCurve};
pub use result::{BacktestResult, ScatterPoint};
