//! Backtest result record and report output.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use crate::utils::max_drawdown;

/// Highlight coordinate for the comparison chart: the last row index and
/// the final value of the buffer-path curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScatterPoint {
    pub index: usize,
    pub pnl: f64,
}

/// Everything one backtest run produces. Created once, read-only after.
#[derive(Debug, Clone, Serialize)]
pub struct BacktestResult {
    /// Symbol the prices belong to
    pub symbol: String,
    /// Short moving-average window
    pub short_window: usize,
    /// Long moving-average window
    pub long_window: usize,
    /// Retained trading dates, aligned with every curve below
    pub dates: Vec<NaiveDate>,
    /// Strategy cumulative PnL, scan path
    pub strategy_pnl: Vec<f64>,
    /// Strategy cumulative PnL, buffer path (equal within tolerance)
    pub strategy_pnl_fast: Vec<f64>,
    /// Buy-and-hold cumulative PnL baseline
    pub buy_hold_pnl: Vec<f64>,
    /// Annualized Sharpe ratio of the strategy returns
    pub sharpe: f64,
    /// Wall-clock time of the scan path
    pub elapsed_scan: Duration,
    /// Wall-clock time of the buffer path
    pub elapsed_buffer: Duration,
    /// Chart highlight: (last index, final buffer-path PnL)
    pub scatter: ScatterPoint,
}

impl BacktestResult {
    /// Final strategy PnL (growth of one unit of capital).
    pub fn final_pnl(&self) -> f64 {
        self.strategy_pnl.last().copied().unwrap_or(1.0)
    }

    /// Final buy-and-hold PnL.
    pub fn final_buy_hold(&self) -> f64 {
        self.buy_hold_pnl.last().copied().unwrap_or(1.0)
    }

    /// Pretty print the run summary.
    pub fn print_report(&self) {
        println!("═══════════════════════════════════════════════");
        println!("        SMA Crossover Backtest Summary         ");
        println!("═══════════════════════════════════════════════");
        println!("Symbol:            {:>18}", self.symbol);
        println!(
            "Windows:           {:>13} / {}",
            self.short_window, self.long_window
        );
        println!("Rows:              {:>18}", self.dates.len());
        println!("Strategy PnL:      {:>18.4}", self.final_pnl());
        println!("Buy & Hold PnL:    {:>18.4}", self.final_buy_hold());
        println!("Sharpe Ratio:      {:>18.2}", self.sharpe);
        println!(
            "Max Drawdown:      {:>17.2}%",
            max_drawdown(&self.strategy_pnl) * 100.0
        );
        println!(
            "Scan path:         {:>15.6} sec",
            self.elapsed_scan.as_secs_f64()
        );
        println!(
            "Buffer path:       {:>15.6} sec",
            self.elapsed_buffer.as_secs_f64()
        );
        println!(
            "Scatter point:     ({}, {:.4})",
            self.scatter.index, self.scatter.pnl
        );
        println!("═══════════════════════════════════════════════");
    }

    /// Save the full result record as JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Save the three date-indexed curves as CSV for an external plotter.
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::from("date,strategy_pnl,strategy_pnl_fast,buy_hold_pnl\n");
        for (i, date) in self.dates.iter().enumerate() {
            content.push_str(&format!(
                "{},{},{},{}\n",
                date, self.strategy_pnl[i], self.strategy_pnl_fast[i], self.buy_hold_pnl[i]
            ));
        }

        fs::write(path, content)?;
        Ok(())
    }
}
