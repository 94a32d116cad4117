//! Data utilities for saving and loading price series.

use crate::models::{DailyBar, PriceSeries};
use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Save a price series to a CSV file (`date,close`).
pub fn save_price_series_csv(series: &PriceSeries, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::from("date,close\n");
    for bar in series.bars() {
        content.push_str(&format!("{},{}\n", bar.date, bar.close));
    }

    fs::write(path, content)?;
    Ok(())
}

/// Load a price series from a CSV file (`date,close`).
///
/// The offline equivalent of the market-data fetch, for working from a
/// previously exported spreadsheet.
pub fn load_price_series_csv(path: &Path) -> Result<PriceSeries> {
    let content = fs::read_to_string(path)?;
    let mut bars = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if i == 0 {
            continue; // Skip header
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 2 {
            continue;
        }

        let date = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")?;
        let close: f64 = parts[1].parse()?;
        bars.push(DailyBar::new(date, close));
    }

    Ok(PriceSeries::new(bars)?)
}
