//! Stooq API client implementation.
//!
//! Stooq serves end-of-day quotes as plain CSV with no authentication,
//! which is all this demonstration needs.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info};

use super::error::ApiError;
use crate::models::DailyBar;

/// Stooq base URL.
pub const STOOQ_BASE: &str = "https://stooq.com";

/// Stooq client for fetching daily market data.
#[derive(Clone)]
pub struct StooqClient {
    client: Client,
    base_url: String,
}

impl StooqClient {
    /// Create a new Stooq client.
    pub fn new() -> Self {
        Self::with_base_url(STOOQ_BASE)
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch daily closing prices for one symbol.
    ///
    /// # Arguments
    /// * `symbol` - Stooq symbol (e.g., "aapl.us")
    /// * `from` - First trading date to include
    /// * `to` - Last trading date to include
    pub async fn daily_closes(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBar>, ApiError> {
        let url = format!(
            "{}/q/d/l/?s={}&d1={}&d2={}&i=d",
            self.base_url,
            symbol,
            from.format("%Y%m%d"),
            to.format("%Y%m%d")
        );

        debug!("Fetching daily quotes: {}", url);

        let body = self.client.get(&url).send().await?.text().await?;
        let bars = parse_daily_csv(&body);

        if bars.is_empty() {
            return Err(ApiError::NoData(symbol.to_string()));
        }

        info!(
            "Fetched {} daily closes for {} ({} to {})",
            bars.len(),
            symbol,
            bars.first().map(|b| b.date).unwrap_or(from),
            bars.last().map(|b| b.date).unwrap_or(to)
        );

        Ok(bars)
    }
}

impl Default for StooqClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a Stooq daily CSV body (`Date,Open,High,Low,Close,Volume`).
///
/// Rows that fail to parse (missing values, "No data" banners) are skipped.
/// Output is sorted oldest first regardless of the wire ordering.
pub fn parse_daily_csv(body: &str) -> Vec<DailyBar> {
    let mut bars: Vec<DailyBar> = body
        .lines()
        .skip(1) // header
        .filter_map(|line| {
            let mut fields = line.split(',');
            let date = NaiveDate::parse_from_str(fields.next()?, "%Y-%m-%d").ok()?;
            let close: f64 = fields.nth(3)?.parse().ok()?;
            Some(DailyBar::new(date, close))
        })
        .collect();

    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
    bars
}
