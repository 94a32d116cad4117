//! Technical indicators.

/// Calculate Simple Moving Average.
///
/// Indices before a full window of history exists are `None`.
pub fn sma(data: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || data.is_empty() {
        return vec![None; data.len()];
    }

    data.iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < period {
                None
            } else {
                let sum: f64 = data[i + 1 - period..=i].iter().sum();
                Some(sum / period as f64)
            }
        })
        .collect()
}

/// Calculate simple returns from prices.
///
/// Output has one fewer element than the input; `returns[i]` is the return
/// from `prices[i]` to `prices[i + 1]`.
pub fn returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return vec![];
    }

    prices
        .windows(2)
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}
