//! Price history domain — chart series, app-owned state.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::PriceHistoryState;

/// A single data point on a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

/// Historical series for one asset in one quote currency.
///
/// Every series is ascending by timestamp and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub prices: Vec<PricePoint>,
    pub market_caps: Vec<PricePoint>,
    pub total_volumes: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price values in timestamp order, ready for the sparkline transform.
    pub fn price_values(&self) -> Vec<f64> {
        self.prices.iter().map(|p| p.value).collect()
    }
}
