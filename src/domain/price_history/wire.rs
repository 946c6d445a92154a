//! Wire types for historical chart responses (REST).

use serde::{Deserialize, Serialize};

/// Raw response from `/coins/{id}/market_chart`.
///
/// Each series is a list of `[epoch_millis, value]` pairs. The backend
/// usually sends them ascending, but ordering is not guaranteed at this
/// layer — the domain conversion enforces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<(i64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(i64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(i64, f64)>,
}
