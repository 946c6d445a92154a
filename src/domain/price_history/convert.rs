//! Conversion: MarketChartResponse → PriceHistory.

use super::wire::MarketChartResponse;
use super::{PriceHistory, PricePoint};
use chrono::DateTime;

impl From<MarketChartResponse> for PriceHistory {
    fn from(source: MarketChartResponse) -> Self {
        Self {
            prices: convert_series(source.prices),
            market_caps: convert_series(source.market_caps),
            total_volumes: convert_series(source.total_volumes),
        }
    }
}

/// Millisecond pairs → points, ascending by timestamp.
///
/// Pairs whose timestamp falls outside the representable range are dropped.
fn convert_series(pairs: Vec<(i64, f64)>) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = pairs
        .into_iter()
        .filter_map(|(millis, value)| {
            DateTime::from_timestamp_millis(millis).map(|time| PricePoint { time, value })
        })
        .collect();

    points.sort_by_key(|p| p.time);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sorted_ascending() {
        let resp = MarketChartResponse {
            prices: vec![
                (1710378000000, 67301.9),
                (1710374400000, 67234.1),
                (1710381600000, 67150.0),
            ],
            ..Default::default()
        };

        let history = PriceHistory::from(resp);
        assert_eq!(history.prices.len(), 3);
        for pair in history.prices.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
        assert_eq!(history.price_values(), vec![67234.1, 67301.9, 67150.0]);
    }

    #[test]
    fn test_empty_response_yields_empty_history() {
        let history = PriceHistory::from(MarketChartResponse::default());
        assert!(history.is_empty());
        assert!(history.price_values().is_empty());
    }

    #[test]
    fn test_out_of_range_timestamps_dropped() {
        let resp = MarketChartResponse {
            prices: vec![(i64::MAX, 1.0), (1710374400000, 2.0)],
            ..Default::default()
        };

        let history = PriceHistory::from(resp);
        assert_eq!(history.prices.len(), 1);
        assert_eq!(history.prices[0].value, 2.0);
    }
}
