//! Price history state container — app-owned, SDK-provided update logic.

use super::PriceHistory;
use crate::shared::{CoinId, VsCurrency};
use std::collections::HashMap;

/// Live price history state keyed by asset, currency and window length.
///
/// The app owns instances of this type; a detail view that stops observing a
/// key just stops requesting — its entry remains until the next snapshot
/// supersedes it.
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryState {
    data: HashMap<(CoinId, VsCurrency, u32), PriceHistory>,
}

impl PriceHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a fetched snapshot, replacing all data for this key wholesale.
    pub fn apply_snapshot(
        &mut self,
        coin: CoinId,
        currency: VsCurrency,
        days: u32,
        history: PriceHistory,
    ) {
        self.data.insert((coin, currency, days), history);
    }

    pub fn get(&self, coin: &CoinId, currency: VsCurrency, days: u32) -> Option<&PriceHistory> {
        self.data.get(&(coin.clone(), currency, days))
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::PricePoint;
    use chrono::DateTime;

    fn point(millis: i64, value: f64) -> PricePoint {
        PricePoint {
            time: DateTime::from_timestamp_millis(millis).unwrap(),
            value,
        }
    }

    fn history(values: &[(i64, f64)]) -> PriceHistory {
        PriceHistory {
            prices: values.iter().map(|&(t, v)| point(t, v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_snapshot_stores_by_key() {
        let mut state = PriceHistoryState::new();
        let coin = CoinId::from("bitcoin");
        state.apply_snapshot(
            coin.clone(),
            VsCurrency::Usd,
            7,
            history(&[(100, 50.0), (200, 51.0)]),
        );

        let stored = state.get(&coin, VsCurrency::Usd, 7).unwrap();
        assert_eq!(stored.prices.len(), 2);
        assert!(state.get(&coin, VsCurrency::Eur, 7).is_none());
        assert!(state.get(&coin, VsCurrency::Usd, 30).is_none());
    }

    #[test]
    fn test_apply_snapshot_replaces_wholesale() {
        let mut state = PriceHistoryState::new();
        let coin = CoinId::from("bitcoin");
        state.apply_snapshot(
            coin.clone(),
            VsCurrency::Usd,
            7,
            history(&[(100, 50.0), (200, 51.0)]),
        );
        state.apply_snapshot(coin.clone(), VsCurrency::Usd, 7, history(&[(300, 52.0)]));

        // No merge with the previous value.
        let stored = state.get(&coin, VsCurrency::Usd, 7).unwrap();
        assert_eq!(stored.prices.len(), 1);
        assert_eq!(stored.prices[0].value, 52.0);
    }

    #[test]
    fn test_clear() {
        let mut state = PriceHistoryState::new();
        let coin = CoinId::from("bitcoin");
        state.apply_snapshot(coin.clone(), VsCurrency::Usd, 7, history(&[(100, 50.0)]));
        state.clear();
        assert!(state.get(&coin, VsCurrency::Usd, 7).is_none());
    }
}
