//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;
pub mod sparkline;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── VsCurrency ──────────────────────────────────────────────────────────────

/// Quote currency for prices, market caps and volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VsCurrency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
}

impl VsCurrency {
    /// All supported currencies, in selector display order.
    pub const ALL: [VsCurrency; 8] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
    ];

    /// The lowercase code used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
            Self::Jpy => "jpy",
            Self::Aud => "aud",
            Self::Cad => "cad",
            Self::Chf => "chf",
            Self::Cny => "cny",
        }
    }

    /// Display symbol prefixed to formatted prices.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "C$",
            Self::Chf => "CHF",
            Self::Cny => "¥",
        }
    }

    /// Human-readable currency name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Jpy => "Japanese Yen",
            Self::Aud => "Australian Dollar",
            Self::Cad => "Canadian Dollar",
            Self::Chf => "Swiss Franc",
            Self::Cny => "Chinese Yuan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "usd" => Some(Self::Usd),
            "eur" => Some(Self::Eur),
            "gbp" => Some(Self::Gbp),
            "jpy" => Some(Self::Jpy),
            "aud" => Some(Self::Aud),
            "cad" => Some(Self::Cad),
            "chf" => Some(Self::Chf),
            "cny" => Some(Self::Cny),
            _ => None,
        }
    }
}

impl std::fmt::Display for VsCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_vs_currency_serde() {
        let c: VsCurrency = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(c, VsCurrency::Eur);
        assert_eq!(serde_json::to_string(&VsCurrency::Gbp).unwrap(), "\"gbp\"");
    }

    #[test]
    fn test_vs_currency_round_trips_through_code() {
        for currency in VsCurrency::ALL {
            assert_eq!(VsCurrency::from_str(currency.as_str()), Some(currency));
        }
        assert_eq!(VsCurrency::from_str("xrp"), None);
    }

    #[test]
    fn test_vs_currency_symbols() {
        assert_eq!(VsCurrency::Usd.symbol(), "$");
        assert_eq!(VsCurrency::Eur.symbol(), "€");
        assert_eq!(VsCurrency::Chf.symbol(), "CHF");
        // JPY and CNY share the yen/yuan sign.
        assert_eq!(VsCurrency::Jpy.symbol(), VsCurrency::Cny.symbol());
    }

    #[test]
    fn test_vs_currency_default_is_usd() {
        assert_eq!(VsCurrency::default(), VsCurrency::Usd);
    }
}
