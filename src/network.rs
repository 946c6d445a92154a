//! Network URL constants for the CoinDash SDK.

/// Default REST API base URL (CoinGecko public v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
