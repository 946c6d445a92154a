//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (where a view holds
//!   data across fetches)
//! - `client.rs` — Sub-client with HTTP methods

pub mod coin;
pub mod market;
pub mod price_history;
pub mod search;
