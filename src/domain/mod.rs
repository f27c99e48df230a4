//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Normalized domain types handed to screens
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` / `aggregate.rs` — Normalization from wire to domain types
//! - `client.rs` — Fetch-and-normalize helpers plus a sub-client

pub mod price_history;
pub mod quote;
pub mod trading_pair;
