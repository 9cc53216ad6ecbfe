/// Balance, cost, profit and stop-loss views
pub mod account;
/// Depth, ticker and volume views
pub mod market;
/// Order rows
pub mod order;
/// Table, CSV and JSON rendering
pub mod output;
/// Serialization utilities for API responses
pub mod serialization;
