/// Request signing and server clock offset
pub mod auth;
/// Binance client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces over the exchange endpoints
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Order resolution and analysis built on the interfaces
pub mod services;
