/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! # clinance prelude
//!
//! Brings the client, the service interfaces, the report types and the
//! rendering helpers into scope with one import.
//!
//! ```rust
//! use clinance::prelude::*;
//!
//! let symbol: Symbol = "eth/btc".parse().unwrap();
//! assert_eq!(symbol.exchange_id(), "ETHBTC");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};
pub use crate::model::retry::RetryConfig;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::services::*;
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{AmountSpec, Interval, NewLimitOrder, PriceSpec, Side, TimeInForce};
pub use crate::model::responses::{
    AccountInfo, Balance, BookTicker, Candle, ExchangeInfo, Order, OrderBook, PriceLevel,
    PublicTrade, SymbolFilter, SymbolInfo, Ticker24h, UserTrade,
};
pub use crate::model::symbol::Symbol;

// ============================================================================
// CLI AND OUTPUT
// ============================================================================

pub use crate::cli::{Cli, Commands, execute, run};
pub use crate::presentation::order::OrderRow;
pub use crate::presentation::output::{OutputFormat, Summary, Tabular};
pub use crate::utils::logger::setup_logger;
