//! # clinance
//!
//! Binance cryptocurrency exchange client from the command line.
//!
//! The crate is split the same way the binary runs:
//!
//! - [`cli`] parses arguments and dispatches one subcommand
//! - [`application::services`] resolves orders and computes cost, profit,
//!   stop-loss and volume rankings
//! - [`application::interfaces`] describes the exchange endpoints used, and
//!   [`application::client::Client`] implements them over [`model::http::HttpClient`]
//! - [`presentation`] renders results as tables, CSV or JSON
//!
//! ## Configuration
//!
//! Credentials are read from `BINANCE_KEY` and `BINANCE_SECRET` (a `.env`
//! file is loaded first). Without them only the public commands work:
//! `depth`, `ticker`, `volume` and `stoploss --current`.
//!
//! ```ignore
//! use clinance::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let out = execute(&client, &Commands::Depth { symbol: "BTC/USDT".parse()?, limit: 5 },
//!     OutputFormat::Table).await?;
//! println!("{out}");
//! ```

/// Configuration, signing, client and services
pub mod application;
/// Command line definition and dispatch
pub mod cli;
/// Constants shared across the crate
pub mod constants;
/// Error type
pub mod error;
/// Request, response and retry models plus the HTTP transport
pub mod model;
/// Commonly used types
pub mod prelude;
/// Rendering of command results
pub mod presentation;
/// Logging, environment and arithmetic helpers
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
