/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! Command line surface of `clinance`
//!
//! [`Cli`] holds the parsed arguments, [`execute`] runs one subcommand
//! against any type implementing the service interfaces and returns the
//! rendered output.

use crate::application::client::Client;
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::application::services::{
    StopLossParams, VolumeParams, balances, depth, place_limit_order, profit, stop_loss, tickers,
    volume_ranking, weighted_average_cost,
};
use crate::error::AppError;
use crate::model::requests::{AmountSpec, Interval, PriceSpec, Side};
use crate::model::symbol::{Symbol, parse_asset, parse_symbol_list, split_list};
use crate::presentation::account::render_balance;
use crate::presentation::market::render_depth;
use crate::presentation::order::OrderRow;
use crate::presentation::output::{OutputFormat, render_rows, render_summaries};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};

/// Binance cryptocurrency exchange client from CLI
#[derive(Parser, Debug)]
#[command(name = "clinance")]
#[command(about, disable_version_flag = true, arg_required_else_help = true)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as CSV
    #[arg(long, global = true)]
    pub csv: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the version number and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output format selected by `--csv` / `--json`
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.csv, self.json)
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Place a limit buy order
    Buy {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
        /// Amount to spend in quote currency, "max" or "<n>%" of the free balance
        amount: AmountSpec,
        /// Buy price, "bid" or "ask"
        price: PriceSpec,
    },
    /// Place a limit sell order
    Sell {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
        /// Amount to sell in base currency, "max" or "<n>%" of the free balance
        amount: AmountSpec,
        /// Sell price, "bid" or "ask"
        price: PriceSpec,
    },
    /// Cancel an order by id
    Cancel {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
        /// Exchange order id
        order_id: u64,
    },
    /// Weighted average cost of a position
    Cost {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
    },
    /// Open orders of a symbol
    Open {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
    },
    /// Wallet balances
    Balance {
        /// Show only this coin (example: BTC)
        #[arg(long)]
        coin: Option<String>,
        /// Add the BTC value of every coin
        #[arg(long)]
        detailed: bool,
    },
    /// ATR based stop-loss price
    Stoploss {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
        /// ATR multiplier
        #[arg(long, default_value_t = 1.5)]
        factor: f64,
        /// ATR period
        #[arg(long, default_value_t = 14)]
        period: usize,
        /// Candle timeframe
        #[arg(long, default_value = "15m")]
        timeframe: Interval,
        /// Start from the last traded price instead of the last buy price
        #[arg(long)]
        current: bool,
    },
    /// Unrealized profit of one or more coins
    Profit {
        /// Comma separated coins (example: ETH,LTC)
        coins: String,
        /// Quote asset profit is measured in
        #[arg(long, default_value = "BTC")]
        quote: String,
    },
    /// Order book of a symbol
    Depth {
        /// Trade pair (example: BTC/USDT)
        symbol: Symbol,
        /// Rows per side
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Symbols of a market sorted by volume, keeping those with active recent candles
    Volume {
        /// Maximum number of symbols inspected
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Candle timeframe
        #[arg(long, default_value = "1m")]
        timeframe: Interval,
        /// Quote asset of the market
        #[arg(long, default_value = "BTC")]
        exchange: String,
        /// 24h quote volume cutoff
        #[arg(long, default_value_t = 0.0)]
        min_vol: f64,
        /// Quote volume each of the last three candles must exceed
        #[arg(long, default_value_t = 2.0)]
        min_candle_vol: f64,
    },
    /// 24h ticker of one or more symbols
    Ticker {
        /// Comma separated trade pairs (example: BTC/USDT,ETH/BTC)
        symbols: String,
    },
}

/// Runs `command` against `client` and renders the result
pub async fn execute<C>(client: &C, command: &Commands, format: OutputFormat) -> Result<String, AppError>
where
    C: MarketService + AccountService + OrderService + ?Sized,
{
    debug!("Executing {:?}", command);
    match command {
        Commands::Buy {
            symbol,
            amount,
            price,
        } => {
            let order = place_limit_order(client, symbol, Side::Buy, *amount, *price).await?;
            render_rows(&[OrderRow::from(&order)], format)
        }
        Commands::Sell {
            symbol,
            amount,
            price,
        } => {
            let order = place_limit_order(client, symbol, Side::Sell, *amount, *price).await?;
            render_rows(&[OrderRow::from(&order)], format)
        }
        Commands::Cancel { symbol, order_id } => {
            let order = client.cancel_order(symbol, *order_id).await?;
            info!("Order {} cancelled", order.order_id);
            render_rows(&[OrderRow::from(&order)], format)
        }
        Commands::Cost { symbol } => {
            let report = weighted_average_cost(client, symbol).await?;
            render_summaries(&[report], format)
        }
        Commands::Open { symbol } => {
            let rows: Vec<OrderRow> = client
                .open_orders(symbol)
                .await?
                .iter()
                .map(OrderRow::from)
                .collect();
            render_rows(&rows, format)
        }
        Commands::Balance { coin, detailed } => {
            let coin = coin.as_deref().map(parse_asset).transpose()?;
            let report = balances(client, coin.as_deref(), *detailed).await?;
            render_balance(&report, format)
        }
        Commands::Stoploss {
            symbol,
            factor,
            period,
            timeframe,
            current,
        } => {
            let params = StopLossParams {
                factor: *factor,
                period: *period,
                timeframe: *timeframe,
                current: *current,
            };
            let report = stop_loss(client, symbol, params).await?;
            render_summaries(&[report], format)
        }
        Commands::Profit { coins, quote } => {
            let quote = parse_asset(quote)?;
            let coins = split_list(coins)
                .iter()
                .map(|c| parse_asset(c))
                .collect::<Result<Vec<_>, _>>()?;
            if coins.is_empty() {
                return Err(AppError::InvalidInput("no coins given".to_string()));
            }
            let mut reports = Vec::with_capacity(coins.len());
            for coin in &coins {
                reports.push(profit(client, coin, &quote).await?);
            }
            render_summaries(&reports, format)
        }
        Commands::Depth { symbol, limit } => {
            let report = depth(client, symbol, *limit).await?;
            render_depth(&report, format)
        }
        Commands::Volume {
            limit,
            timeframe,
            exchange,
            min_vol,
            min_candle_vol,
        } => {
            let params = VolumeParams {
                limit: *limit,
                timeframe: *timeframe,
                market: parse_asset(exchange)?,
                min_vol: *min_vol,
                min_candle_vol: *min_candle_vol,
            };
            let ranking = volume_ranking(client, &params).await?;
            render_rows(&ranking, format)
        }
        Commands::Ticker { symbols } => {
            let symbols = parse_symbol_list(symbols)?;
            let rows = tickers(client, &symbols).await?;
            render_rows(&rows, format)
        }
    }
}

/// Builds a client from the environment and runs the parsed command line
pub async fn run(cli: &Cli) -> Result<String, AppError> {
    if cli.version {
        return Ok(crate::VERSION.to_string());
    }
    let Some(command) = &cli.command else {
        return Err(AppError::InvalidInput(
            "no command given, see --help".to_string(),
        ));
    };
    let config = Config::new();
    debug!("Configuration: {}", config.rest_api);
    let client = Client::new(config)?;
    execute(&client, command, cli.output_format()).await
}
