/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! Binance spot client
//!
//! [`Client`] implements the market, account and order service traits over
//! [`HttpClient`]. Building it sends no request, so the public commands work
//! without credentials.
//!
//! # Example
//! ```ignore
//! use clinance::application::client::Client;
//! use clinance::application::config::Config;
//! use clinance::application::interfaces::market::MarketService;
//!
//! let client = Client::new(Config::new())?;
//! let book = client.depth(&"ETH/BTC".parse()?, 10).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::constants::MAX_USER_TRADES;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{Interval, NewLimitOrder};
use crate::model::responses::{
    AccountInfo, BookTicker, Candle, ExchangeInfo, Order, OrderBook, PublicTrade, ServerTime,
    SymbolInfo, Ticker24h, UserTrade,
};
use crate::model::symbol::Symbol;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Binance REST client implementing every service interface
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config)?),
        })
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// True when signed endpoints can be used
    pub fn is_authenticated(&self) -> bool {
        self.http_client.config().is_authenticated()
    }
}

#[async_trait]
impl MarketService for Client {
    async fn exchange_info(&self) -> Result<ExchangeInfo, AppError> {
        let info: ExchangeInfo = self
            .http_client
            .get_public("/api/v3/exchangeInfo", &[])
            .await?;
        debug!("Exchange info obtained: {} symbols", info.symbols.len());
        Ok(info)
    }

    async fn symbol_info(&self, symbol: &Symbol) -> Result<SymbolInfo, AppError> {
        let id = symbol.exchange_id();
        let info: ExchangeInfo = self
            .http_client
            .get_public("/api/v3/exchangeInfo", &[("symbol", id.clone())])
            .await?;
        info.find(&id)
            .cloned()
            .ok_or_else(|| AppError::InvalidInput(format!("unknown symbol {symbol}")))
    }

    async fn klines(
        &self,
        symbol: &Symbol,
        interval: Interval,
        limit: u32,
    ) -> Result<Vec<Candle>, AppError> {
        let params = [
            ("symbol", symbol.exchange_id()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        let candles: Vec<Candle> = self.http_client.get_public("/api/v3/klines", &params).await?;
        debug!("{} {} candles obtained for {}", candles.len(), interval, symbol);
        Ok(candles)
    }

    async fn depth(&self, symbol: &Symbol, limit: u32) -> Result<OrderBook, AppError> {
        let params = [("symbol", symbol.exchange_id()), ("limit", limit.to_string())];
        self.http_client.get_public("/api/v3/depth", &params).await
    }

    async fn tickers_24h(&self, symbols: Option<&[Symbol]>) -> Result<Vec<Ticker24h>, AppError> {
        match symbols {
            None => {
                info!("Getting 24h tickers of every symbol");
                self.http_client.get_public("/api/v3/ticker/24hr", &[]).await
            }
            Some([]) => Ok(Vec::new()),
            Some(symbols) => {
                let ids: Vec<String> = symbols.iter().map(Symbol::exchange_id).collect();
                let params = [("symbols", serde_json::to_string(&ids)?)];
                self.http_client
                    .get_public("/api/v3/ticker/24hr", &params)
                    .await
            }
        }
    }

    async fn book_ticker(&self, symbol: &Symbol) -> Result<BookTicker, AppError> {
        let params = [("symbol", symbol.exchange_id())];
        self.http_client
            .get_public("/api/v3/ticker/bookTicker", &params)
            .await
    }

    async fn recent_trades(
        &self,
        symbol: &Symbol,
        limit: u32,
    ) -> Result<Vec<PublicTrade>, AppError> {
        let params = [("symbol", symbol.exchange_id()), ("limit", limit.to_string())];
        self.http_client.get_public("/api/v3/trades", &params).await
    }

    async fn server_time(&self) -> Result<i64, AppError> {
        let time: ServerTime = self.http_client.get_public("/api/v3/time", &[]).await?;
        Ok(time.server_time)
    }
}

#[async_trait]
impl AccountService for Client {
    async fn account(&self) -> Result<AccountInfo, AppError> {
        let params = [("omitZeroBalances", "true".to_string())];
        self.http_client.get_signed("/api/v3/account", &params).await
    }

    async fn open_orders(&self, symbol: &Symbol) -> Result<Vec<Order>, AppError> {
        let params = [("symbol", symbol.exchange_id())];
        let orders: Vec<Order> = self
            .http_client
            .get_signed("/api/v3/openOrders", &params)
            .await?;
        debug!("{} open orders for {}", orders.len(), symbol);
        Ok(orders)
    }

    async fn my_trades(&self, symbol: &Symbol) -> Result<Vec<UserTrade>, AppError> {
        // Pages forward from the first fill; without `fromId` only the newest page comes back
        let mut trades: Vec<UserTrade> = Vec::new();
        let mut from_id: u64 = 0;
        loop {
            let params = [
                ("symbol", symbol.exchange_id()),
                ("fromId", from_id.to_string()),
                ("limit", MAX_USER_TRADES.to_string()),
            ];
            let page: Vec<UserTrade> = self
                .http_client
                .get_signed("/api/v3/myTrades", &params)
                .await?;
            let page_len = page.len();
            let next_id = page.iter().map(|t| t.id).max().map(|id| id + 1);
            trades.extend(page);
            match next_id {
                Some(next) if page_len >= MAX_USER_TRADES as usize && next > from_id => {
                    debug!("Fetching {} trades from id {}", symbol, next);
                    from_id = next;
                }
                _ => break,
            }
        }
        debug!("{} trades for {}", trades.len(), symbol);
        Ok(trades)
    }
}

#[async_trait]
impl OrderService for Client {
    async fn place_limit_order(&self, order: &NewLimitOrder) -> Result<Order, AppError> {
        info!(
            "Placing {} {} {} @ {}",
            order.side.as_str(),
            order.quantity,
            order.symbol,
            order.price
        );
        let params = order.to_params();
        let placed: Order = self.http_client.post_signed("/api/v3/order", &params).await?;
        info!("Order placed: {} ({})", placed.order_id, placed.status);
        Ok(placed)
    }

    async fn cancel_order(&self, symbol: &Symbol, order_id: u64) -> Result<Order, AppError> {
        info!("Cancelling order {} on {}", order_id, symbol);
        let params = [
            ("symbol", symbol.exchange_id()),
            ("orderId", order_id.to_string()),
        ];
        self.http_client.delete_signed("/api/v3/order", &params).await
    }
}
