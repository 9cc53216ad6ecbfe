/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::Interval;
use crate::model::responses::{
    BookTicker, Candle, ExchangeInfo, OrderBook, PublicTrade, SymbolInfo, Ticker24h,
};
use crate::model::symbol::Symbol;
use async_trait::async_trait;

/// Interface for the public market data endpoints
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Trading rules of every listed symbol
    async fn exchange_info(&self) -> Result<ExchangeInfo, AppError>;

    /// Trading rules of one symbol
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If Binance does not list the symbol
    async fn symbol_info(&self, symbol: &Symbol) -> Result<SymbolInfo, AppError>;

    /// Most recent candles of `symbol`, oldest first
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `interval` - Candle width
    /// * `limit` - Number of candles, capped by Binance at 1000
    async fn klines(
        &self,
        symbol: &Symbol,
        interval: Interval,
        limit: u32,
    ) -> Result<Vec<Candle>, AppError>;

    /// Order book snapshot with `limit` levels per side
    async fn depth(&self, symbol: &Symbol, limit: u32) -> Result<OrderBook, AppError>;

    /// 24h statistics for the given symbols, or for every symbol when `None`
    async fn tickers_24h(&self, symbols: Option<&[Symbol]>) -> Result<Vec<Ticker24h>, AppError>;

    /// Best bid and ask
    async fn book_ticker(&self, symbol: &Symbol) -> Result<BookTicker, AppError>;

    /// Latest public trades, oldest first
    async fn recent_trades(&self, symbol: &Symbol, limit: u32)
    -> Result<Vec<PublicTrade>, AppError>;

    /// Server time in milliseconds since the epoch
    async fn server_time(&self) -> Result<i64, AppError>;
}
