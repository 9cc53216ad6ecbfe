/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::market::MarketService;
use crate::application::services::types::{DepthReport, DepthRow, TickerRow, VolumeEntry};
use crate::constants::VALID_DEPTH_LIMITS;
use crate::error::AppError;
use crate::model::requests::Interval;
use crate::model::responses::{Candle, Ticker24h};
use crate::model::symbol::Symbol;
use std::collections::HashMap;
use tracing::{debug, info};

/// Candles inspected per symbol by the volume ranking
pub const VOLUME_CANDLES: usize = 3;

/// Parameters of the volume ranking
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeParams {
    /// Maximum number of symbols inspected
    pub limit: usize,
    /// Candle width
    pub timeframe: Interval,
    /// Quote asset of the market, e.g. `BTC`
    pub market: String,
    /// 24h quote volume a symbol must exceed
    pub min_vol: f64,
    /// Quote volume each of the last candles must exceed
    pub min_candle_vol: f64,
}

impl Default for VolumeParams {
    fn default() -> Self {
        Self {
            limit: 10,
            timeframe: Interval::OneMinute,
            market: "BTC".to_string(),
            min_vol: 0.0,
            min_candle_vol: 2.0,
        }
    }
}

/// Smallest depth limit Binance accepts that covers `rows`
pub fn depth_request_limit(rows: u32) -> u32 {
    VALID_DEPTH_LIMITS
        .iter()
        .copied()
        .find(|limit| *limit >= rows)
        .unwrap_or(VALID_DEPTH_LIMITS[VALID_DEPTH_LIMITS.len() - 1])
}

/// Order book of `symbol` with at most `rows` levels per side
pub async fn depth<C>(client: &C, symbol: &Symbol, rows: u32) -> Result<DepthReport, AppError>
where
    C: MarketService + ?Sized,
{
    if rows == 0 {
        return Err(AppError::InvalidInput("depth limit must be positive".to_string()));
    }
    let book = client.depth(symbol, depth_request_limit(rows)).await?;
    let shown = (rows as usize).min(book.asks.len().max(book.bids.len()));

    let rows = (0..shown)
        .map(|i| {
            let ask = book.asks.get(i);
            let bid = book.bids.get(i);
            DepthRow {
                ask: ask.map(|l| l.price),
                ask_amount: ask.map(|l| l.quantity),
                bid: bid.map(|l| l.price),
                bid_amount: bid.map(|l| l.quantity),
            }
        })
        .collect();

    Ok(DepthReport {
        symbol: symbol.to_string(),
        decimals: if symbol.is_usd_quoted() { 3 } else { 8 },
        rows,
    })
}

/// 24h summary of each symbol, in the order requested
pub async fn tickers<C>(client: &C, symbols: &[Symbol]) -> Result<Vec<TickerRow>, AppError>
where
    C: MarketService + ?Sized,
{
    let by_id: HashMap<String, Ticker24h> = client
        .tickers_24h(Some(symbols))
        .await?
        .into_iter()
        .map(|t| (t.symbol.clone(), t))
        .collect();

    symbols
        .iter()
        .map(|symbol| {
            by_id
                .get(&symbol.exchange_id())
                .map(|t| ticker_row(symbol, t))
                .ok_or_else(|| AppError::InvalidInput(format!("no ticker for {symbol}")))
        })
        .collect()
}

fn ticker_row(symbol: &Symbol, t: &Ticker24h) -> TickerRow {
    TickerRow {
        symbol: symbol.to_string(),
        last: t.last_price,
        high: t.high_price,
        low: t.low_price,
        bid: t.bid_price,
        ask: t.ask_price,
        open: t.open_price,
        close: t.last_price,
        vwap: t.weighted_avg_price,
        volume: t.quote_volume,
        percent: (t.price_change_percent * 100.0).round() / 100.0,
    }
}

/// Symbols of `market` with rising activity
///
/// Trading symbols quoted in the market whose 24h quote volume exceeds
/// `min_vol` are sorted by that volume and the first `limit` are inspected.
/// A symbol is kept when each of its last three candles moved more than
/// `min_candle_vol` in quote currency.
pub async fn volume_ranking<C>(client: &C, params: &VolumeParams) -> Result<Vec<VolumeEntry>, AppError>
where
    C: MarketService + ?Sized,
{
    let market = params.market.to_uppercase();
    let info = client.exchange_info().await?;
    let listed: HashMap<String, Symbol> = info
        .symbols
        .iter()
        .filter(|s| s.is_trading() && s.quote_asset == market)
        .map(|s| (s.symbol.clone(), Symbol::new(&s.base_asset, &s.quote_asset)))
        .collect();

    let candidates = rank_tickers(client.tickers_24h(None).await?, &listed, params);
    info!(
        "{} {} symbols above {} {} of 24h volume",
        candidates.len(),
        market,
        params.min_vol,
        market
    );

    let mut ranking = Vec::new();
    for (n, (symbol, ticker)) in candidates.iter().enumerate() {
        debug!("({}/{}) Loading {} ...", n + 1, candidates.len(), symbol);
        let candles = client
            .klines(symbol, params.timeframe, VOLUME_CANDLES as u32)
            .await?;
        if let Some(entry) = volume_entry(symbol, ticker, &candles, params.min_candle_vol) {
            ranking.push(entry);
        }
    }
    Ok(ranking)
}

/// Listed tickers above `min_vol`, by descending quote volume, truncated to `limit`
pub fn rank_tickers(
    tickers: Vec<Ticker24h>,
    listed: &HashMap<String, Symbol>,
    params: &VolumeParams,
) -> Vec<(Symbol, Ticker24h)> {
    let mut ranked: Vec<(Symbol, Ticker24h)> = tickers
        .into_iter()
        .filter(|t| t.quote_volume > params.min_vol)
        .filter_map(|t| listed.get(&t.symbol).map(|s| (s.clone(), t)))
        .collect();
    ranked.sort_by(|a, b| b.1.quote_volume.total_cmp(&a.1.quote_volume));
    ranked.truncate(params.limit);
    ranked
}

/// Ranking row of one symbol, `None` unless the last three candles are all active
pub fn volume_entry(
    symbol: &Symbol,
    ticker: &Ticker24h,
    candles: &[Candle],
    min_candle_vol: f64,
) -> Option<VolumeEntry> {
    if candles.len() < VOLUME_CANDLES {
        return None;
    }
    let last: Vec<&Candle> = candles.iter().rev().take(VOLUME_CANDLES).collect();
    if !last.iter().all(|c| c.close_quote_volume() > min_candle_vol) {
        return None;
    }
    Some(VolumeEntry {
        symbol: symbol.to_string(),
        quote_volume_24h: ticker.quote_volume,
        vol_0: last[0].close_quote_volume(),
        vol_1: last[1].close_quote_volume(),
        vol_2: last[2].close_quote_volume(),
        close: last[0].close,
    })
}
