/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::services::types::{
    BalanceEntry, BalanceReport, CostReport, ProfitReport, StopLossReport,
};
use crate::constants::{
    DEFAULT_KLINES_LIMIT, MAX_KLINES_LIMIT, RECENT_TRADES_LIMIT, VALUATION_ASSET,
};
use crate::error::AppError;
use crate::model::requests::Interval;
use crate::model::responses::Ticker24h;
use crate::model::symbol::Symbol;
use crate::utils::finance::{
    average_true_range, profit_percent, stop_loss_price, unrealized_profit,
    weighted_average_position,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parameters of the ATR stop-loss
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopLossParams {
    /// Multiplier applied to the ATR
    pub factor: f64,
    /// Number of true ranges averaged
    pub period: usize,
    /// Candle width
    pub timeframe: Interval,
    /// Use the last traded price instead of the last buy price
    pub current: bool,
}

impl Default for StopLossParams {
    fn default() -> Self {
        Self {
            factor: 1.5,
            period: 14,
            timeframe: Interval::FifteenMinutes,
            current: false,
        }
    }
}

/// Weighted average cost of the position in `symbol`
pub async fn weighted_average_cost<C>(client: &C, symbol: &Symbol) -> Result<CostReport, AppError>
where
    C: AccountService + ?Sized,
{
    let trades = client.my_trades(symbol).await?;
    let position = weighted_average_position(&trades, &symbol.base);
    debug!(
        "{}: {} trades, position {} @ {}",
        symbol,
        trades.len(),
        position.quantity,
        position.average_cost
    );
    Ok(CostReport {
        symbol: symbol.to_string(),
        cost: position.average_cost,
        quantity: position.quantity,
    })
}

/// Unrealized profit of the whole `coin` balance valued in `quote`
pub async fn profit<C>(client: &C, coin: &str, quote: &str) -> Result<ProfitReport, AppError>
where
    C: MarketService + AccountService + ?Sized,
{
    let symbol = Symbol::new(coin, quote);
    let cost = weighted_average_cost(client, &symbol).await?;
    let quantity = client.account().await?.balance_of(&symbol.base).total();
    let last = last_price(client, &symbol).await?;

    Ok(ProfitReport {
        coin: symbol.base.clone(),
        quote: symbol.quote.clone(),
        quantity,
        cost: cost.cost,
        last,
        profit: unrealized_profit(last, cost.cost, quantity),
        percent: profit_percent(last, cost.cost),
    })
}

/// ATR based stop-loss for `symbol`
///
/// The reference price is the last buy of the account, or the last public
/// trade when `params.current` is set.
pub async fn stop_loss<C>(
    client: &C,
    symbol: &Symbol,
    params: StopLossParams,
) -> Result<StopLossReport, AppError>
where
    C: MarketService + AccountService + ?Sized,
{
    if params.period == 0 {
        return Err(AppError::InvalidInput("ATR period must be positive".to_string()));
    }

    if params.period >= MAX_KLINES_LIMIT as usize {
        return Err(AppError::InvalidInput(format!(
            "ATR period must be below {MAX_KLINES_LIMIT}, got {}",
            params.period
        )));
    }

    let limit = (DEFAULT_KLINES_LIMIT as usize)
        .max(params.period.saturating_add(1))
        .min(MAX_KLINES_LIMIT as usize) as u32;
    let candles = client.klines(symbol, params.timeframe, limit).await?;
    let atr = average_true_range(&candles, params.period).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "not enough {} candles for {}: got {}, need {}",
            params.timeframe,
            symbol,
            candles.len(),
            params.period
        ))
    })?;

    let reference = if params.current {
        client
            .recent_trades(symbol, RECENT_TRADES_LIMIT)
            .await?
            .iter()
            .max_by_key(|t| (t.time, t.id))
            .map(|t| t.price)
            .ok_or_else(|| AppError::InvalidInput(format!("no recent trades for {symbol}")))?
    } else {
        client
            .my_trades(symbol)
            .await?
            .iter()
            .filter(|t| t.is_buyer)
            .max_by_key(|t| (t.time, t.id))
            .map(|t| t.price)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "no buy trades found for {symbol}, use --current to start from the last price"
                ))
            })?
    };

    Ok(StopLossReport {
        symbol: symbol.to_string(),
        reference,
        atr,
        factor: params.factor,
        stop_loss: stop_loss_price(reference, atr, params.factor),
    })
}

/// Non-zero balances, optionally filtered to one coin and valued in BTC
pub async fn balances<C>(
    client: &C,
    coin: Option<&str>,
    detailed: bool,
) -> Result<BalanceReport, AppError>
where
    C: MarketService + AccountService + ?Sized,
{
    let account = client.account().await?;
    let mut entries: Vec<BalanceEntry> = account
        .balances
        .iter()
        .filter(|b| b.total() > 0.0)
        .filter(|b| coin.is_none_or(|c| b.asset.eq_ignore_ascii_case(c)))
        .map(|b| BalanceEntry {
            coin: b.asset.clone(),
            free: b.free,
            used: b.locked,
            total: b.total(),
            btc_value: None,
        })
        .collect();
    entries.sort_by(|a, b| a.coin.cmp(&b.coin));

    if !detailed {
        return Ok(BalanceReport {
            entries,
            total_btc: None,
        });
    }

    let prices: HashMap<String, f64> = client
        .tickers_24h(None)
        .await?
        .into_iter()
        .map(|t: Ticker24h| (t.symbol, t.last_price))
        .collect();

    let mut total_btc = 0.0;
    for entry in &mut entries {
        let value = entry.total * btc_price(&prices, &entry.coin);
        total_btc += value;
        entry.btc_value = Some(value);
    }

    Ok(BalanceReport {
        entries,
        total_btc: Some(total_btc),
    })
}

/// Price of one unit of `coin` in BTC, zero when no market links them
pub fn btc_price(prices: &HashMap<String, f64>, coin: &str) -> f64 {
    if coin == VALUATION_ASSET {
        return 1.0;
    }
    if let Some(price) = prices.get(&format!("{coin}{VALUATION_ASSET}")) {
        return *price;
    }
    match prices.get(&format!("{VALUATION_ASSET}{coin}")) {
        Some(price) if *price > 0.0 => 1.0 / price,
        _ => {
            warn!("No BTC market for {}, valued at zero", coin);
            0.0
        }
    }
}

async fn last_price<C>(client: &C, symbol: &Symbol) -> Result<f64, AppError>
where
    C: MarketService + ?Sized,
{
    let tickers = client.tickers_24h(Some(std::slice::from_ref(symbol))).await?;
    tickers
        .iter()
        .find(|t| t.symbol == symbol.exchange_id())
        .map(|t| t.last_price)
        .ok_or_else(|| AppError::InvalidInput(format!("no ticker for {symbol}")))
}
