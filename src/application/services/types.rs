/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Weighted average cost of the held position of a symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CostReport {
    /// Pair in `BASE/QUOTE` notation
    pub symbol: String,
    /// Average acquisition price
    pub cost: f64,
    /// Base quantity the trades account for
    pub quantity: f64,
}

/// ATR based stop-loss of a symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopLossReport {
    /// Pair in `BASE/QUOTE` notation
    pub symbol: String,
    /// Last buy price, or last traded price
    pub reference: f64,
    /// Average true range used
    pub atr: f64,
    /// Multiplier applied to the ATR
    pub factor: f64,
    /// `reference - factor * atr`
    pub stop_loss: f64,
}

/// Unrealized profit of one coin against a quote asset
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfitReport {
    /// Coin held
    pub coin: String,
    /// Asset profit is measured in
    pub quote: String,
    /// Total balance of the coin
    pub quantity: f64,
    /// Weighted average cost
    pub cost: f64,
    /// Last traded price
    pub last: f64,
    /// `(last - cost) * quantity`
    pub profit: f64,
    /// Price change against the cost, in percent
    pub percent: f64,
}

/// Symbol kept by the volume ranking
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VolumeEntry {
    /// Pair in `BASE/QUOTE` notation
    pub symbol: String,
    /// 24h quote volume used for ordering
    pub quote_volume_24h: f64,
    /// Quote volume of the latest candle
    pub vol_0: f64,
    /// Quote volume of the candle before
    pub vol_1: f64,
    /// Quote volume two candles back
    pub vol_2: f64,
    /// Close of the latest candle
    pub close: f64,
}

/// One asset of the wallet
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BalanceEntry {
    /// Asset code
    pub coin: String,
    /// Available amount
    pub free: f64,
    /// Amount locked in orders
    pub used: f64,
    /// Free plus used
    pub total: f64,
    /// Value of the total in BTC, detailed view only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btc_value: Option<f64>,
}

/// Wallet view
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BalanceReport {
    /// Non-zero balances sorted by coin
    pub entries: Vec<BalanceEntry>,
    /// Sum of the BTC values, detailed view only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_btc: Option<f64>,
}

/// One line of the order book view, a side may run out before the other
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DepthRow {
    /// Ask price
    pub ask: Option<f64>,
    /// Ask quantity
    pub ask_amount: Option<f64>,
    /// Bid price
    pub bid: Option<f64>,
    /// Bid quantity
    pub bid_amount: Option<f64>,
}

/// Order book view of a symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DepthReport {
    /// Pair in `BASE/QUOTE` notation
    pub symbol: String,
    /// Decimals used to print prices and amounts
    pub decimals: usize,
    /// Best levels first
    pub rows: Vec<DepthRow>,
}

/// 24h summary of one symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TickerRow {
    /// Pair in `BASE/QUOTE` notation
    pub symbol: String,
    /// Last traded price
    pub last: f64,
    /// 24h high
    pub high: f64,
    /// 24h low
    pub low: f64,
    /// Best bid
    pub bid: Option<f64>,
    /// Best ask
    pub ask: Option<f64>,
    /// Window open price
    pub open: f64,
    /// Window close price, the last price
    pub close: f64,
    /// Volume weighted average price
    pub vwap: f64,
    /// 24h quote volume
    pub volume: f64,
    /// 24h change in percent
    pub percent: f64,
}
