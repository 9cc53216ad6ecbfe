/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/
use crate::model::requests::Side;
use crate::presentation::serialization::{parse_decimal, string_as_float, string_as_float_opt};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Error body returned by Binance on failed requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Negative error code, e.g. -1121
    pub code: i64,
    /// Human readable message
    pub msg: String,
}

/// Answer of `GET /api/v3/time`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServerTime {
    /// Server time in milliseconds since the epoch
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Answer of `GET /api/v3/exchangeInfo`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct ExchangeInfo {
    /// Every listed symbol
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInfo {
    /// Looks up a symbol by its Binance id
    #[must_use]
    pub fn find(&self, exchange_id: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|s| s.symbol == exchange_id)
    }
}

/// Trading rules of one symbol
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolInfo {
    /// Binance id, e.g. `ETHBTC`
    pub symbol: String,
    /// `TRADING`, `BREAK`, ...
    pub status: String,
    /// Base asset, e.g. `ETH`
    #[serde(rename = "baseAsset")]
    pub base_asset: String,
    /// Quote asset, e.g. `BTC`
    #[serde(rename = "quoteAsset")]
    pub quote_asset: String,
    /// Price, quantity and notional filters
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

impl SymbolInfo {
    /// True when the symbol accepts orders
    #[must_use]
    pub fn is_trading(&self) -> bool {
        self.status == "TRADING"
    }

    /// Price increment from PRICE_FILTER
    #[must_use]
    pub fn tick_size(&self) -> Option<f64> {
        self.filters.iter().find_map(|f| match f {
            SymbolFilter::Price { tick_size } if *tick_size > 0.0 => Some(*tick_size),
            _ => None,
        })
    }

    /// Quantity increment and minimum from LOT_SIZE
    #[must_use]
    pub fn lot_size(&self) -> Option<(f64, f64)> {
        self.filters.iter().find_map(|f| match f {
            SymbolFilter::LotSize { step_size, min_qty } if *step_size > 0.0 => {
                Some((*step_size, *min_qty))
            }
            _ => None,
        })
    }

    /// Minimum order value in quote currency from NOTIONAL or MIN_NOTIONAL
    #[must_use]
    pub fn min_notional(&self) -> Option<f64> {
        self.filters.iter().find_map(|f| match f {
            SymbolFilter::Notional { min_notional } | SymbolFilter::MinNotional { min_notional } => {
                *min_notional
            }
            _ => None,
        })
    }
}

/// Symbol filter, only the kinds used for order validation are decoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "filterType")]
pub enum SymbolFilter {
    /// Price increment
    #[serde(rename = "PRICE_FILTER")]
    Price {
        /// Price increment
        #[serde(rename = "tickSize", deserialize_with = "string_as_float")]
        tick_size: f64,
    },
    /// Quantity increment
    #[serde(rename = "LOT_SIZE")]
    LotSize {
        /// Quantity increment
        #[serde(rename = "stepSize", deserialize_with = "string_as_float")]
        step_size: f64,
        /// Smallest quantity accepted
        #[serde(rename = "minQty", deserialize_with = "string_as_float")]
        min_qty: f64,
    },
    /// Current notional filter
    #[serde(rename = "NOTIONAL")]
    Notional {
        /// Smallest order value
        #[serde(rename = "minNotional", default, deserialize_with = "string_as_float_opt")]
        min_notional: Option<f64>,
    },
    /// Legacy notional filter
    #[serde(rename = "MIN_NOTIONAL")]
    MinNotional {
        /// Smallest order value
        #[serde(rename = "minNotional", default, deserialize_with = "string_as_float_opt")]
        min_notional: Option<f64>,
    },
    /// Any other filter
    #[serde(other)]
    Other,
}

/// Raw kline row as sent by Binance
#[derive(Debug, Deserialize)]
struct KlineRow(
    i64,
    String,
    String,
    String,
    String,
    String,
    i64,
    String,
    u64,
    serde_json::Value,
    serde_json::Value,
    serde_json::Value,
);

/// OHLCV candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KlineRow")]
pub struct Candle {
    /// Open time in milliseconds
    pub open_time: i64,
    /// Open price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Base asset volume
    pub volume: f64,
    /// Close time in milliseconds
    pub close_time: i64,
    /// Quote asset volume
    pub quote_volume: f64,
    /// Number of trades
    pub trades: u64,
}

impl Candle {
    /// Quote volume approximated as close × base volume
    #[must_use]
    pub fn close_quote_volume(&self) -> f64 {
        self.close * self.volume
    }
}

impl TryFrom<KlineRow> for Candle {
    type Error = String;

    fn try_from(row: KlineRow) -> Result<Self, Self::Error> {
        Ok(Candle {
            open_time: row.0,
            open: parse_decimal("open", &row.1)?,
            high: parse_decimal("high", &row.2)?,
            low: parse_decimal("low", &row.3)?,
            close: parse_decimal("close", &row.4)?,
            volume: parse_decimal("volume", &row.5)?,
            close_time: row.6,
            quote_volume: parse_decimal("quote volume", &row.7)?,
            trades: row.8,
        })
    }
}

/// One price level of the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(f64, f64)")]
pub struct PriceLevel {
    /// Level price
    pub price: f64,
    /// Resting quantity
    pub quantity: f64,
}

impl TryFrom<(String, String)> for PriceLevel {
    type Error = String;

    fn try_from((price, quantity): (String, String)) -> Result<Self, Self::Error> {
        Ok(PriceLevel {
            price: parse_decimal("price", &price)?,
            quantity: parse_decimal("quantity", &quantity)?,
        })
    }
}

impl From<PriceLevel> for (f64, f64) {
    fn from(level: PriceLevel) -> Self {
        (level.price, level.quantity)
    }
}

/// Answer of `GET /api/v3/depth`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct OrderBook {
    /// Book sequence number
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: u64,
    /// Bids, best first
    pub bids: Vec<PriceLevel>,
    /// Asks, best first
    pub asks: Vec<PriceLevel>,
}

/// Rolling 24h statistics from `GET /api/v3/ticker/24hr`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Ticker24h {
    /// Binance id
    pub symbol: String,
    /// Absolute price change
    #[serde(rename = "priceChange", deserialize_with = "string_as_float")]
    pub price_change: f64,
    /// Price change in percent
    #[serde(rename = "priceChangePercent", deserialize_with = "string_as_float")]
    pub price_change_percent: f64,
    /// Volume weighted average price
    #[serde(rename = "weightedAvgPrice", deserialize_with = "string_as_float")]
    pub weighted_avg_price: f64,
    /// Close of the previous window
    #[serde(rename = "prevClosePrice", default, deserialize_with = "string_as_float_opt")]
    pub prev_close_price: Option<f64>,
    /// Last traded price
    #[serde(rename = "lastPrice", deserialize_with = "string_as_float")]
    pub last_price: f64,
    /// Best bid
    #[serde(rename = "bidPrice", default, deserialize_with = "string_as_float_opt")]
    pub bid_price: Option<f64>,
    /// Best bid quantity
    #[serde(rename = "bidQty", default, deserialize_with = "string_as_float_opt")]
    pub bid_qty: Option<f64>,
    /// Best ask
    #[serde(rename = "askPrice", default, deserialize_with = "string_as_float_opt")]
    pub ask_price: Option<f64>,
    /// Best ask quantity
    #[serde(rename = "askQty", default, deserialize_with = "string_as_float_opt")]
    pub ask_qty: Option<f64>,
    /// Window open price
    #[serde(rename = "openPrice", deserialize_with = "string_as_float")]
    pub open_price: f64,
    /// Window high
    #[serde(rename = "highPrice", deserialize_with = "string_as_float")]
    pub high_price: f64,
    /// Window low
    #[serde(rename = "lowPrice", deserialize_with = "string_as_float")]
    pub low_price: f64,
    /// Base asset volume
    #[serde(deserialize_with = "string_as_float")]
    pub volume: f64,
    /// Quote asset volume
    #[serde(rename = "quoteVolume", deserialize_with = "string_as_float")]
    pub quote_volume: f64,
    /// Window open time
    #[serde(rename = "openTime", default)]
    pub open_time: i64,
    /// Window close time
    #[serde(rename = "closeTime", default)]
    pub close_time: i64,
}

/// Best bid and ask from `GET /api/v3/ticker/bookTicker`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookTicker {
    /// Binance id
    pub symbol: String,
    /// Best bid
    #[serde(rename = "bidPrice", deserialize_with = "string_as_float")]
    pub bid_price: f64,
    /// Best bid quantity
    #[serde(rename = "bidQty", deserialize_with = "string_as_float")]
    pub bid_qty: f64,
    /// Best ask
    #[serde(rename = "askPrice", deserialize_with = "string_as_float")]
    pub ask_price: f64,
    /// Best ask quantity
    #[serde(rename = "askQty", deserialize_with = "string_as_float")]
    pub ask_qty: f64,
}

/// Public trade from `GET /api/v3/trades`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicTrade {
    /// Trade id
    pub id: u64,
    /// Execution price
    #[serde(deserialize_with = "string_as_float")]
    pub price: f64,
    /// Executed base quantity
    #[serde(deserialize_with = "string_as_float")]
    pub qty: f64,
    /// Execution time in milliseconds
    pub time: i64,
    /// True when the buyer was the resting order
    #[serde(rename = "isBuyerMaker")]
    pub is_buyer_maker: bool,
}

/// One asset of the account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    /// Asset code
    pub asset: String,
    /// Available amount
    #[serde(deserialize_with = "string_as_float")]
    pub free: f64,
    /// Amount locked in open orders
    #[serde(deserialize_with = "string_as_float")]
    pub locked: f64,
}

impl Balance {
    /// Free plus locked
    #[must_use]
    pub fn total(&self) -> f64 {
        self.free + self.locked
    }
}

/// Answer of `GET /api/v3/account`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct AccountInfo {
    /// Whether the key may trade
    #[serde(rename = "canTrade", default)]
    pub can_trade: bool,
    /// Every asset of the account, zero balances included
    pub balances: Vec<Balance>,
}

impl AccountInfo {
    /// Balance of one asset, zero when the account never held it
    #[must_use]
    pub fn balance_of(&self, asset: &str) -> Balance {
        self.balances
            .iter()
            .find(|b| b.asset == asset)
            .cloned()
            .unwrap_or(Balance {
                asset: asset.to_string(),
                free: 0.0,
                locked: 0.0,
            })
    }
}

/// Order as returned by the order, cancel and open orders endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Binance id
    pub symbol: String,
    /// Exchange order id
    #[serde(rename = "orderId")]
    pub order_id: u64,
    /// Client order id
    #[serde(rename = "clientOrderId", default)]
    pub client_order_id: String,
    /// Client id of the order a cancel request refers to
    #[serde(rename = "origClientOrderId", default, skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// Limit price
    #[serde(deserialize_with = "string_as_float")]
    pub price: f64,
    /// Ordered base quantity
    #[serde(rename = "origQty", deserialize_with = "string_as_float")]
    pub orig_qty: f64,
    /// Filled base quantity
    #[serde(rename = "executedQty", deserialize_with = "string_as_float")]
    pub executed_qty: f64,
    /// Quote value filled so far
    #[serde(rename = "cummulativeQuoteQty", default, deserialize_with = "string_as_float_opt")]
    pub cumulative_quote_qty: Option<f64>,
    /// `NEW`, `PARTIALLY_FILLED`, `FILLED`, `CANCELED`, ...
    pub status: String,
    /// Time in force
    #[serde(rename = "timeInForce", default)]
    pub time_in_force: String,
    /// `LIMIT`, `MARKET`, ...
    #[serde(rename = "type")]
    pub order_type: String,
    /// Order side
    pub side: Side,
    /// Creation time (open orders)
    #[serde(default)]
    pub time: Option<i64>,
    /// Submission time (new and cancelled orders)
    #[serde(rename = "transactTime", default)]
    pub transact_time: Option<i64>,
}

impl Order {
    /// Base quantity still open
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.orig_qty - self.executed_qty).max(0.0)
    }

    /// Best known timestamp of the order
    #[must_use]
    pub fn timestamp(&self) -> Option<i64> {
        self.time.or(self.transact_time)
    }
}

/// Fill of the account from `GET /api/v3/myTrades`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTrade {
    /// Binance id
    pub symbol: String,
    /// Trade id
    pub id: u64,
    /// Order that produced the fill
    #[serde(rename = "orderId")]
    pub order_id: u64,
    /// Execution price
    #[serde(deserialize_with = "string_as_float")]
    pub price: f64,
    /// Executed base quantity
    #[serde(deserialize_with = "string_as_float")]
    pub qty: f64,
    /// Executed quote quantity
    #[serde(rename = "quoteQty", deserialize_with = "string_as_float")]
    pub quote_qty: f64,
    /// Fee paid
    #[serde(deserialize_with = "string_as_float")]
    pub commission: f64,
    /// Asset the fee was paid in
    #[serde(rename = "commissionAsset")]
    pub commission_asset: String,
    /// Execution time in milliseconds
    pub time: i64,
    /// True for buys
    #[serde(rename = "isBuyer")]
    pub is_buyer: bool,
    /// True when the account's order was resting
    #[serde(rename = "isMaker")]
    pub is_maker: bool,
}
