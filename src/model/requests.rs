/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order direction
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy the base asset
    #[default]
    Buy,
    /// Sell the base asset
    Sell,
}

impl Side {
    /// Wire value expected by Binance
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

/// Time in force of a limit order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Good till cancelled
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
}

impl TimeInForce {
    /// Wire value expected by Binance
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GoodTillCancelled => "GTC",
            TimeInForce::ImmediateOrCancel => "IOC",
            TimeInForce::FillOrKill => "FOK",
        }
    }
}

/// Candle interval supported by `GET /api/v3/klines`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// One minute
    #[serde(rename = "1m")]
    OneMinute,
    /// Three minutes
    #[serde(rename = "3m")]
    ThreeMinutes,
    /// Five minutes
    #[serde(rename = "5m")]
    FiveMinutes,
    /// Fifteen minutes
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// Thirty minutes
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// One hour
    #[serde(rename = "1h")]
    OneHour,
    /// Two hours
    #[serde(rename = "2h")]
    TwoHours,
    /// Four hours
    #[serde(rename = "4h")]
    FourHours,
    /// Six hours
    #[serde(rename = "6h")]
    SixHours,
    /// Eight hours
    #[serde(rename = "8h")]
    EightHours,
    /// Twelve hours
    #[serde(rename = "12h")]
    TwelveHours,
    /// One day
    #[serde(rename = "1d")]
    OneDay,
    /// Three days
    #[serde(rename = "3d")]
    ThreeDays,
    /// One week
    #[serde(rename = "1w")]
    OneWeek,
    /// One calendar month
    #[serde(rename = "1M")]
    OneMonth,
}

impl Interval {
    const ALL: [(Interval, &'static str); 15] = [
        (Interval::OneMinute, "1m"),
        (Interval::ThreeMinutes, "3m"),
        (Interval::FiveMinutes, "5m"),
        (Interval::FifteenMinutes, "15m"),
        (Interval::ThirtyMinutes, "30m"),
        (Interval::OneHour, "1h"),
        (Interval::TwoHours, "2h"),
        (Interval::FourHours, "4h"),
        (Interval::SixHours, "6h"),
        (Interval::EightHours, "8h"),
        (Interval::TwelveHours, "12h"),
        (Interval::OneDay, "1d"),
        (Interval::ThreeDays, "3d"),
        (Interval::OneWeek, "1w"),
        (Interval::OneMonth, "1M"),
    ];

    /// Wire value expected by Binance
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(interval, _)| interval == self)
            .map(|(_, code)| *code)
            .unwrap_or("1m")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|(_, code)| *code == s)
            .map(|(interval, _)| *interval)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::ALL.iter().map(|(_, code)| *code).collect();
                AppError::InvalidInput(format!(
                    "invalid timeframe '{s}', accepted values: {}",
                    accepted.join(", ")
                ))
            })
    }
}

/// Order size as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AmountSpec {
    /// Explicit amount. Quote currency for buys, base currency for sells
    Fixed(f64),
    /// Percentage (0, 100] of the free balance
    Percent(f64),
    /// Whole free balance
    Max,
}

impl FromStr for AmountSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "max" {
            return Ok(AmountSpec::Max);
        }
        if let Some(pct) = s.strip_suffix('%') {
            let pct: f64 = pct
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("invalid percentage amount '{s}'")))?;
            if !(pct > 0.0 && pct <= 100.0) {
                return Err(AppError::InvalidInput(format!(
                    "percentage amount must be in (0, 100], got {pct}"
                )));
            }
            return Ok(AmountSpec::Percent(pct));
        }
        let amount: f64 = s.parse().map_err(|_| {
            AppError::InvalidInput(format!(
                "invalid amount '{s}', expected a number, \"max\" or \"<n>%\""
            ))
        })?;
        if !(amount.is_finite() && amount > 0.0) {
            return Err(AppError::InvalidInput(format!(
                "amount must be positive, got {amount}"
            )));
        }
        Ok(AmountSpec::Fixed(amount))
    }
}

/// Order price as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceSpec {
    /// Explicit limit price
    Fixed(f64),
    /// Best bid at submission time
    Bid,
    /// Best ask at submission time
    Ask,
}

impl FromStr for PriceSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "bid" => Ok(PriceSpec::Bid),
            "ask" => Ok(PriceSpec::Ask),
            _ => {
                let price: f64 = s.parse().map_err(|_| {
                    AppError::InvalidInput(format!(
                        "invalid price '{s}', expected a number, \"bid\" or \"ask\""
                    ))
                })?;
                if !(price.is_finite() && price > 0.0) {
                    return Err(AppError::InvalidInput(format!(
                        "price must be positive, got {price}"
                    )));
                }
                Ok(PriceSpec::Fixed(price))
            }
        }
    }
}

/// Limit order ready to be sent to `POST /api/v3/order`
///
/// Price and quantity are kept as strings already rounded to the symbol's
/// tick and step sizes.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLimitOrder {
    /// Binance symbol id, e.g. `BTCUSDT`
    pub symbol: String,
    /// Order direction
    pub side: Side,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Base asset quantity
    pub quantity: String,
    /// Limit price
    pub price: String,
    /// Client generated order id
    pub client_order_id: String,
}

impl NewLimitOrder {
    /// Query parameters for the order endpoint, without signature fields
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", "LIMIT".to_string()),
            ("timeInForce", self.time_in_force.as_str().to_string()),
            ("quantity", self.quantity.clone()),
            ("price", self.price.clone()),
            ("newClientOrderId", self.client_order_id.clone()),
            ("newOrderRespType", "RESULT".to_string()),
        ]
    }
}
