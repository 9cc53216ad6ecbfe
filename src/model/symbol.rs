/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/
use crate::constants::KNOWN_QUOTE_ASSETS;
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z0-9]{1,20})[/\-_: ]([A-Z0-9]{1,20})$").expect("valid pair regex")
});
static ASSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{1,20}$").expect("valid asset regex"));

/// A trading pair such as `BTC/USDT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Asset being bought or sold
    pub base: String,
    /// Asset prices are quoted in
    pub quote: String,
}

impl Symbol {
    /// Builds a symbol from its assets, upper-casing both
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            quote: quote.trim().to_uppercase(),
        }
    }

    /// Binance identifier, e.g. `BTCUSDT`
    #[must_use]
    pub fn exchange_id(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }

    /// True when the pair is quoted in a dollar stable coin
    #[must_use]
    pub fn is_usd_quoted(&self) -> bool {
        self.quote.contains("USD")
    }

    /// Splits a bare Binance id using the list of well known quote assets
    fn split_exchange_id(id: &str) -> Option<Self> {
        KNOWN_QUOTE_ASSETS.iter().find_map(|quote| {
            id.strip_suffix(quote)
                .filter(|base| !base.is_empty())
                .map(|base| Self::new(base, quote))
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Symbol {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        if let Some(caps) = PAIR_RE.captures(&normalized) {
            return Ok(Self::new(&caps[1], &caps[2]));
        }
        if ASSET_RE.is_match(&normalized) {
            if let Some(symbol) = Self::split_exchange_id(&normalized) {
                return Ok(symbol);
            }
        }
        Err(AppError::InvalidInput(format!(
            "invalid symbol '{s}', expected BASE/QUOTE (example: BTC/USDT)"
        )))
    }
}

/// Splits a comma separated list, upper-casing entries and dropping blanks and spaces
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.replace(' ', "").to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses a comma separated list of symbols
pub fn parse_symbol_list(input: &str) -> Result<Vec<Symbol>, AppError> {
    let symbols = split_list(input)
        .iter()
        .map(|s| s.parse::<Symbol>())
        .collect::<Result<Vec<_>, _>>()?;
    if symbols.is_empty() {
        return Err(AppError::InvalidInput("no symbols given".to_string()));
    }
    Ok(symbols)
}

/// Validates a single asset code such as `BTC`
pub fn parse_asset(input: &str) -> Result<String, AppError> {
    let asset = input.trim().replace(' ', "").to_uppercase();
    if asset == "NONE" || !ASSET_RE.is_match(&asset) {
        return Err(AppError::InvalidInput(format!("invalid coin {input}")));
    }
    Ok(asset)
}
