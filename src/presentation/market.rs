/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::application::services::types::{DepthReport, TickerRow, VolumeEntry};
use crate::error::AppError;
use crate::presentation::output::{OutputFormat, Tabular, fmt_num, fmt_opt, render};

/// Decimals of prices in tickers and rankings
const PRICE_DECIMALS: usize = 8;

/// Column titles of the order book view
pub const DEPTH_HEADERS: [&str; 4] = ["Ask", "Amount", "Bid", "Amount"];

/// Renders the order book with the decimals chosen for its quote asset
pub fn render_depth(report: &DepthReport, format: OutputFormat) -> Result<String, AppError> {
    let decimals = report.decimals;
    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            vec![
                fmt_opt(row.ask, decimals),
                fmt_opt(row.ask_amount, decimals),
                fmt_opt(row.bid, decimals),
                fmt_opt(row.bid_amount, decimals),
            ]
        })
        .collect();
    render(&DEPTH_HEADERS, &cells, &report.rows, format)
}

impl Tabular for TickerRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Symbol", "Last", "High", "Low", "Bid", "Ask", "Open", "Close", "VWAP", "Volume",
            "Percent",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            fmt_num(self.last, PRICE_DECIMALS),
            fmt_num(self.high, PRICE_DECIMALS),
            fmt_num(self.low, PRICE_DECIMALS),
            fmt_opt(self.bid, PRICE_DECIMALS),
            fmt_opt(self.ask, PRICE_DECIMALS),
            fmt_num(self.open, PRICE_DECIMALS),
            fmt_num(self.close, PRICE_DECIMALS),
            fmt_num(self.vwap, PRICE_DECIMALS),
            fmt_num(self.volume, 2),
            fmt_num(self.percent, 2),
        ]
    }
}

impl Tabular for VolumeEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Symbol", "Vol. 0", "Vol. 1", "Vol. 2", "Close"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            fmt_num(self.vol_0, 3),
            fmt_num(self.vol_1, 3),
            fmt_num(self.vol_2, 3),
            fmt_num(self.close, PRICE_DECIMALS),
        ]
    }
}
