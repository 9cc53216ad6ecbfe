/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::model::responses::Order;
use crate::presentation::output::{Tabular, fmt_num};
use chrono::DateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Decimals of prices and amounts in order rows
const ORDER_DECIMALS: usize = 8;

/// Order as shown by `open`, `buy`, `sell` and `cancel`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderRow {
    /// Exchange order id
    pub id: u64,
    /// Creation time, `YYYY-MM-DD HH:MM:SS` UTC
    pub date: String,
    /// `limit`, `market`, ...
    #[serde(rename = "type")]
    pub order_type: String,
    /// `buy` or `sell`
    pub side: String,
    /// Limit price
    pub price: f64,
    /// Ordered base quantity
    pub amount: f64,
    /// Filled base quantity
    pub filled: f64,
    /// Base quantity still open
    pub remaining: f64,
    /// Quote value filled so far
    pub cost: f64,
    /// `open`, `closed`, `canceled`, ...
    pub status: String,
}

/// UTC date of a millisecond timestamp
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Lower-case status name, `NEW` and `PARTIALLY_FILLED` read as `open`
pub fn status_name(status: &str) -> String {
    match status {
        "NEW" | "PARTIALLY_FILLED" => "open".to_string(),
        "FILLED" => "closed".to_string(),
        "CANCELED" | "PENDING_CANCEL" => "canceled".to_string(),
        other => other.to_lowercase(),
    }
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            id: order.order_id,
            date: order.timestamp().map(format_timestamp).unwrap_or_default(),
            order_type: order.order_type.to_lowercase(),
            side: order.side.as_str().to_lowercase(),
            price: order.price,
            amount: order.orig_qty,
            filled: order.executed_qty,
            remaining: order.remaining(),
            cost: order
                .cumulative_quote_qty
                .unwrap_or(order.executed_qty * order.price),
            status: status_name(&order.status),
        }
    }
}

impl Tabular for OrderRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Id", "Date", "Type", "Side", "Price", "Amount", "Filled", "Remaining", "Cost",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.order_type.clone(),
            self.side.clone(),
            fmt_num(self.price, ORDER_DECIMALS),
            fmt_num(self.amount, ORDER_DECIMALS),
            fmt_num(self.filled, ORDER_DECIMALS),
            fmt_num(self.remaining, ORDER_DECIMALS),
            fmt_num(self.cost, ORDER_DECIMALS),
            self.status.clone(),
        ]
    }
}
