/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! Arithmetic over already fetched market and account rows.

use crate::model::responses::{Candle, UserTrade};

/// Quantities below this are treated as an empty position
const QTY_EPSILON: f64 = 1e-12;

/// True range of every candle.
///
/// The first candle has no previous close and uses `high - low`.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let range = c.high - c.low;
            match i.checked_sub(1).map(|p| candles[p].close) {
                Some(prev_close) => range
                    .max((c.high - prev_close).abs())
                    .max((c.low - prev_close).abs()),
                None => range,
            }
        })
        .collect()
}

/// Average true range of the last `period` candles (simple mean of true ranges).
///
/// Returns `None` when `period` is zero or there are fewer than `period` candles.
pub fn average_true_range(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }
    let ranges = true_ranges(candles);
    let window = &ranges[ranges.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Stop-loss price `reference - factor * atr`
#[must_use]
pub fn stop_loss_price(reference: f64, atr: f64, factor: f64) -> f64 {
    reference - factor * atr
}

/// Held quantity and its volume weighted average cost
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Base asset currently held according to the trades
    pub quantity: f64,
    /// Average acquisition price of that quantity
    pub average_cost: f64,
}

/// Replays the account fills of one symbol, oldest first, into a position.
///
/// Buys blend into the average cost, net of any commission paid in the base
/// asset. Sells only reduce the held quantity. A position that drops to zero
/// resets the cost so a later re-entry starts a fresh average.
pub fn weighted_average_position(trades: &[UserTrade], base_asset: &str) -> Position {
    let mut ordered: Vec<&UserTrade> = trades.iter().collect();
    ordered.sort_by_key(|t| (t.time, t.id));

    ordered.into_iter().fold(Position::default(), |mut pos, trade| {
        let base_fee = if trade.commission_asset == base_asset {
            trade.commission
        } else {
            0.0
        };

        if trade.is_buyer {
            let acquired = (trade.qty - base_fee).max(0.0);
            let new_qty = pos.quantity + acquired;
            if new_qty > QTY_EPSILON {
                pos.average_cost =
                    (pos.average_cost * pos.quantity + trade.price * acquired) / new_qty;
            }
            pos.quantity = new_qty;
        } else {
            pos.quantity -= trade.qty + base_fee;
            if pos.quantity <= QTY_EPSILON {
                pos = Position::default();
            }
        }
        pos
    })
}

/// Unrealized profit of `quantity` bought at `cost` and valued at `last`
#[must_use]
pub fn unrealized_profit(last: f64, cost: f64, quantity: f64) -> f64 {
    (last - cost) * quantity
}

/// Profit in percent of the cost, zero when there is no cost basis
#[must_use]
pub fn profit_percent(last: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (last - cost) / cost * 100.0
    } else {
        0.0
    }
}

/// Number of decimals implied by an increment such as `0.00100000`
pub fn decimals_for_step(step: f64) -> usize {
    if step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let formatted = format!("{step:.10}");
    formatted
        .split('.')
        .nth(1)
        .map(|frac| frac.trim_end_matches('0').len())
        .unwrap_or(0)
}

/// Rounds `value` down to a multiple of `step`, never up.
///
/// A small tolerance keeps values that already sit on the grid (e.g. `0.3`
/// with step `0.1`) from falling one step because of float error.
pub fn round_down_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    let steps = (value / step + 1e-9).floor();
    let decimals = decimals_for_step(step) as i32;
    let factor = 10f64.powi(decimals);
    (steps * step * factor).round() / factor
}

/// Formats `value` with exactly the decimals of `step`
pub fn format_to_step(value: f64, step: f64) -> String {
    format!("{:.*}", decimals_for_step(step), value)
}
