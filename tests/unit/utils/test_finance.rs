use clinance::model::responses::{Candle, UserTrade};
use clinance::utils::finance::{
    average_true_range, round_down_to_step, stop_loss_price, weighted_average_position,
};

fn candle(high: f64, low: f64, close: f64) -> Candle {
    Candle {
        open_time: 0,
        open: close,
        high,
        low,
        close,
        volume: 1.0,
        close_time: 0,
        quote_volume: close,
        trades: 1,
    }
}

fn fill(time: i64, is_buyer: bool, price: f64, qty: f64) -> UserTrade {
    UserTrade {
        symbol: "LTCBTC".to_string(),
        id: time as u64,
        order_id: time as u64,
        price,
        qty,
        quote_qty: price * qty,
        commission: 0.0,
        commission_asset: "BNB".to_string(),
        time,
        is_buyer,
        is_maker: true,
    }
}

#[test]
fn test_atr_on_flat_market_is_range() {
    let candles: Vec<Candle> = (0..20).map(|_| candle(11.0, 9.0, 10.0)).collect();
    assert_eq!(average_true_range(&candles, 14), Some(2.0));
}

#[test]
fn test_atr_gap_uses_previous_close() {
    // gap up: previous close 10, next candle 14-13
    let candles = vec![candle(11.0, 9.0, 10.0), candle(14.0, 13.0, 13.5)];
    assert_eq!(average_true_range(&candles, 1), Some(4.0));
}

#[test]
fn test_stop_loss_from_atr() {
    let candles: Vec<Candle> = (0..14).map(|_| candle(11.0, 9.0, 10.0)).collect();
    let atr = average_true_range(&candles, 14).unwrap();
    assert_eq!(stop_loss_price(10.0, atr, 1.5), 7.0);
}

#[test]
fn test_position_full_exit_and_reentry() {
    let trades = vec![
        fill(1, true, 0.010, 2.0),
        fill(2, true, 0.014, 2.0),
        fill(3, false, 0.020, 4.0),
        fill(4, true, 0.008, 1.0),
        fill(5, true, 0.010, 1.0),
    ];
    let pos = weighted_average_position(&trades, "LTC");
    assert!((pos.average_cost - 0.009).abs() < 1e-12);
    assert!((pos.quantity - 2.0).abs() < 1e-12);
}

#[test]
fn test_position_without_trades() {
    let pos = weighted_average_position(&[], "LTC");
    assert_eq!(pos.quantity, 0.0);
    assert_eq!(pos.average_cost, 0.0);
}

#[test]
fn test_round_down_never_rounds_up() {
    for (value, step) in [(0.12345678, 0.0001), (5.99999, 0.01), (123.456, 1.0), (0.00099, 0.001)] {
        let rounded = round_down_to_step(value, step);
        assert!(rounded <= value, "{rounded} > {value}");
        assert!(value - rounded < step);
    }
}
