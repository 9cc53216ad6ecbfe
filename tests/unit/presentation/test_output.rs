use assert_json_diff::assert_json_eq;
use clinance::presentation::account::render_balance;
use clinance::presentation::market::render_depth;
use clinance::presentation::order::{OrderRow, format_timestamp, status_name};
use clinance::presentation::output::{OutputFormat, render_rows, render_summaries};
use clinance::prelude::*;
use serde_json::{Value, json};

fn sample_order() -> Order {
    Order {
        symbol: "LTCBTC".to_string(),
        order_id: 11,
        client_order_id: "clinance-abc".to_string(),
        orig_client_order_id: None,
        price: 0.1,
        orig_qty: 2.0,
        executed_qty: 0.5,
        cumulative_quote_qty: None,
        status: "PARTIALLY_FILLED".to_string(),
        time_in_force: "GTC".to_string(),
        order_type: "LIMIT".to_string(),
        side: Side::Sell,
        time: None,
        transact_time: Some(1499827319559),
    }
}

#[test]
fn test_order_row_from_order() {
    let row = OrderRow::from(&sample_order());
    assert_eq!(row.id, 11);
    assert_eq!(row.date, "2017-07-12 02:41:59");
    assert_eq!(row.order_type, "limit");
    assert_eq!(row.side, "sell");
    assert_eq!(row.remaining, 1.5);
    assert_eq!(row.cost, 0.05);
    assert_eq!(row.status, "open");
}

#[test]
fn test_order_row_json() {
    let out = render_rows(&[OrderRow::from(&sample_order())], OutputFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_json_eq!(
        value,
        json!([{
            "id": 11,
            "date": "2017-07-12 02:41:59",
            "type": "limit",
            "side": "sell",
            "price": 0.1,
            "amount": 2.0,
            "filled": 0.5,
            "remaining": 1.5,
            "cost": 0.05,
            "status": "open"
        }])
    );
}

#[test]
fn test_status_names_and_dates() {
    assert_eq!(status_name("FILLED"), "closed");
    assert_eq!(status_name("EXPIRED"), "expired");
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
}

#[test]
fn test_cost_report_formats() {
    let report = CostReport {
        symbol: "ETH/BTC".to_string(),
        cost: 0.0123,
        quantity: 3.0,
    };
    assert_eq!(
        render_summaries(&[report.clone()], OutputFormat::Table).unwrap(),
        "[ETH/BTC] WAvg. Cost:   0.01230000"
    );
    assert_eq!(
        render_summaries(&[report.clone()], OutputFormat::Csv).unwrap(),
        "Symbol,WAvg. Cost,Amount\nETH/BTC,0.01230000,3.00000000"
    );
    let value: Value =
        serde_json::from_str(&render_summaries(&[report], OutputFormat::Json).unwrap()).unwrap();
    assert_json_eq!(
        value,
        json!([{"symbol": "ETH/BTC", "cost": 0.0123, "quantity": 3.0}])
    );
}

#[test]
fn test_profit_report_signs() {
    let report = ProfitReport {
        coin: "ETH".to_string(),
        quote: "BTC".to_string(),
        quantity: 2.0,
        cost: 0.05,
        last: 0.04,
        profit: -0.02,
        percent: -20.0,
    };
    let line = render_summaries(&[report.clone()], OutputFormat::Table).unwrap();
    assert!(line.starts_with("[ETH] Profit: -0.02000000"));
    let csv = render_summaries(&[report], OutputFormat::Csv).unwrap();
    assert!(csv.ends_with(",-0.02000000,-20.00"));
}

#[test]
fn test_plain_balance_json_has_no_btc_fields() {
    let report = BalanceReport {
        entries: vec![BalanceEntry {
            coin: "BTC".to_string(),
            free: 1.0,
            used: 0.5,
            total: 1.5,
            btc_value: None,
        }],
        total_btc: None,
    };
    let value: Value =
        serde_json::from_str(&render_balance(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_json_eq!(
        value,
        json!([{"coin": "BTC", "free": 1.0, "used": 0.5, "total": 1.5}])
    );
}

#[test]
fn test_detailed_balance_json_is_a_report() {
    let report = BalanceReport {
        entries: vec![BalanceEntry {
            coin: "ETH".to_string(),
            free: 2.0,
            used: 0.0,
            total: 2.0,
            btc_value: Some(0.1),
        }],
        total_btc: Some(0.1),
    };
    let value: Value =
        serde_json::from_str(&render_balance(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(value["total_btc"], 0.1);
    assert_eq!(value["entries"][0]["btc_value"], 0.1);
}

#[test]
fn test_depth_table_and_json() {
    let report = DepthReport {
        symbol: "BTC/USDT".to_string(),
        decimals: 3,
        rows: vec![DepthRow {
            ask: Some(50001.5),
            ask_amount: Some(0.25),
            bid: None,
            bid_amount: None,
        }],
    };
    let table = render_depth(&report, OutputFormat::Table).unwrap();
    assert!(table.contains("50001.500"));
    assert!(table.contains('-'));

    let value: Value =
        serde_json::from_str(&render_depth(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_json_eq!(
        value,
        json!([{"ask": 50001.5, "ask_amount": 0.25, "bid": null, "bid_amount": null}])
    );
}

#[test]
fn test_ticker_table_has_all_columns() {
    let row = TickerRow {
        symbol: "ETH/BTC".to_string(),
        last: 0.05,
        high: 0.055,
        low: 0.045,
        bid: None,
        ask: Some(0.0501),
        open: 0.049,
        close: 0.05,
        vwap: 0.0499,
        volume: 1234.567,
        percent: 2.04,
    };
    let csv = render_rows(&[row], OutputFormat::Csv).unwrap();
    assert_eq!(
        csv,
        "Symbol,Last,High,Low,Bid,Ask,Open,Close,VWAP,Volume,Percent\n\
         ETH/BTC,0.05000000,0.05500000,0.04500000,-,0.05010000,0.04900000,0.05000000,0.04990000,1234.57,2.04"
    );
}
