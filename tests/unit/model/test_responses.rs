use clinance::prelude::*;

#[test]
fn test_ticker_24h_decoding() {
    let json = r#"{
        "symbol": "BNBBTC", "priceChange": "-94.99999800", "priceChangePercent": "-95.960",
        "weightedAvgPrice": "0.29628482", "prevClosePrice": "0.10002000", "lastPrice": "4.00000200",
        "lastQty": "200.00000000", "bidPrice": "4.00000000", "bidQty": "100.00000000",
        "askPrice": "4.00000200", "askQty": "100.00000000", "openPrice": "99.00000000",
        "highPrice": "100.00000000", "lowPrice": "0.10000000", "volume": "8913.30000000",
        "quoteVolume": "15.30000000", "openTime": 1499783499040, "closeTime": 1499869899040,
        "firstId": 28385, "lastId": 28460, "count": 76
    }"#;
    let ticker: Ticker24h = serde_json::from_str(json).unwrap();
    assert_eq!(ticker.symbol, "BNBBTC");
    assert_eq!(ticker.price_change_percent, -95.96);
    assert_eq!(ticker.last_price, 4.000002);
    assert_eq!(ticker.bid_price, Some(4.0));
    assert_eq!(ticker.quote_volume, 15.3);
    assert_eq!(ticker.close_time, 1499869899040);
}

#[test]
fn test_ticker_without_book_fields() {
    let json = r#"{
        "symbol": "ETHBTC", "priceChange": "0", "priceChangePercent": "0",
        "weightedAvgPrice": "0.05", "lastPrice": "0.05", "openPrice": "0.05",
        "highPrice": "0.05", "lowPrice": "0.05", "volume": "0", "quoteVolume": "0"
    }"#;
    let ticker: Ticker24h = serde_json::from_str(json).unwrap();
    assert_eq!(ticker.bid_price, None);
    assert_eq!(ticker.prev_close_price, None);
}

#[test]
fn test_bad_decimal_is_an_error() {
    let json = r#"{"asset": "BTC", "free": "abc", "locked": "0"}"#;
    assert!(serde_json::from_str::<Balance>(json).is_err());
}

#[test]
fn test_account_balances() {
    let json = r#"{
        "makerCommission": 15, "canTrade": true, "canWithdraw": true,
        "balances": [
            {"asset": "BTC", "free": "0.75000000", "locked": "0.00000000"},
            {"asset": "LTC", "free": "2.50000000", "locked": "1.00000000"}
        ],
        "permissions": ["SPOT"]
    }"#;
    let account: AccountInfo = serde_json::from_str(json).unwrap();
    assert!(account.can_trade);
    assert_eq!(account.balance_of("LTC").total(), 3.5);
    assert_eq!(account.balance_of("XRP").total(), 0.0);
}

#[test]
fn test_user_trade_decoding() {
    let json = r#"[{
        "symbol": "BNBBTC", "id": 28457, "orderId": 100234, "orderListId": -1,
        "price": "4.00000100", "qty": "12.00000000", "quoteQty": "48.000012",
        "commission": "10.10000000", "commissionAsset": "BNB", "time": 1499865549590,
        "isBuyer": true, "isMaker": false, "isBestMatch": true
    }]"#;
    let trades: Vec<UserTrade> = serde_json::from_str(json).unwrap();
    assert_eq!(trades.len(), 1);
    assert!(trades[0].is_buyer);
    assert_eq!(trades[0].commission, 10.1);
    assert_eq!(trades[0].commission_asset, "BNB");
}

#[test]
fn test_public_trades_and_book_ticker() {
    let trades: Vec<PublicTrade> = serde_json::from_str(
        r#"[{"id":28457,"price":"4.00000100","qty":"12.00000000","quoteQty":"48.000012",
             "time":1499865549590,"isBuyerMaker":true,"isBestMatch":true}]"#,
    )
    .unwrap();
    assert_eq!(trades[0].price, 4.000001);

    let book: BookTicker = serde_json::from_str(
        r#"{"symbol":"LTCBTC","bidPrice":"4.00000000","bidQty":"431.00000000",
            "askPrice":"4.00000200","askQty":"9.00000000"}"#,
    )
    .unwrap();
    assert_eq!(book.bid_price, 4.0);
    assert_eq!(book.ask_qty, 9.0);
}

#[test]
fn test_exchange_info_find() {
    let json = r#"{"timezone":"UTC","serverTime":1565246363776,"symbols":[
        {"symbol":"ETHBTC","status":"TRADING","baseAsset":"ETH","quoteAsset":"BTC","filters":[]},
        {"symbol":"LTCBTC","status":"BREAK","baseAsset":"LTC","quoteAsset":"BTC"}
    ]}"#;
    let info: ExchangeInfo = serde_json::from_str(json).unwrap();
    assert!(info.find("ETHBTC").unwrap().is_trading());
    assert!(!info.find("LTCBTC").unwrap().is_trading());
    assert!(info.find("XRPBTC").is_none());
    assert_eq!(info.find("ETHBTC").unwrap().tick_size(), None);
}

#[test]
fn test_legacy_min_notional_filter() {
    let json = r#"{"symbol":"ETHBTC","status":"TRADING","baseAsset":"ETH","quoteAsset":"BTC",
        "filters":[{"filterType":"MIN_NOTIONAL","minNotional":"0.00100000","applyToMarket":true}]}"#;
    let info: SymbolInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.min_notional(), Some(0.001));
    assert_eq!(info.lot_size(), None);
}
