use clinance::prelude::*;

#[test]
fn test_symbol_display_and_exchange_id() {
    let symbol: Symbol = "ltc-btc".parse().unwrap();
    assert_eq!(symbol.to_string(), "LTC/BTC");
    assert_eq!(symbol.exchange_id(), "LTCBTC");
    assert!(!symbol.is_usd_quoted());
}

#[test]
fn test_symbol_from_exchange_id() {
    let symbol: Symbol = "ethusdt".parse().unwrap();
    assert_eq!(symbol, Symbol::new("ETH", "USDT"));
    assert!(symbol.is_usd_quoted());

    let fdusd: Symbol = "BTCFDUSD".parse().unwrap();
    assert_eq!(fdusd.quote, "FDUSD");
}

#[test]
fn test_symbol_rejects_garbage() {
    for raw in ["", "BTC/", "/USDT", "BTC/USDT/ETH", "B$C/USDT", "XYZ"] {
        let parsed = raw.parse::<Symbol>();
        assert!(
            matches!(parsed, Err(AppError::InvalidInput(_))),
            "{raw} should not parse"
        );
    }
}

#[test]
fn test_symbol_serializes_assets() {
    let value = serde_json::to_value(Symbol::new("eth", "btc")).unwrap();
    assert_eq!(value["base"], "ETH");
    assert_eq!(value["quote"], "BTC");
}
