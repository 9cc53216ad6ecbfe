use crate::fake::*;
use clinance::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn with_position() -> FakeExchange {
    let mut fake = FakeExchange::with_markets();
    fake.user_trades.insert(
        "ETHBTC".to_string(),
        vec![
            user_trade(1, true, 0.045, 1.0),
            user_trade(2, false, 0.047, 1.0),
            user_trade(3, true, 0.04, 2.0),
        ],
    );
    fake.balances = vec![
        balance("ETH", 1.5, 0.5),
        balance("BTC", 0.5, 0.1),
        balance("USDT", 1000.0, 0.0),
        balance("XRP", 0.0, 0.0),
    ];
    fake
}

fn flat_candles(n: usize) -> Vec<Candle> {
    (0..n).map(|_| candle(0.052, 0.048, 0.05, 10.0)).collect()
}

#[tokio::test]
async fn test_weighted_average_cost_after_full_exit() {
    let fake = with_position();
    let report = weighted_average_cost(&fake, &Symbol::new("ETH", "BTC"))
        .await
        .unwrap();
    assert_eq!(report.symbol, "ETH/BTC");
    assert!(approx(report.cost, 0.04));
    assert!(approx(report.quantity, 2.0));
}

#[tokio::test]
async fn test_weighted_average_cost_without_trades() {
    let fake = FakeExchange::with_markets();
    let report = weighted_average_cost(&fake, &Symbol::new("LTC", "BTC"))
        .await
        .unwrap();
    assert_eq!(report.cost, 0.0);
    assert_eq!(report.quantity, 0.0);
}

#[tokio::test]
async fn test_profit_uses_total_balance_and_last_price() {
    let fake = with_position();
    let report = profit(&fake, "ETH", "BTC").await.unwrap();
    assert_eq!(report.coin, "ETH");
    assert_eq!(report.quote, "BTC");
    assert!(approx(report.quantity, 2.0));
    assert!(approx(report.last, 0.05));
    assert!(approx(report.profit, 0.02));
    assert!(approx(report.percent, 25.0));
}

#[tokio::test]
async fn test_stop_loss_from_last_buy() {
    let mut fake = with_position();
    fake.candles.insert("ETHBTC".to_string(), flat_candles(30));
    let params = StopLossParams::default();
    let report = stop_loss(&fake, &Symbol::new("ETH", "BTC"), params)
        .await
        .unwrap();
    assert!(approx(report.reference, 0.04));
    assert!(approx(report.atr, 0.004));
    assert!(approx(report.stop_loss, 0.04 - 0.004 * 1.5));

    let requests = fake.kline_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, Interval::FifteenMinutes);
    assert!(requests[0].2 as usize > params.period);
}

#[tokio::test]
async fn test_stop_loss_from_current_price() {
    let mut fake = FakeExchange::with_markets();
    fake.candles.insert("ETHBTC".to_string(), flat_candles(30));
    fake.public_trades.insert(
        "ETHBTC".to_string(),
        vec![
            PublicTrade {
                id: 10,
                price: 0.051,
                qty: 1.0,
                time: 2_000,
                is_buyer_maker: false,
            },
            PublicTrade {
                id: 9,
                price: 0.049,
                qty: 1.0,
                time: 1_000,
                is_buyer_maker: true,
            },
        ],
    );
    let params = StopLossParams {
        factor: 2.0,
        current: true,
        ..Default::default()
    };
    let report = stop_loss(&fake, &Symbol::new("ETH", "BTC"), params)
        .await
        .unwrap();
    assert!(approx(report.reference, 0.051));
    assert!(approx(report.stop_loss, 0.051 - 0.008));
}

#[tokio::test]
async fn test_stop_loss_without_buys_is_an_error() {
    let mut fake = FakeExchange::with_markets();
    fake.candles.insert("ETHBTC".to_string(), flat_candles(30));
    fake.user_trades
        .insert("ETHBTC".to_string(), vec![user_trade(1, false, 0.05, 1.0)]);
    let err = stop_loss(&fake, &Symbol::new("ETH", "BTC"), StopLossParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("--current")));
}

#[tokio::test]
async fn test_stop_loss_needs_enough_candles() {
    let mut fake = with_position();
    fake.candles.insert("ETHBTC".to_string(), flat_candles(5));
    let err = stop_loss(&fake, &Symbol::new("ETH", "BTC"), StopLossParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_stop_loss_longest_period_requests_at_most_1000_candles() {
    let mut fake = with_position();
    fake.candles.insert("ETHBTC".to_string(), flat_candles(30));
    let params = StopLossParams {
        period: 999,
        ..Default::default()
    };
    let err = stop_loss(&fake, &Symbol::new("ETH", "BTC"), params)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("not enough")));

    let requests = fake.kline_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].2, 1000);
}

#[tokio::test]
async fn test_stop_loss_rejects_period_beyond_kline_limit() {
    for period in [1000, 1 << 32, usize::MAX] {
        let mut fake = with_position();
        fake.candles.insert("ETHBTC".to_string(), flat_candles(30));
        let params = StopLossParams {
            period,
            ..Default::default()
        };
        let err = stop_loss(&fake, &Symbol::new("ETH", "BTC"), params)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("below 1000")));
        assert!(fake.kline_requests.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_balances_skip_empty_assets() {
    let fake = with_position();
    let report = balances(&fake, None, false).await.unwrap();
    let coins: Vec<&str> = report.entries.iter().map(|e| e.coin.as_str()).collect();
    assert_eq!(coins, vec!["BTC", "ETH", "USDT"]);
    assert!(report.total_btc.is_none());
    assert!(approx(report.entries[0].total, 0.6));
    assert!(report.entries.iter().all(|e| e.btc_value.is_none()));
}

#[tokio::test]
async fn test_detailed_balances_value_in_btc() {
    let fake = with_position();
    let report = balances(&fake, None, true).await.unwrap();
    let values: Vec<f64> = report
        .entries
        .iter()
        .map(|e| e.btc_value.unwrap())
        .collect();
    assert!(approx(values[0], 0.6));
    assert!(approx(values[1], 0.1));
    assert!(approx(values[2], 0.02));
    assert!(approx(report.total_btc.unwrap(), 0.72));
}

#[tokio::test]
async fn test_balances_single_coin() {
    let fake = with_position();
    let report = balances(&fake, Some("eth"), false).await.unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].coin, "ETH");
    assert!(approx(report.entries[0].used, 0.5));
}

#[tokio::test]
async fn test_depth_pads_shorter_side() {
    let mut fake = FakeExchange::with_markets();
    fake.books.insert(
        "BTCUSDT".to_string(),
        OrderBook {
            last_update_id: 1,
            bids: vec![
                PriceLevel {
                    price: 49999.0,
                    quantity: 1.0,
                },
                PriceLevel {
                    price: 49998.0,
                    quantity: 2.0,
                },
            ],
            asks: vec![
                PriceLevel {
                    price: 50001.0,
                    quantity: 0.5,
                },
                PriceLevel {
                    price: 50002.0,
                    quantity: 0.25,
                },
                PriceLevel {
                    price: 50003.0,
                    quantity: 3.0,
                },
            ],
        },
    );
    let report = depth(&fake, &Symbol::new("BTC", "USDT"), 7).await.unwrap();
    assert_eq!(report.decimals, 3);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[0].ask, Some(50001.0));
    assert_eq!(report.rows[0].bid, Some(49999.0));
    assert_eq!(report.rows[2].ask_amount, Some(3.0));
    assert_eq!(report.rows[2].bid, None);
    assert_eq!(*fake.depth_requests.lock().unwrap(), vec![10]);
}

#[tokio::test]
async fn test_depth_rejects_zero_rows() {
    let fake = FakeExchange::with_markets();
    assert!(depth(&fake, &Symbol::new("ETH", "BTC"), 0).await.is_err());
}

#[tokio::test]
async fn test_tickers_keep_requested_order() {
    let fake = FakeExchange::with_markets();
    let symbols = vec![Symbol::new("LTC", "BTC"), Symbol::new("ETH", "BTC")];
    let rows = tickers(&fake, &symbols).await.unwrap();
    assert_eq!(rows[0].symbol, "LTC/BTC");
    assert_eq!(rows[1].symbol, "ETH/BTC");
    assert_eq!(rows[1].close, rows[1].last);
    assert_eq!(rows[1].percent, 1.23);
}

#[tokio::test]
async fn test_tickers_unknown_symbol() {
    let fake = FakeExchange::with_markets();
    let err = tickers(&fake, &[Symbol::new("DOGE", "BTC")])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_volume_ranking_keeps_active_symbols() {
    let mut fake = FakeExchange::with_markets();
    fake.candles.insert(
        "ETHBTC".to_string(),
        vec![
            candle(0.05, 0.05, 0.05, 100.0),
            candle(0.05, 0.05, 0.05, 120.0),
            candle(0.05, 0.05, 0.05, 140.0),
        ],
    );
    fake.candles.insert(
        "LTCBTC".to_string(),
        vec![
            candle(0.002, 0.002, 0.002, 100.0),
            candle(0.002, 0.002, 0.002, 100.0),
            candle(0.002, 0.002, 0.002, 100.0),
        ],
    );

    let ranking = volume_ranking(&fake, &VolumeParams::default())
        .await
        .unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].symbol, "ETH/BTC");
    assert!(approx(ranking[0].vol_0, 7.0));
    assert!(approx(ranking[0].vol_2, 5.0));

    let requested: Vec<String> = fake
        .kline_requests
        .lock()
        .unwrap()
        .iter()
        .map(|(id, _, _)| id.clone())
        .collect();
    assert_eq!(requested, vec!["ETHBTC", "LTCBTC"]);
}

#[tokio::test]
async fn test_volume_ranking_min_vol_cutoff() {
    let fake = FakeExchange::with_markets();
    let params = VolumeParams {
        min_vol: 1000.0,
        ..Default::default()
    };
    let ranking = volume_ranking(&fake, &params).await.unwrap();
    assert!(ranking.is_empty());
    assert!(fake.kline_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_buy_with_fixed_values() {
    let fake = FakeExchange::with_markets();
    let order = resolve_limit_order(
        &fake,
        &Symbol::new("ETH", "BTC"),
        Side::Buy,
        AmountSpec::Fixed(0.01),
        PriceSpec::Fixed(0.05),
    )
    .await
    .unwrap();
    assert_eq!(order.symbol, "ETHBTC");
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.quantity, "0.200");
    assert_eq!(order.price, "0.050000");
    assert!(!order.client_order_id.is_empty());
}

#[tokio::test]
async fn test_resolve_sell_max_rounds_down() {
    let mut fake = FakeExchange::with_markets();
    fake.balances = vec![balance("ETH", 1.2345, 3.0)];
    let order = resolve_limit_order(
        &fake,
        &Symbol::new("ETH", "BTC"),
        Side::Sell,
        AmountSpec::Max,
        PriceSpec::Fixed(0.06),
    )
    .await
    .unwrap();
    assert_eq!(order.quantity, "1.234");
    assert_eq!(order.price, "0.060000");
}

#[tokio::test]
async fn test_resolve_buy_percent_of_quote_balance() {
    let mut fake = FakeExchange::with_markets();
    fake.balances = vec![balance("BTC", 0.1, 0.0), balance("ETH", 50.0, 0.0)];
    let order = resolve_limit_order(
        &fake,
        &Symbol::new("ETH", "BTC"),
        Side::Buy,
        AmountSpec::Percent(50.0),
        PriceSpec::Fixed(0.025),
    )
    .await
    .unwrap();
    assert_eq!(order.quantity, "2.000");
}

#[tokio::test]
async fn test_resolve_price_from_book() {
    let mut fake = FakeExchange::with_markets();
    fake.tickers[0].bid_price = Some(0.049);
    fake.tickers[0].ask_price = Some(0.051);
    let symbol = Symbol::new("ETH", "BTC");
    assert_eq!(resolve_price(&fake, &symbol, PriceSpec::Bid).await.unwrap(), 0.049);
    assert_eq!(resolve_price(&fake, &symbol, PriceSpec::Ask).await.unwrap(), 0.051);
}

#[tokio::test]
async fn test_order_below_minimum_is_refused() {
    let fake = FakeExchange::with_markets();
    let err = place_limit_order(
        &fake,
        &Symbol::new("ETH", "BTC"),
        Side::Sell,
        AmountSpec::Fixed(0.0004),
        PriceSpec::Fixed(0.05),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(fake.placed().is_empty());
}

#[tokio::test]
async fn test_place_order_on_unknown_symbol() {
    let fake = FakeExchange::with_markets();
    let result = place_limit_order(
        &fake,
        &Symbol::new("DOGE", "BTC"),
        Side::Buy,
        AmountSpec::Fixed(1.0),
        PriceSpec::Fixed(0.0001),
    )
    .await;
    assert!(result.is_err());
    assert!(fake.placed().is_empty());
}
