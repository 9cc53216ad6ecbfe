/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! Turns `buy` / `sell` input into a limit order Binance will accept.
//!
//! Prices are rounded down to the symbol tick size and quantities down to
//! its step size. Orders below the minimum quantity or notional are refused
//! locally instead of being sent.

use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::error::AppError;
use crate::model::requests::{AmountSpec, NewLimitOrder, PriceSpec, Side, TimeInForce};
use crate::model::responses::{Order, SymbolInfo};
use crate::model::symbol::Symbol;
use crate::utils::finance::{format_to_step, round_down_to_step};
use crate::utils::id::new_client_order_id;
use tracing::{debug, info};

/// Decimals used when a symbol carries no price or lot filter
const FALLBACK_DECIMALS: usize = 8;

/// Limit price for `spec`, asking the book for `bid` / `ask`
pub async fn resolve_price<C>(client: &C, symbol: &Symbol, spec: PriceSpec) -> Result<f64, AppError>
where
    C: MarketService + ?Sized,
{
    let price = match spec {
        PriceSpec::Fixed(price) => price,
        PriceSpec::Bid => client.book_ticker(symbol).await?.bid_price,
        PriceSpec::Ask => client.book_ticker(symbol).await?.ask_price,
    };
    if !(price.is_finite() && price > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "no usable {spec:?} price for {symbol}"
        )));
    }
    debug!("Resolved price for {}: {}", symbol, price);
    Ok(price)
}

/// Base quantity for `spec` at `price`
///
/// Buy amounts are expressed in quote currency and converted with `price`.
/// `max` and `<n>%` read the free balance of the asset being spent.
pub async fn resolve_quantity<C>(
    client: &C,
    symbol: &Symbol,
    side: Side,
    spec: AmountSpec,
    price: f64,
) -> Result<f64, AppError>
where
    C: AccountService + ?Sized,
{
    let fraction = match spec {
        AmountSpec::Fixed(amount) => {
            return Ok(match side {
                Side::Buy => amount / price,
                Side::Sell => amount,
            });
        }
        AmountSpec::Max => 1.0,
        AmountSpec::Percent(pct) => pct / 100.0,
    };

    let spent_asset = match side {
        Side::Buy => &symbol.quote,
        Side::Sell => &symbol.base,
    };
    let free = client.account().await?.balance_of(spent_asset).free;
    debug!("Free {} balance: {}", spent_asset, free);

    let amount = free * fraction;
    Ok(match side {
        Side::Buy => amount / price,
        Side::Sell => amount,
    })
}

/// Rounds and validates an order against the symbol filters
pub fn build_limit_order(
    info: &SymbolInfo,
    side: Side,
    quantity: f64,
    price: f64,
) -> Result<NewLimitOrder, AppError> {
    if !info.is_trading() {
        return Err(AppError::InvalidInput(format!(
            "{} is not trading (status {})",
            info.symbol, info.status
        )));
    }

    let (price, price_str) = match info.tick_size() {
        Some(tick) => {
            let rounded = round_down_to_step(price, tick);
            (rounded, format_to_step(rounded, tick))
        }
        None => (price, format!("{:.*}", FALLBACK_DECIMALS, price)),
    };

    let (quantity, quantity_str, min_qty) = match info.lot_size() {
        Some((step, min_qty)) => {
            let rounded = round_down_to_step(quantity, step);
            (rounded, format_to_step(rounded, step), min_qty)
        }
        None => (quantity, format!("{:.*}", FALLBACK_DECIMALS, quantity), 0.0),
    };

    if price <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "price rounds to zero for {}",
            info.symbol
        )));
    }
    if quantity <= 0.0 || quantity < min_qty {
        return Err(AppError::InvalidInput(format!(
            "quantity {quantity_str} is below the minimum of {min_qty} for {}",
            info.symbol
        )));
    }
    if let Some(min_notional) = info.min_notional() {
        let notional = quantity * price;
        if notional < min_notional {
            return Err(AppError::InvalidInput(format!(
                "order value {notional:.8} is below the minimum notional of {min_notional} {}",
                info.quote_asset
            )));
        }
    }

    Ok(NewLimitOrder {
        symbol: info.symbol.clone(),
        side,
        time_in_force: TimeInForce::GoodTillCancelled,
        quantity: quantity_str,
        price: price_str,
        client_order_id: new_client_order_id(),
    })
}

/// Resolves `buy` / `sell` input into an order ready to be placed
pub async fn resolve_limit_order<C>(
    client: &C,
    symbol: &Symbol,
    side: Side,
    amount: AmountSpec,
    price: PriceSpec,
) -> Result<NewLimitOrder, AppError>
where
    C: MarketService + AccountService + ?Sized,
{
    let info = client.symbol_info(symbol).await?;
    let price = resolve_price(client, symbol, price).await?;
    let quantity = resolve_quantity(client, symbol, side, amount, price).await?;
    build_limit_order(&info, side, quantity, price)
}

/// Resolves and places a limit order
pub async fn place_limit_order<C>(
    client: &C,
    symbol: &Symbol,
    side: Side,
    amount: AmountSpec,
    price: PriceSpec,
) -> Result<Order, AppError>
where
    C: MarketService + AccountService + OrderService + ?Sized,
{
    let order = resolve_limit_order(client, symbol, side, amount, price).await?;
    info!(
        "Submitting {} {} {} @ {} ({})",
        order.side.as_str(),
        order.quantity,
        symbol,
        order.price,
        order.client_order_id
    );
    client.place_limit_order(&order).await
}
