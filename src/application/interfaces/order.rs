/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::NewLimitOrder;
use crate::model::responses::Order;
use crate::model::symbol::Symbol;
use async_trait::async_trait;

#[async_trait]
/// Service for placing and cancelling spot orders
///
/// Orders reaching this trait are already rounded to the symbol filters.
pub trait OrderService: Send + Sync {
    /// Places a limit order
    async fn place_limit_order(&self, order: &NewLimitOrder) -> Result<Order, AppError>;

    /// Cancels an order by its exchange id
    async fn cancel_order(&self, symbol: &Symbol, order_id: u64) -> Result<Order, AppError>;
}
