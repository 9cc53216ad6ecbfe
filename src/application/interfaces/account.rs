/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::responses::{AccountInfo, Order, UserTrade};
use crate::model::symbol::Symbol;
use async_trait::async_trait;

/// Interface for the signed account endpoints
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Balances of every asset
    async fn account(&self) -> Result<AccountInfo, AppError>;

    /// Open orders of one symbol
    async fn open_orders(&self, symbol: &Symbol) -> Result<Vec<Order>, AppError>;

    /// Every fill of one symbol, oldest first
    async fn my_trades(&self, symbol: &Symbol) -> Result<Vec<UserTrade>, AppError>;
}
