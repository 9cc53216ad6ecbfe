/// Balance, cost, profit and stop-loss reports built from account data
pub mod account_service;
/// Depth, ticker and volume ranking reports built from public data
pub mod market_service;
/// Resolution of user order input into exchange ready orders
pub mod order_service;
/// Report types returned by the services
pub mod types;

pub use account_service::*;
pub use market_service::*;
pub use order_service::*;
pub use types::*;
