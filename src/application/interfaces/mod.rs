/// Account service interface
pub mod account;
/// Market service interface
pub mod market;
/// Order service interface
pub mod order;
