/// Module containing environment based configuration helpers
pub mod config;
/// Module containing indicator and position arithmetic
pub mod finance;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use finance::*;
pub use id::*;
pub use logger::*;
