//! Core domain types and logic.

pub mod ticker;
pub mod quote;
pub mod batch;
pub mod portfolio_value;
pub mod allocator;
pub mod quote_table;
pub mod error;
