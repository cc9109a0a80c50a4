//! Query and aggregate an in-memory list of financial transactions.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod reader;
pub mod report;
pub mod transaction;

pub use analyzer::{AmountPolicy, DominantType, TransactionAnalyzer};
pub use error::QueryError;
pub use transaction::{Amount, Transaction};
