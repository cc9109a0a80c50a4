//! Errors returned by transaction queries.

/// Errors that may occur while querying transactions.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum QueryError {
    /// A transaction amount could not be coerced to a number.
    #[error("transaction {id} has an invalid amount \"{raw}\"")]
    InvalidAmount { id: String, raw: String },

    /// A date given as a query argument could not be parsed.
    ///
    /// Unparseable dates on stored transactions never raise this error, those
    /// transactions are left out of date based results instead.
    #[error("unable to parse date \"{0}\"")]
    InvalidDate(String),

    /// The aggregate needs at least one transaction.
    #[error("no transactions to aggregate")]
    EmptyCollection,
}
