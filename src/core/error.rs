//! Pantry error type

use thiserror::Error;

/// Errors raised by the pantry store and item construction
#[derive(Debug, Error)]
pub enum PantryError {
    /// The persisted value is not a well-formed pantry list
    #[error("stored pantry data is malformed: {0}")]
    MalformedData(#[source] serde_json::Error),

    /// The pantry list could not be encoded for storage
    #[error("failed to encode pantry data: {0}")]
    Encode(#[source] serde_json::Error),

    /// Item name was empty after trimming
    #[error("item name must not be empty")]
    EmptyName,

    /// Quantity text is not a whole number of at least 1
    #[error("invalid quantity: {0}. Use a whole number of at least 1")]
    InvalidQuantity(String),

    /// Expiry text is not a calendar date
    #[error("invalid expiry date: {0}. Use YYYY-MM-DD")]
    InvalidExpiry(String),

    /// The key/value backend failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
