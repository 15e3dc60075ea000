//! Pantry item model
//!
//! One user-entered pantry entry. Items are created once and never edited;
//! the pantry list is the ordered sequence of them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Quantity;
use crate::core::PantryError;

/// The ordered pantry contents; position is meaningful
pub type PantryList = Vec<PantryItem>;

/// A single pantry entry
///
/// Serialized field names (`name`, `qty`, `expiry`, `addedAt`) match the
/// persisted format shared with the web client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    /// Item name, trimmed and non-empty
    pub name: String,

    /// Units on hand
    #[serde(rename = "qty", default)]
    pub quantity: Quantity,

    /// Optional best-before date
    #[serde(default)]
    pub expiry: Option<NaiveDate>,

    /// When the item was added (RFC3339)
    pub added_at: DateTime<Utc>,
}

impl PantryItem {
    /// Create an item stamped with the current time
    ///
    /// The name is trimmed; an empty result is rejected.
    pub fn new(
        name: &str,
        quantity: Quantity,
        expiry: Option<NaiveDate>,
    ) -> Result<Self, PantryError> {
        Self::with_added_at(name, quantity, expiry, Utc::now())
    }

    /// Create an item with an explicit creation timestamp
    pub fn with_added_at(
        name: &str,
        quantity: Quantity,
        expiry: Option<NaiveDate>,
        added_at: DateTime<Utc>,
    ) -> Result<Self, PantryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            quantity,
            expiry,
            added_at,
        })
    }
}

/// Parse expiry text as entered by a user
///
/// Blank text means "no expiry".
pub fn parse_expiry(text: &str) -> Result<Option<NaiveDate>, PantryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| PantryError::InvalidExpiry(text.to_string()))
}
