//! Item quantity
//!
//! A quantity is a whole number of at least 1. Input may arrive as a JSON
//! number or as numeric text (values written by older clients store whatever
//! the form field produced):
//!
//! - missing, `null` or blank text becomes `1`
//! - `12`, `"12"`, `" 12 "`, `12.0` and `"12.0"` all become `12`
//! - zero, negatives, fractions and non-numeric text are rejected by
//!   [`Quantity::parse`]; when read from storage they become `1` with a
//!   warning, so one odd record never makes the rest of the pantry unreadable
//!
//! Quantities are always written back as JSON numbers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::PantryError;

/// Number of units of a pantry item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The quantity used when none is given
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Parse user or stored text; blank text yields the default
    pub fn parse(text: &str) -> Result<Self, PantryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if let Ok(n) = trimmed.parse::<u32>() {
            return Self::new(n).ok_or_else(|| PantryError::InvalidQuantity(text.to_string()));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_whole_f64)
            .ok_or_else(|| PantryError::InvalidQuantity(text.to_string()))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_whole_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX)
        {
            return None;
        }
        Self::new(value as u32)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.get())
    }
}

/// Wire shapes accepted for `qty`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Whole(u64),
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match Option::<RawQuantity>::deserialize(deserializer)? {
            None => return Ok(Self::default()),
            Some(RawQuantity::Whole(n)) => {
                u32::try_from(n).ok().and_then(Self::new).ok_or_else(|| n.to_string())
            },
            Some(RawQuantity::Number(n)) => Self::from_whole_f64(n).ok_or_else(|| n.to_string()),
            Some(RawQuantity::Text(s)) => Self::parse(&s).map_err(|_| s),
        };

        Ok(parsed.unwrap_or_else(|raw| {
            warn!("Stored quantity {raw:?} is not a whole number of at least 1; using 1");
            Self::ONE
        }))
    }
}
