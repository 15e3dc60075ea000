//! Business logic services
//!
//! - [`pantry_store`] - Persisted pantry list with render notifications

pub mod pantry_store;

pub use pantry_store::{CorruptPolicy, PANTRY_KEY, PantryStore};
