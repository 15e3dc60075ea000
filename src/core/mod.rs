//! Core domain logic for fittropolis
//!
//! This module contains the pantry data model and the store that keeps it.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PantryItem`, `Quantity`)
//! - `services/` - The pantry store
//! - `ports/` - Trait definitions for storage and rendering
//! - `error` - Error type shared by the layers above

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::PantryError;
