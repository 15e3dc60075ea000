//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pantry store and the
//! systems around it: where the list is persisted and where it is shown.
//!
//! Implementations live in the `adapters` module.

mod key_value_store;
mod pantry_view;

pub use key_value_store::KeyValueStore;
pub use pantry_view::PantryView;
