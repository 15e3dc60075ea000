//! Command implementations

mod add;
mod list;
mod remove;

use fittropolis::adapters::JsonFileStore;
use fittropolis::core::services::PantryStore;

pub use add::add;
pub use list::list;
pub use remove::remove;

/// The store every command operates on
pub type Store = PantryStore<JsonFileStore>;
