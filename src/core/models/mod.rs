//! Domain models for fittropolis
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PantryItem`] - One entry in the pantry
//! - [`Quantity`] - How many of an item are on hand
//! - [`PantryList`] - The ordered pantry contents

mod pantry_item;
mod quantity;

pub use pantry_item::{PantryItem, PantryList, parse_expiry};
pub use quantity::Quantity;
