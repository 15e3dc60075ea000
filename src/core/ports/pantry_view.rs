//! Pantry view port
//!
//! A view is told about the complete pantry every time it changes.

use crate::core::models::PantryItem;

/// A surface that displays the pantry
///
/// `render` always receives the full, freshly persisted list. Views redraw
/// from scratch; there is no diffing.
pub trait PantryView {
    /// Redraw the pantry with `items` in display order
    fn render(&self, items: &[PantryItem]);
}
