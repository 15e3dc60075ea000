//! Terminal pantry view
//!
//! Prints the full listing to stdout every time the store renders.

use crate::core::models::PantryItem;
use crate::core::ports::PantryView;
use crate::output::{OutputMode, PantryListing};

/// Renders the pantry to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView {
    mode: OutputMode,
}

impl TerminalView {
    /// Create a view printing in `mode`
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl PantryView for TerminalView {
    fn render(&self, items: &[PantryItem]) {
        PantryListing::from_items(items).render(self.mode);
    }
}
