//! List command - show the pantry

use super::Store;

/// Render the pantry through the store's views
pub fn list(store: &Store) -> anyhow::Result<()> {
    store.render()?;
    Ok(())
}
