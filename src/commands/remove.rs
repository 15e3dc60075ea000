//! Remove command - drop an item by position

use fittropolis::output::{OperationResult, OutputMode};

use super::Store;

/// Remove the item at `index`; a missing position is reported, not an error
pub fn remove(store: &Store, index: usize, mode: OutputMode) -> anyhow::Result<()> {
    let removed = store.remove_at(index)?;

    let message = if removed {
        format!("Removed item at position {index}")
    } else {
        format!("No item at position {index}")
    };
    OperationResult {
        success: removed,
        message,
    }
    .render(mode);

    Ok(())
}
