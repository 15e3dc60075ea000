//! Add command - append an item to the pantry

use fittropolis::core::models::{PantryItem, Quantity, parse_expiry};
use fittropolis::output::{OperationResult, OutputMode};

use super::Store;

/// Build an item from user input and append it
///
/// In human mode the store re-renders the pantry after saving and a short
/// confirmation follows the listing. In JSON mode only the result is printed.
pub fn add(
    store: &Store,
    name: &str,
    qty: Option<&str>,
    expiry: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let quantity = qty.map(Quantity::parse).transpose()?.unwrap_or_default();
    let expiry = expiry.map(parse_expiry).transpose()?.flatten();
    let item = PantryItem::new(name, quantity, expiry)?;

    let message = format!("Added: {} (Qty: {})", item.name, item.quantity);
    store.add(item)?;

    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
