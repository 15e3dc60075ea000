//! Common test utilities
//!
//! - `mocks.rs` - Port implementations that record or fail
//! - item builders for fixed, comparable pantry items


use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fittropolis::core::models::{PantryItem, Quantity};

/// Fixed creation time so items compare equal across runs
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

/// Item with the given name and quantity, no expiry
pub fn item(name: &str, qty: u32) -> PantryItem {
    PantryItem::with_added_at(name, Quantity::new(qty).unwrap(), None, fixed_time()).unwrap()
}

/// Item with an expiry date
pub fn item_expiring(name: &str, qty: u32, y: i32, m: u32, d: u32) -> PantryItem {
    PantryItem::with_added_at(
        name,
        Quantity::new(qty).unwrap(),
        NaiveDate::from_ymd_opt(y, m, d),
        fixed_time(),
    )
    .unwrap()
}
