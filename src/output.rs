//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::PantryItem;

/// Shown in place of rows when the pantry is empty
pub const EMPTY_PANTRY_MESSAGE: &str =
    "Your pantry is empty. Scan items or add them here to get started.";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The rendered pantry
#[derive(Debug, Serialize)]
pub struct PantryListing {
    /// Number of items
    pub total: usize,
    /// One row per item, in pantry order
    pub items: Vec<PantryRow>,
}

/// One pantry row
#[derive(Debug, Serialize)]
pub struct PantryRow {
    /// Current zero-based position; pass to `remove`
    pub index: usize,
    /// Item name
    pub name: String,
    /// Units on hand
    pub qty: u32,
    /// Expiry date (YYYY-MM-DD), if any
    pub expiry: Option<String>,
    /// When the item was added (RFC3339)
    pub added_at: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl PantryListing {
    /// Build the listing for `items` in their stored order
    #[must_use]
    pub fn from_items(items: &[PantryItem]) -> Self {
        let items: Vec<PantryRow> = items
            .iter()
            .enumerate()
            .map(|(index, item)| PantryRow {
                index,
                name: item.name.clone(),
                qty: item.quantity.get(),
                expiry: item.expiry.map(|d| d.format("%Y-%m-%d").to_string()),
                added_at: item.added_at.to_rfc3339(),
            })
            .collect();

        Self {
            total: items.len(),
            items,
        }
    }

    /// Plain-text rendering, without terminal styling
    #[must_use]
    pub fn to_human(&self) -> String {
        self.format_human(false)
    }

    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.format_human(true)),
            OutputMode::Json => self.render_json(),
        }
    }

    fn format_human(&self, styled: bool) -> String {
        let mut out = String::new();

        if self.items.is_empty() {
            let message = if styled {
                EMPTY_PANTRY_MESSAGE.dimmed().to_string()
            } else {
                EMPTY_PANTRY_MESSAGE.to_string()
            };
            let _ = writeln!(out, "{message}");
            return out;
        }

        for row in &self.items {
            let name = if styled {
                row.name.bold().to_string()
            } else {
                row.name.clone()
            };
            let _ = writeln!(out, "  [{}] {}", row.index, name);
            let _ = writeln!(out, "      {}", row.detail());
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "To remove: fittropolis remove <index>");
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl PantryRow {
    /// Quantity line, with the expiry appended only when set
    #[must_use]
    pub fn detail(&self) -> String {
        match &self.expiry {
            Some(expiry) => format!("Qty: {} | Expires: {}", self.qty, expiry),
            None => format!("Qty: {}", self.qty),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
