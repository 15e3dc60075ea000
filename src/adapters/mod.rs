//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory` - In-process key/value storage
//! - `json_file` - Key/value storage in a single JSON file
//! - `terminal` - Pantry rendering to stdout

pub mod json_file;
pub mod memory;
pub mod terminal;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use terminal::TerminalView;
