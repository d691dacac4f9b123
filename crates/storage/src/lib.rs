//! Slot storage layer for pilgrimdesk
//!
//! - SlotStorage: the read/write/remove contract the overlay store depends on
//! - MemoryStorage: DashMap-backed fake with an optional byte quota
//! - FileStorage: one JSON file per slot inside a directory

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;
pub mod traits;

pub use file::{validate_slot_key, FileStorage};
pub use memory::MemoryStorage;
pub use traits::SlotStorage;
