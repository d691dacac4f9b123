//! Slot storage trait
//!
//! A slot is a named string value, the same model as browser local
//! storage: one key per collection, each holding a serialized record list.

use pilgrimdesk_core::Result;
use std::sync::Arc;

/// Named string slots
///
/// All operations are synchronous and complete before returning. There is
/// no locking across handles: concurrent writers to the same slot race and
/// the last write wins.
///
/// # Thread Safety
///
/// Implementations are `Send + Sync` so one backend can be shared by every
/// collection store through an `Arc`.
pub trait SlotStorage: Send + Sync {
    /// Read the raw value of a slot
    ///
    /// Returns `Ok(None)` when the slot has never been written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot
    ///
    /// The previous value is fully overwritten.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot
    ///
    /// Returns true if the slot existed.
    fn remove_slot(&self, key: &str) -> Result<bool>;

    /// Keys of all slots currently present, sorted
    fn slot_keys(&self) -> Result<Vec<String>>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Arc<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> Result<bool> {
        (**self).remove_slot(key)
    }

    fn slot_keys(&self) -> Result<Vec<String>> {
        (**self).slot_keys()
    }
}
