//! In-memory slot storage
//!
//! DashMap keyed by slot name, FxHash for fast lookups. Used as the test
//! fake for the overlay store and as the backend of ephemeral desks.
//!
//! # Quota
//!
//! Browser storage rejects writes once an origin exceeds its quota. An
//! optional byte quota reproduces that: the quota counts the UTF-8 length
//! of every key plus every value, and a write that would push the total
//! past it fails with `QuotaExceeded` and leaves the slot untouched.
//! Quota-checked writes are serialized so concurrent writers cannot
//! jointly overshoot it.

use crate::traits::SlotStorage;
use dashmap::DashMap;
use parking_lot::Mutex;
use pilgrimdesk_core::{Error, Result};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// In-memory slot storage
///
/// # Example
///
/// ```ignore
/// use pilgrimdesk_storage::{MemoryStorage, SlotStorage};
///
/// let storage = MemoryStorage::with_quota(5 * 1024 * 1024);
/// storage.write_slot("reception_departure", "[]")?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: DashMap<String, String, FxBuildHasher>,
    quota: Option<usize>,
    /// Held across check and insert when a quota is set
    write_guard: Mutex<()>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes past `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: DashMap::with_hasher(FxBuildHasher::default()),
            quota: Some(quota),
            write_guard: Mutex::new(()),
        }
    }

    /// Configured quota, if any
    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Bytes currently held (keys plus values)
    pub fn used_bytes(&self) -> usize {
        self.slots
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }

    /// Number of slots present
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot has been written
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check_quota(&self, key: &str, value: &str) -> Result<()> {
        let Some(quota) = self.quota else {
            return Ok(());
        };
        let others: usize = self
            .slots
            .iter()
            .filter(|entry| entry.key() != key)
            .map(|entry| entry.key().len() + entry.value().len())
            .sum();
        let needed = others + key.len() + value.len();
        if needed > quota {
            return Err(Error::QuotaExceeded {
                slot: key.to_string(),
                needed,
                quota,
            });
        }
        Ok(())
    }
}

impl SlotStorage for MemoryStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).map(|value| value.clone()))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.quota.map(|_| self.write_guard.lock());
        self.check_quota(key, value)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<bool> {
        Ok(self.slots.remove(key).is_some())
    }

    fn slot_keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.slots.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}
