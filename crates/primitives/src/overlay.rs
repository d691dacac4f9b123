//! Overlay store primitive
//!
//! Merges a fixed seed list with user records persisted in one storage slot.
//!
//! # Design
//!
//! OverlayStore is a stateless facade: it holds the immutable seed list and
//! an `Arc<dyn SlotStorage>`. Nothing read from storage is cached, so every
//! `get` reflects the slot as it is now and returns a fresh `Vec`. Clone is
//! cheap (two Arc clones).
//!
//! The slot holds only overlay records, serialized as a JSON array. The
//! merged view is
//!
//! ```text
//! SeedWins:    seed ++ [r in overlay | r.id not in seed_ids]
//! OverlayWins: [overlay[s.id] or s for s in seed] ++ [r in overlay | r.id not in seed_ids]
//! ```
//!
//! # Failure semantics
//!
//! - Reads fail open: an absent slot, a backend read error, or content
//!   that is not a JSON array yields the seed list alone.
//! - Array elements are decoded one by one. An element that does not fit
//!   `T` is left out of the merged view but kept verbatim in the slot, so
//!   one malformed record never hides or erases the others.
//! - Writes follow the store's `WriteFailurePolicy`.
//!
//! # Example
//!
//! ```ignore
//! let storage: Arc<dyn SlotStorage> = Arc::new(MemoryStorage::new());
//! let store = OverlayStore::new(storage, seed::death_cases(&mut rng, 15));
//!
//! store.save(new_case)?;
//! let cases = store.get();
//! ```

use pilgrimdesk_core::{Error, MergePolicy, Record, Result, WriteFailurePolicy};
use pilgrimdesk_storage::SlotStorage;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const TRACE_TARGET: &str = "pilgrimdesk::overlay";

/// Decoded contents of an overlay slot
struct SlotContents<T> {
    records: Vec<T>,
    /// Elements that did not decode as `T`, written back untouched
    foreign: Vec<Value>,
}

impl<T> Default for SlotContents<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            foreign: Vec::new(),
        }
    }
}

fn raw_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Seed list plus persisted overlay for one collection
///
/// # Thread Safety
///
/// OverlayStore is Clone and Send + Sync. Instances sharing a storage
/// backend see the same overlay. Concurrent `save` calls on the same
/// collection race: each rewrites the whole slot and the last one wins.
pub struct OverlayStore<T: Record> {
    storage: Arc<dyn SlotStorage>,
    seed: Arc<[T]>,
    seed_ids: Arc<FxHashSet<String>>,
    merge_policy: MergePolicy,
    write_failure: WriteFailurePolicy,
}

impl<T: Record> Clone for OverlayStore<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            seed: Arc::clone(&self.seed),
            seed_ids: Arc::clone(&self.seed_ids),
            merge_policy: self.merge_policy,
            write_failure: self.write_failure,
        }
    }
}

impl<T: Record> OverlayStore<T> {
    /// Create a store over `storage` with the given seed list
    ///
    /// Seed records are fixed for the lifetime of the store. If the seed
    /// list repeats an id, only the first record with that id is kept.
    ///
    /// # Arguments
    ///
    /// * `storage` - Shared slot backend
    /// * `seed` - Code-defined records, returned first by `get` in this order
    pub fn new(storage: Arc<dyn SlotStorage>, seed: Vec<T>) -> Self {
        let mut seed_ids = FxHashSet::default();
        let mut unique = Vec::with_capacity(seed.len());
        for record in seed {
            if seed_ids.insert(record.id().to_string()) {
                unique.push(record);
            } else {
                tracing::warn!(
                    target: TRACE_TARGET,
                    collection = T::COLLECTION,
                    id = record.id(),
                    "duplicate seed id dropped"
                );
            }
        }
        Self {
            storage,
            seed: unique.into(),
            seed_ids: Arc::new(seed_ids),
            merge_policy: MergePolicy::default(),
            write_failure: WriteFailurePolicy::default(),
        }
    }

    /// Set how overlay copies of seed records are resolved
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    /// Set what happens when the backend rejects a write
    pub fn with_write_failure_policy(mut self, policy: WriteFailurePolicy) -> Self {
        self.write_failure = policy;
        self
    }

    /// Storage key of this collection's slot
    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    /// Active merge policy
    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// The immutable seed list
    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    /// Check if `id` belongs to a seed record
    pub fn is_seed_id(&self, id: &str) -> bool {
        self.seed_ids.contains(id)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Merged view of seed and overlay records
    ///
    /// Seed records come first in seed order, followed by overlay-only
    /// records in stored order. Ids are unique within the result. Never
    /// fails: unreadable overlay data is treated as absent.
    pub fn get(&self) -> Vec<T> {
        let overlay = self.read_overlay().unwrap_or_default();
        self.merge(overlay.records)
    }

    /// Find a record in the merged view
    pub fn find(&self, id: &str) -> Option<T> {
        self.get().into_iter().find(|r| r.id() == id)
    }

    /// Records as stored in the overlay slot, without merging
    ///
    /// Returns an empty list when the slot is absent or unreadable.
    /// Elements that do not decode as `T` are not included.
    pub fn overlay(&self) -> Vec<T> {
        self.read_overlay().unwrap_or_default().records
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert or replace a record, then rewrite the overlay slot
    ///
    /// The record replaces any merged record with the same id, or is
    /// appended. The slot is then rewritten from the updated merged view
    /// with seed records excluded.
    ///
    /// Under `MergePolicy::SeedWins` a record whose id is a seed id is
    /// excluded too, so saving an edit to a seed record leaves the next
    /// `get` unchanged. Under `OverlayWins` the edit is kept.
    ///
    /// Slot elements that could not be decoded are written back as they
    /// were, unless they carry the saved record's id.
    ///
    /// # Errors
    ///
    /// Backend failures are returned or logged per the write failure policy.
    pub fn save(&self, record: T) -> Result<()> {
        let SlotContents { records, mut foreign } = self.read_overlay().unwrap_or_default();
        foreign.retain(|v| raw_id(v) != Some(record.id()));

        let mut overlay_ids: FxHashSet<String> = FxHashSet::default();
        if self.merge_policy == MergePolicy::OverlayWins {
            overlay_ids.extend(records.iter().map(|r| r.id().to_string()));
            overlay_ids.insert(record.id().to_string());
        }

        let mut all = self.merge(records);
        match all.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => all.push(record),
        }

        let to_store: Vec<&T> = all
            .iter()
            .filter(|r| !self.is_seed_id(r.id()) || overlay_ids.contains(r.id()))
            .collect();
        self.persist(&to_store, &foreign)
    }

    /// Remove a record from the overlay slot
    ///
    /// Only the overlay is touched, so seed records can never be deleted.
    /// Under `OverlayWins` deleting a seed id drops the overlay copy and the
    /// seed version shows through again.
    ///
    /// # Returns
    ///
    /// true if an overlay element with this id was removed, whether or not
    /// it decoded as `T`. When the slot is absent or unreadable nothing is
    /// written and false is returned.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let Some(SlotContents {
            mut records,
            mut foreign,
        }) = self.read_overlay()
        else {
            return Ok(false);
        };
        let before = records.len() + foreign.len();
        records.retain(|r| r.id() != id);
        foreign.retain(|v| raw_id(v) != Some(id));
        let removed = records.len() + foreign.len() != before;

        let to_store: Vec<&T> = records.iter().collect();
        self.persist(&to_store, &foreign)?;
        Ok(removed)
    }

    /// Drop the overlay slot entirely, leaving only seed records
    ///
    /// # Returns
    ///
    /// true if the slot existed
    pub fn clear_overlay(&self) -> Result<bool> {
        match self.storage.remove_slot(T::COLLECTION) {
            Ok(existed) => Ok(existed),
            Err(err) => self.absorb_write_failure(err).map(|()| false),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn read_overlay(&self) -> Option<SlotContents<T>> {
        let raw = match self.storage.read_slot(T::COLLECTION) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(
                    target: TRACE_TARGET,
                    collection = T::COLLECTION,
                    error = %err,
                    "overlay read failed, using seed records only"
                );
                return None;
            }
        };
        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                tracing::debug!(
                    target: TRACE_TARGET,
                    collection = T::COLLECTION,
                    error = %err,
                    "overlay slot unparsable, using seed records only"
                );
                return None;
            }
        };

        let mut contents = SlotContents {
            records: Vec::with_capacity(values.len()),
            foreign: Vec::new(),
        };
        for value in values {
            match T::deserialize(&value) {
                Ok(record) => contents.records.push(record),
                Err(err) => {
                    tracing::warn!(
                        target: TRACE_TARGET,
                        collection = T::COLLECTION,
                        id = raw_id(&value),
                        error = %err,
                        "overlay record has unexpected shape, kept but not shown"
                    );
                    contents.foreign.push(value);
                }
            }
        }
        Some(contents)
    }

    fn merge(&self, overlay: Vec<T>) -> Vec<T> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut replacements: FxHashMap<String, T> = FxHashMap::default();
        let mut overlay_only = Vec::new();

        for record in overlay {
            if !seen.insert(record.id().to_string()) {
                continue;
            }
            if self.is_seed_id(record.id()) {
                if self.merge_policy == MergePolicy::OverlayWins {
                    replacements.insert(record.id().to_string(), record);
                }
            } else {
                overlay_only.push(record);
            }
        }

        let mut merged = Vec::with_capacity(self.seed.len() + overlay_only.len());
        for record in self.seed.iter() {
            match replacements.remove(record.id()) {
                Some(edited) => merged.push(edited),
                None => merged.push(record.clone()),
            }
        }
        merged.extend(overlay_only);
        merged
    }

    fn persist(&self, records: &[&T], foreign: &[Value]) -> Result<()> {
        let json = if foreign.is_empty() {
            serde_json::to_string(records)?
        } else {
            let mut values = Vec::with_capacity(records.len() + foreign.len());
            for record in records {
                values.push(serde_json::to_value(record)?);
            }
            values.extend(foreign.iter().cloned());
            serde_json::to_string(&values)?
        };
        match self.storage.write_slot(T::COLLECTION, &json) {
            Ok(()) => {
                tracing::debug!(
                    target: TRACE_TARGET,
                    collection = T::COLLECTION,
                    records = records.len(),
                    kept_foreign = foreign.len(),
                    "overlay slot written"
                );
                Ok(())
            }
            Err(err) => self.absorb_write_failure(err),
        }
    }

    fn absorb_write_failure(&self, err: Error) -> Result<()> {
        if err.is_storage_failure() && self.write_failure == WriteFailurePolicy::LogAndContinue {
            tracing::warn!(
                target: TRACE_TARGET,
                collection = T::COLLECTION,
                error = %err,
                "overlay write failed, change not persisted"
            );
            return Ok(());
        }
        Err(err)
    }
}
