//! Merge and write-failure policies
//!
//! Both policies are chosen once per store and never change afterwards.

use serde::{Deserialize, Serialize};

/// How the merged view resolves an overlay record whose id is also a seed id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Seed copy always wins (default).
    ///
    /// Overlay records sharing a seed id are dropped on read and filtered
    /// out before every write, so edits to seed records never persist.
    /// This is the dashboard's historical behavior and is kept as the
    /// default so existing slots read back identically.
    #[default]
    SeedWins,
    /// Overlay copy replaces the seed record in place.
    ///
    /// Edits to seed records persist. Deleting the overlay copy reverts
    /// the record to its seed version; the seed record itself is still
    /// never removed.
    OverlayWins,
}

/// What `save`/`delete` do when the storage backend rejects a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteFailurePolicy {
    /// Return the storage error to the caller (default)
    #[default]
    Propagate,
    /// Log the failure at `warn` and report success
    LogAndContinue,
}
