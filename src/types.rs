//! Public types for the pilgrimdesk API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Errors and policies
// ============================================================================

pub use pilgrimdesk_core::{Error, Result};
pub use pilgrimdesk_core::{MergePolicy, WriteFailurePolicy};

// Identity and time
pub use pilgrimdesk_core::{IdGenerator, Record, Timestamp, TimestampIdGenerator, UuidIdGenerator};

// ============================================================================
// Storage
// ============================================================================

pub use pilgrimdesk_storage::{FileStorage, MemoryStorage, SlotStorage};

// Overlay store
pub use pilgrimdesk_primitives::OverlayStore;

// ============================================================================
// Records
// ============================================================================

pub use pilgrimdesk_records::{DeathCase, HospitalizedCase, OtherIncident};
pub use pilgrimdesk_records::{DepartureRecord, PortEntry, PreArrivalGroup};
pub use pilgrimdesk_records::{CaseKind, CaseSummary, Completable, PublicAffairsCase};
pub use pilgrimdesk_records::{SeedCounts, Submittable, Validate};

// Option lists and seed generators
pub use pilgrimdesk_records::{options, seed};
