//! Shared fixtures for the conformance suite

use pilgrimdesk::*;
use std::sync::Arc;

/// Fixed RNG seed so seed lists are identical across runs
pub const RNG_SEED: u64 = 2024;

/// Install a fmt subscriber writing to the test harness (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Config with a fixed RNG seed and the given merge policy
pub fn config(policy: MergePolicy) -> DeskConfig {
    DeskConfig {
        rng_seed: Some(RNG_SEED),
        merge_policy: policy,
        ..DeskConfig::default()
    }
}

/// In-memory desk plus a handle on its backend for raw slot access
pub fn memory_desk(policy: MergePolicy) -> (Arc<MemoryStorage>, Desk) {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let desk = Desk::with_storage(storage.clone(), &config(policy));
    (storage, desk)
}

/// Ids of a record list, in order
pub fn ids<T: Record>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

/// Copy of `record` carrying a different id
pub trait WithId: Record {
    fn with_id(&self, id: &str) -> Self;
}

macro_rules! with_id {
    ($($ty:ty),*) => {
        $(impl WithId for $ty {
            fn with_id(&self, id: &str) -> Self {
                let mut copy = self.clone();
                copy.id = id.to_string();
                copy
            }
        })*
    };
}

with_id!(
    DeathCase,
    HospitalizedCase,
    OtherIncident,
    PreArrivalGroup,
    PortEntry,
    DepartureRecord
);
