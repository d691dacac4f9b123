//! Record id generation
//!
//! The store never invents ids; form actions ask an [`IdGenerator`] for one
//! before saving. Ids look like `<prefix>-<suffix>`.

use parking_lot::Mutex;
use uuid::Uuid;

/// Source of fresh record ids
///
/// Implementations must never hand out the same id twice for the same
/// prefix within a process.
pub trait IdGenerator: Send + Sync {
    /// Produce a new id for a record whose collection uses `prefix`
    fn next_id(&self, prefix: &str) -> String;
}

/// `<prefix>-<epoch millis>` ids, strictly increasing
///
/// When two ids are requested within the same millisecond (or the wall
/// clock steps backwards) the suffix is bumped past the last one issued,
/// so rapid successive creates never collide.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: Mutex<i64>,
}

impl TimestampIdGenerator {
    /// Create a generator with no ids issued yet
    pub fn new() -> Self {
        Self::default()
    }

    fn next_suffix(&self, now_millis: i64) -> i64 {
        let mut last = self.last.lock();
        let next = if now_millis > *last { now_millis } else { *last + 1 };
        *last = next;
        next
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let suffix = self.next_suffix(chrono::Utc::now().timestamp_millis());
        format!("{}-{}", prefix, suffix)
    }
}

/// `<prefix>-<uuid v4>` ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}
