//! Record trait shared by every collection
//!
//! A collection is identified by the storage key its overlay slot lives
//! under. Each record type names its collection and the prefix its ids
//! carry (`death-1`, `incident-1718000000000`, ...).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// UTC instant, RFC 3339 on the wire
pub type Timestamp = DateTime<Utc>;

/// Current time as a [`Timestamp`]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A record stored in an overlay collection
///
/// Identity is the `id` string alone. Two records with equal ids are the
/// same record regardless of their other fields.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key of the collection's overlay slot
    const COLLECTION: &'static str;

    /// Prefix used for seed ids and generated ids
    const ID_PREFIX: &'static str;

    /// The record's identity
    fn id(&self) -> &str;
}

/// Seed id for position `index` (1-based) in a collection
///
/// ```
/// assert_eq!(pilgrimdesk_core::seed_id("death", 3), "death-3");
/// ```
pub fn seed_id(prefix: &str, index: usize) -> String {
    format!("{}-{}", prefix, index)
}
