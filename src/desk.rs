//! Desk: every collection store wired to one storage backend
//!
//! The desk is what dashboard screens talk to. List screens call `get` and
//! filter the result themselves; form screens call `submit`, `edit`,
//! `complete` and `delete`.
//!
//! # Example
//!
//! ```ignore
//! let desk = Desk::ephemeral();
//!
//! let case = desk.submit(draft_incident)?;
//! let closed = desk.complete::<OtherIncident>(&case.id)?;
//! assert!(desk.find::<OtherIncident>(&case.id).unwrap().completed);
//! ```

use crate::config::{DeskConfig, IdScheme};
use pilgrimdesk_core::{
    now, Error, IdGenerator, Record, Result, TimestampIdGenerator, UuidIdGenerator,
};
use pilgrimdesk_primitives::OverlayStore;
use pilgrimdesk_records::{
    seed, CaseKind, CaseSummary, Completable, DeathCase, DepartureRecord, HospitalizedCase,
    OtherIncident, PortEntry, PreArrivalGroup, PublicAffairsCase, Submittable, Validate,
};
use pilgrimdesk_storage::{FileStorage, MemoryStorage, SlotStorage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const TRACE_TARGET: &str = "pilgrimdesk::desk";

/// A record type with a store on the desk
pub trait DeskCollection: Record {
    /// The desk's store for this collection
    fn store(desk: &Desk) -> &OverlayStore<Self>;
}

macro_rules! desk_collection {
    ($ty:ty, $field:ident) => {
        impl DeskCollection for $ty {
            fn store(desk: &Desk) -> &OverlayStore<Self> {
                &desk.$field
            }
        }
    };
}

desk_collection!(DeathCase, death_cases);
desk_collection!(HospitalizedCase, hospitalized_cases);
desk_collection!(OtherIncident, incidents);
desk_collection!(PreArrivalGroup, pre_arrival);
desk_collection!(PortEntry, port_entries);
desk_collection!(DepartureRecord, departures);

/// Six collection stores over a shared backend
///
/// # Thread Safety
///
/// Desk is Clone and Send + Sync. Clones share the storage backend and the
/// id generator.
#[derive(Clone)]
pub struct Desk {
    storage: Arc<dyn SlotStorage>,
    ids: Arc<dyn IdGenerator>,
    death_cases: OverlayStore<DeathCase>,
    hospitalized_cases: OverlayStore<HospitalizedCase>,
    incidents: OverlayStore<OtherIncident>,
    pre_arrival: OverlayStore<PreArrivalGroup>,
    port_entries: OverlayStore<PortEntry>,
    departures: OverlayStore<DepartureRecord>,
}

impl Desk {
    /// Open a desk as described by `config`
    ///
    /// Uses `FileStorage` when `storage_dir` is set, `MemoryStorage`
    /// otherwise.
    pub fn open(config: &DeskConfig) -> Result<Self> {
        config.validate()?;
        let storage: Arc<dyn SlotStorage> = match (&config.storage_dir, config.memory_quota_bytes) {
            (Some(dir), _) => Arc::new(FileStorage::open(dir)?),
            (None, Some(quota)) => Arc::new(MemoryStorage::with_quota(quota)),
            (None, None) => Arc::new(MemoryStorage::new()),
        };
        Ok(Self::with_storage(storage, config))
    }

    /// In-memory desk with default configuration
    pub fn ephemeral() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), &DeskConfig::default())
    }

    /// Build a desk over an existing backend
    ///
    /// Seed lists are generated here, once, and stay fixed for the life of
    /// the desk. `storage_dir` and `memory_quota_bytes` are ignored.
    pub fn with_storage(storage: Arc<dyn SlotStorage>, config: &DeskConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let at = now();
        let counts = &config.seed_counts;

        let ids: Arc<dyn IdGenerator> = match config.id_scheme {
            IdScheme::Timestamp => Arc::new(TimestampIdGenerator::new()),
            IdScheme::Uuid => Arc::new(UuidIdGenerator),
        };

        let death_cases = build_store(
            &storage,
            config,
            seed::death_cases(&mut rng, at, counts.death_cases),
        );
        let hospitalized_cases = build_store(
            &storage,
            config,
            seed::hospitalized_cases(&mut rng, at, counts.hospitalized_cases),
        );
        let incidents = build_store(
            &storage,
            config,
            seed::incidents(&mut rng, at, counts.incidents),
        );
        let pre_arrival = build_store(
            &storage,
            config,
            seed::pre_arrival_groups(&mut rng, at, counts.pre_arrival),
        );
        let port_entries = build_store(
            &storage,
            config,
            seed::port_entries(&mut rng, at, counts.port_entries),
        );
        let departures = build_store(&storage, config, seed::departures(&mut rng, counts.departures));

        tracing::info!(
            target: TRACE_TARGET,
            merge_policy = ?config.merge_policy,
            write_failure = ?config.write_failure,
            "desk opened"
        );

        Self {
            storage,
            ids,
            death_cases,
            hospitalized_cases,
            incidents,
            pre_arrival,
            port_entries,
            departures,
        }
    }

    /// Replace the id generator used by `submit`
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Shared storage backend
    pub fn storage(&self) -> &Arc<dyn SlotStorage> {
        &self.storage
    }

    // ========================================================================
    // Store access
    // ========================================================================

    /// Store for collection `T`
    pub fn store<T: DeskCollection>(&self) -> &OverlayStore<T> {
        T::store(self)
    }

    /// Merged records of collection `T`
    pub fn get<T: DeskCollection>(&self) -> Vec<T> {
        self.store::<T>().get()
    }

    /// Find a record of collection `T` by id
    pub fn find<T: DeskCollection>(&self, id: &str) -> Option<T> {
        self.store::<T>().find(id)
    }

    /// Delete an overlay record of collection `T`
    ///
    /// Returns true if a record was removed. Seed records are never removed.
    pub fn delete<T: DeskCollection>(&self, id: &str) -> Result<bool> {
        self.store::<T>().delete(id)
    }

    // ========================================================================
    // Form actions
    // ========================================================================

    /// Create a record from a filled-in form
    ///
    /// Checks required fields, assigns a fresh id and creation stamp, then
    /// saves. Whatever id the draft carried is replaced.
    ///
    /// # Returns
    ///
    /// The record as saved
    pub fn submit<T: DeskCollection + Submittable>(&self, mut draft: T) -> Result<T> {
        draft.validate()?;
        draft.stamp(self.ids.next_id(T::ID_PREFIX), now());
        self.store::<T>().save(draft.clone())?;
        tracing::debug!(target: TRACE_TARGET, collection = T::COLLECTION, id = draft.id(), "record submitted");
        Ok(draft)
    }

    /// Save an edited record
    ///
    /// Under the default merge policy edits to seed records are accepted
    /// but do not show up in later reads.
    pub fn edit<T: DeskCollection + Validate>(&self, record: T) -> Result<()> {
        record.validate()?;
        self.store::<T>().save(record)
    }

    /// Run the "complete" action on a case
    ///
    /// Marks the case completed now and saves it.
    ///
    /// # Returns
    ///
    /// The updated record, as the dashboard shows it right after the click.
    /// Under `MergePolicy::SeedWins` a completed seed case reads back as
    /// open on the next `get`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id.
    pub fn complete<T: DeskCollection + Completable>(&self, id: &str) -> Result<T> {
        let store = self.store::<T>();
        let mut record = store.find(id).ok_or_else(|| Error::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        })?;
        record.mark_completed(now());
        store.save(record.clone())?;
        Ok(record)
    }

    /// Change a port entry's status, touching `updatedAt`
    pub fn set_port_entry_status(&self, id: &str, status: &str) -> Result<PortEntry> {
        let mut entry = self.find::<PortEntry>(id).ok_or_else(|| Error::NotFound {
            collection: PortEntry::COLLECTION,
            id: id.to_string(),
        })?;
        entry.set_status(status, now());
        self.port_entries.save(entry.clone())?;
        Ok(entry)
    }

    // ========================================================================
    // Public affairs views
    // ========================================================================

    /// All public affairs cases: deaths, then hospitalizations, then incidents
    pub fn public_affairs_cases(&self) -> Vec<PublicAffairsCase> {
        let mut cases: Vec<PublicAffairsCase> = Vec::new();
        cases.extend(self.death_cases.get().into_iter().map(Into::into));
        cases.extend(self.hospitalized_cases.get().into_iter().map(Into::into));
        cases.extend(self.incidents.get().into_iter().map(Into::into));
        cases
    }

    /// Open/completed counts for one case kind
    pub fn case_summary(&self, kind: CaseKind) -> CaseSummary {
        match kind {
            CaseKind::Death => CaseSummary::tally(&self.death_cases.get()),
            CaseKind::Hospitalized => CaseSummary::tally(&self.hospitalized_cases.get()),
            CaseKind::Incident => CaseSummary::tally(&self.incidents.get()),
        }
    }
}

fn build_store<T: Record>(
    storage: &Arc<dyn SlotStorage>,
    config: &DeskConfig,
    seed_records: Vec<T>,
) -> OverlayStore<T> {
    OverlayStore::new(Arc::clone(storage), seed_records)
        .with_merge_policy(config.merge_policy)
        .with_write_failure_policy(config.write_failure)
}
