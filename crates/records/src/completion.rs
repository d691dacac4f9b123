//! Case completion and the public affairs case union
//!
//! Each public affairs record carries a generic `completed` flag plus an
//! alias specific to its kind (`burialCompleted`, `discharged`, `resolved`).
//! `Completable::mark_completed` keeps all of them in step, and
//! `PublicAffairsCase` lets callers handle the three kinds exhaustively.

use crate::public_affairs::{DeathCase, HospitalizedCase, OtherIncident};
use pilgrimdesk_core::{Record, Timestamp};
use serde::{Deserialize, Serialize};

/// A record that can be closed by a "complete" action
pub trait Completable: Record {
    /// Whether the completion action has run
    fn is_completed(&self) -> bool;

    /// When the completion action ran
    fn completed_at(&self) -> Option<Timestamp>;

    /// Set `completed`, `completedAt` and the kind-specific alias
    fn mark_completed(&mut self, at: Timestamp);
}

/// Kind of public affairs case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// Pilgrim death
    Death,
    /// Pilgrim admitted to hospital
    Hospitalized,
    /// Any other incident
    Incident,
}

impl CaseKind {
    /// All kinds in dashboard order
    pub const ALL: [CaseKind; 3] = [CaseKind::Death, CaseKind::Hospitalized, CaseKind::Incident];

    /// Storage key of the kind's collection
    pub fn collection(self) -> &'static str {
        match self {
            CaseKind::Death => DeathCase::COLLECTION,
            CaseKind::Hospitalized => HospitalizedCase::COLLECTION,
            CaseKind::Incident => OtherIncident::COLLECTION,
        }
    }
}

/// Any public affairs case
#[derive(Debug, Clone, PartialEq)]
pub enum PublicAffairsCase {
    /// Death case
    Death(DeathCase),
    /// Hospitalized case
    Hospitalized(HospitalizedCase),
    /// Other incident
    Incident(OtherIncident),
}

impl PublicAffairsCase {
    /// The case's kind
    pub fn kind(&self) -> CaseKind {
        match self {
            PublicAffairsCase::Death(_) => CaseKind::Death,
            PublicAffairsCase::Hospitalized(_) => CaseKind::Hospitalized,
            PublicAffairsCase::Incident(_) => CaseKind::Incident,
        }
    }

    /// The case's id
    pub fn id(&self) -> &str {
        match self {
            PublicAffairsCase::Death(c) => c.id(),
            PublicAffairsCase::Hospitalized(c) => c.id(),
            PublicAffairsCase::Incident(c) => c.id(),
        }
    }

    /// Pilgrim name on the case
    pub fn name(&self) -> &str {
        match self {
            PublicAffairsCase::Death(c) => &c.name,
            PublicAffairsCase::Hospitalized(c) => &c.name,
            PublicAffairsCase::Incident(c) => &c.name,
        }
    }

    /// When the case was opened
    pub fn created_at(&self) -> Timestamp {
        match self {
            PublicAffairsCase::Death(c) => c.created_at,
            PublicAffairsCase::Hospitalized(c) => c.created_at,
            PublicAffairsCase::Incident(c) => c.created_at,
        }
    }

    /// Whether the case is closed
    pub fn is_completed(&self) -> bool {
        match self {
            PublicAffairsCase::Death(c) => c.is_completed(),
            PublicAffairsCase::Hospitalized(c) => c.is_completed(),
            PublicAffairsCase::Incident(c) => c.is_completed(),
        }
    }

    /// When the case was closed
    pub fn completed_at(&self) -> Option<Timestamp> {
        match self {
            PublicAffairsCase::Death(c) => c.completed_at(),
            PublicAffairsCase::Hospitalized(c) => c.completed_at(),
            PublicAffairsCase::Incident(c) => c.completed_at(),
        }
    }
}

impl From<DeathCase> for PublicAffairsCase {
    fn from(c: DeathCase) -> Self {
        PublicAffairsCase::Death(c)
    }
}

impl From<HospitalizedCase> for PublicAffairsCase {
    fn from(c: HospitalizedCase) -> Self {
        PublicAffairsCase::Hospitalized(c)
    }
}

impl From<OtherIncident> for PublicAffairsCase {
    fn from(c: OtherIncident) -> Self {
        PublicAffairsCase::Incident(c)
    }
}

/// Open/closed counts for one case kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseSummary {
    /// All cases
    pub total: usize,
    /// Cases not yet completed
    pub open: usize,
    /// Completed cases
    pub completed: usize,
}

impl CaseSummary {
    /// Count open and completed cases
    pub fn tally<'a, C: Completable + 'a>(cases: impl IntoIterator<Item = &'a C>) -> Self {
        let mut summary = CaseSummary::default();
        for case in cases {
            summary.total += 1;
            if case.is_completed() {
                summary.completed += 1;
            } else {
                summary.open += 1;
            }
        }
        summary
    }
}
