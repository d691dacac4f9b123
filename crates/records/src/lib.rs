//! Record types for pilgrimdesk
//!
//! - public_affairs: death cases, hospitalized cases, other incidents
//! - reception: pre-arrival groups, port entries, departure records
//! - completion: `Completable`, `PublicAffairsCase`, `CaseSummary`
//! - form: presence validation and submit stamping
//! - seed: generators for the code-defined seed lists

#![warn(clippy::all)]

pub mod completion;
pub mod form;
pub mod options;
pub mod public_affairs;
pub mod reception;
pub mod seed;

pub use completion::{CaseKind, CaseSummary, Completable, PublicAffairsCase};
pub use form::{Submittable, Validate};
pub use public_affairs::{DeathCase, HospitalizedCase, OtherIncident};
pub use reception::{DepartureRecord, PortEntry, PreArrivalGroup};
pub use seed::SeedCounts;
