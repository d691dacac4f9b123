//! Pilgrimdesk: record store for pilgrimage logistics dashboards
//!
//! Each collection (death cases, hospitalized cases, other incidents,
//! pre-arrival groups, port entries, departure records) is a fixed seed
//! list merged with user records persisted in one storage slot.
//!
//! # Quick Start
//!
//! ```ignore
//! use pilgrimdesk::{Desk, DeskConfig, OtherIncident};
//!
//! let desk = Desk::open(&DeskConfig::load_from_dir("/var/lib/pilgrimdesk")?)?;
//! let incidents = desk.get::<OtherIncident>();
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod desk;
pub mod types;

pub use config::{DeskConfig, IdScheme, CONFIG_FILE_NAME};
pub use desk::{Desk, DeskCollection};
pub use types::*;
