//! Core types for pilgrimdesk
//!
//! This crate defines the pieces every other crate agrees on:
//! - Error: workspace-wide error enum and `Result` alias
//! - Record: trait implemented by each collection's record type
//! - MergePolicy / WriteFailurePolicy: overlay store behavior switches
//! - IdGenerator: capability handed to form actions for fresh ids

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod policy;
pub mod record;

pub use error::{Error, Result};
pub use id::{IdGenerator, TimestampIdGenerator, UuidIdGenerator};
pub use policy::{MergePolicy, WriteFailurePolicy};
pub use record::{now, seed_id, Record, Timestamp};
