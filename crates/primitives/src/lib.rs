//! Primitives layer for pilgrimdesk
//!
//! This crate implements the overlay store: a code-defined seed list merged
//! with user records persisted in a single storage slot per collection.
//!
//! Stores are stateless facades over a shared `SlotStorage` backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod overlay;

// Re-exports
pub use overlay::OverlayStore;
