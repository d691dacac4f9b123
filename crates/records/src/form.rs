//! Form-side contracts: presence validation and submit stamping
//!
//! The dashboard validates nothing beyond "required field is filled in".
//! A string is missing when it is empty or whitespace only; a count is
//! missing when it is zero; a list is missing when it is empty.

use pilgrimdesk_core::{Error, Record, Result, Timestamp};

/// Presence checks run before a form submits
pub trait Validate: Record {
    /// Return the first missing required field, if any
    fn validate(&self) -> Result<()>;
}

/// Records created through a submit action
pub trait Submittable: Validate {
    /// Assign the generated id and creation stamp
    ///
    /// Record shapes without a `createdAt` field only take the id.
    fn stamp(&mut self, id: String, at: Timestamp);
}

/// Fail with `MissingField` if `value` is blank
pub(crate) fn require_text<R: Record>(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(missing::<R>(field));
    }
    Ok(())
}

/// Fail with `MissingField` if `value` is zero
pub(crate) fn require_count<R: Record>(field: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(missing::<R>(field));
    }
    Ok(())
}

/// Fail with `MissingField` if `values` is empty or all blank
pub(crate) fn require_list<R: Record>(field: &'static str, values: &[String]) -> Result<()> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(missing::<R>(field));
    }
    Ok(())
}

fn missing<R: Record>(field: &'static str) -> Error {
    Error::MissingField {
        collection: R::COLLECTION,
        field,
    }
}
