//! Overlay Conformance Test Suite
//!
//! Verifies the seed-plus-overlay contract across every collection the
//! desk exposes.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Merge properties, checked for all six collections
//! - **Tier 2**: Dashboard scenarios (case lifecycle, incident roundtrip)
//! - **Tier 3**: Seed shadowing, the historical edit-loss behavior
//! - **Tier 4**: Backends and failure handling
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test overlay_conformance
//! ```

// Test modules
mod test_utils;

mod tier1_model_check;

// Tier 2: Scenarios
mod tier2_scenarios;


// Tier 4: Backends and failures
mod tier4_file_backend;
mod tier4_write_failures;
