//! Desk configuration
//!
//! Loaded from `pilgrimdesk.toml`. Every field is optional; an empty file
//! yields an in-memory desk with the historical merge behavior.
//!
//! ```toml
//! storage_dir = "/var/lib/pilgrimdesk"
//! merge_policy = "seed_wins"        # or "overlay_wins"
//! write_failure = "propagate"       # or "log_and_continue"
//! id_scheme = "timestamp"           # or "uuid"
//! rng_seed = 42
//!
//! [seed_counts]
//! incidents = 20
//! ```

use pilgrimdesk_core::{Error, MergePolicy, Result, WriteFailurePolicy};
use pilgrimdesk_records::SeedCounts;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up by [`DeskConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "pilgrimdesk.toml";

/// How form actions generate record ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// `<prefix>-<epoch millis>`
    #[default]
    Timestamp,
    /// `<prefix>-<uuid v4>`
    Uuid,
}

/// Desk configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    /// Directory for slot files; `None` keeps slots in memory
    pub storage_dir: Option<PathBuf>,
    /// Byte quota for in-memory storage
    pub memory_quota_bytes: Option<usize>,
    /// Seed/overlay precedence on id collision
    pub merge_policy: MergePolicy,
    /// Handling of rejected writes
    pub write_failure: WriteFailurePolicy,
    /// Id format for submitted records
    pub id_scheme: IdScheme,
    /// Fixed RNG seed for reproducible seed data
    pub rng_seed: Option<u64>,
    /// Seed list sizes
    pub seed_counts: SeedCounts,
}

impl DeskConfig {
    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: DeskConfig = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load `<dir>/pilgrimdesk.toml`, storing slots in `dir`
    ///
    /// A missing config file yields defaults. `storage_dir` is forced to
    /// `dir` either way.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            Self::load(&path)?
        } else {
            Self::default()
        };
        config.storage_dir = Some(dir.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reject combinations that cannot be honored
    pub fn validate(&self) -> Result<()> {
        if self.storage_dir.is_some() && self.memory_quota_bytes.is_some() {
            return Err(Error::Config(
                "memory_quota_bytes only applies to in-memory storage".into(),
            ));
        }
        Ok(())
    }
}
