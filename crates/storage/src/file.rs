//! Directory-backed slot storage
//!
//! Each slot lives in its own file, `<root>/<key>.json`. Writes land in a
//! uniquely named sibling temp file, are synced, then renamed over the
//! target, so a crash mid-write leaves either the old or the new value,
//! never a torn one. Concurrent writers never share a temp file; the last
//! rename wins.

use crate::traits::SlotStorage;
use pilgrimdesk_core::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const SLOT_EXTENSION: &str = "json";

/// Slot storage rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        tracing::debug!(target: "pilgrimdesk::storage", root = %root.display(), "opened file storage");
        Ok(Self { root })
    }

    /// Directory holding the slot files
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_slot_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

/// Check that a slot key maps onto a single plain file name
///
/// Keys are limited to ASCII letters, digits, `_`, `-` and `.`, and may not
/// start with a dot. This rules out path separators and parent references.
pub fn validate_slot_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidSlotKey(key.to_string()))
    }
}

impl SlotStorage for FileStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::storage(key, err)),
        }
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        // Dropped (and removed) on any error before persist
        let mut tmp = tempfile::Builder::new()
            .prefix(".")
            .suffix(".tmp")
            .tempfile_in(&self.root)
            .map_err(|err| Error::storage(key, err))?;
        tmp.write_all(value.as_bytes())
            .map_err(|err| Error::storage(key, err))?;
        tmp.as_file()
            .sync_all()
            .map_err(|err| Error::storage(key, err))?;
        tmp.persist(&path)
            .map_err(|err| Error::storage(key, err.error))?;
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<bool> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(Error::storage(key, err)),
        }
    }

    fn slot_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_slot_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
