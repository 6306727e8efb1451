//! Persistence backends for the experiment store
//!
//! The store is a whole-collection resource: `load` reads everything,
//! `save` replaces everything. There are no partial updates, so a crash
//! between load and save loses the in-flight change but never corrupts
//! records already on disk. A single active process is assumed; concurrent
//! writers can race and lose updates.

mod memory;

pub use memory::MemoryStorage;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::experiment::{Experiment, ExperimentKind};
use crate::{Error, Result};

/// Persistence contract for the experiment collection.
pub trait Storage {
    /// Load the full collection, or an empty one if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] when a stored record carries an
    /// unrecognized kind tag, or an IO/JSON error when the backing store is
    /// unreadable.
    fn load(&self) -> Result<Vec<Experiment>>;

    /// Replace the stored collection with `experiments`.
    ///
    /// # Errors
    ///
    /// Returns an IO/JSON error when the backing store cannot be written.
    fn save(&self, experiments: &[Experiment]) -> Result<()>;
}

/// File-backed storage: one pretty-printed JSON array per store.
///
/// Each element is a flat field mapping with a `kind` discriminator and an
/// RFC 3339 `created_at` timestamp.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a storage backed by the file at `path`.
    ///
    /// The file is not touched until the first `save`; a missing file loads
    /// as an empty collection.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Experiment>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file absent, loading empty collection");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

        let mut experiments = Vec::with_capacity(raw.len());
        for item in raw {
            // Dispatch by tag before deserializing so corrupt data surfaces
            // as a typed data-integrity error, not a serde parse failure.
            let tag = item
                .get("kind")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default();
            if ExperimentKind::from_tag(tag).is_none() {
                return Err(Error::UnknownKind(tag.to_string()));
            }
            experiments.push(serde_json::from_value(item)?);
        }

        debug!(path = %self.path.display(), count = experiments.len(), "loaded store");
        Ok(experiments)
    }

    fn save(&self, experiments: &[Experiment]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(experiments)?;
        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), count = experiments.len(), "saved store");
        Ok(())
    }
}
