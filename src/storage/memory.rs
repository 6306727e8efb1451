//! In-memory storage implementation.
//!
//! Data is lost on process exit. This is the backend used by the test
//! suite and by ephemeral sessions; `JsonStorage` is the durable one.

use std::cell::RefCell;

use super::Storage;
use crate::experiment::Experiment;
use crate::Result;

/// In-memory experiment store with the same whole-collection contract as
/// the file backend.
///
/// # Example
///
/// ```rust
/// use physilab::experiment::{Experiment, FreeFallExperiment};
/// use physilab::storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new();
/// let record = Experiment::FreeFall(FreeFallExperiment::new(1, "drop", 10.0));
/// storage.save(&[record])?;
/// assert_eq!(storage.load()?.len(), 1);
/// # Ok::<(), physilab::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    experiments: RefCell<Vec<Experiment>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `experiments`.
    #[must_use]
    pub fn with_experiments(experiments: Vec<Experiment>) -> Self {
        Self {
            experiments: RefCell::new(experiments),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.borrow().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Experiment>> {
        Ok(self.experiments.borrow().clone())
    }

    fn save(&self, experiments: &[Experiment]) -> Result<()> {
        *self.experiments.borrow_mut() = experiments.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::UniformMotionExperiment;

    #[test]
    fn test_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.load().expect("load failed").is_empty());
    }

    #[test]
    fn test_save_replaces_collection() {
        let storage = MemoryStorage::new();
        let a = Experiment::UniformMotion(
            UniformMotionExperiment::builder(1, "a")
                .velocity(1.0)
                .time(1.0)
                .distance(1.0)
                .build(),
        );
        let b = Experiment::UniformMotion(
            UniformMotionExperiment::builder(2, "b")
                .velocity(2.0)
                .time(2.0)
                .distance(4.0)
                .build(),
        );

        storage.save(&[a.clone(), b.clone()]).expect("save failed");
        assert_eq!(storage.len(), 2);

        storage.save(&[b]).expect("save failed");
        let loaded = storage.load().expect("load failed");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), 2);
    }
}
