//! Laboratory service - validation, algebraic inference, persistence
//!
//! All computation and validation lives here; the storage backend only
//! translates collections to and from durable form. Every operation is a
//! load-modify-save over the whole store, so a failed validation always
//! leaves the store untouched.

use tracing::{debug, info};

use crate::experiment::{
    Experiment, FreeFallExperiment, ProjectileMotionExperiment, UniformMotionExperiment,
};
use crate::storage::Storage;
use crate::{Error, Result};

/// Coordinates validation, physics computation and persistence.
///
/// Build exactly one per process from a storage backend; there is no hidden
/// global instance.
///
/// # Example
///
/// ```rust
/// use physilab::experiment::UniformMotionExperiment;
/// use physilab::storage::MemoryStorage;
/// use physilab::Laboratory;
///
/// let lab = Laboratory::new(MemoryStorage::new());
///
/// let candidate = UniformMotionExperiment::builder(1, "cart on rail")
///     .velocity(10.0)
///     .time(5.0)
///     .build();
///
/// let completed = lab.register_uniform_motion(candidate)?;
/// assert_eq!(completed.distance(), Some(50.0));
/// # Ok::<(), physilab::Error>(())
/// ```
#[derive(Debug)]
pub struct Laboratory<S: Storage> {
    storage: S,
}

impl<S: Storage> Laboratory<S> {
    /// Create a laboratory backed by `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get the underlying storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a uniform rectilinear motion experiment, inferring the
    /// missing quantity.
    ///
    /// At most one of velocity, distance and time may be unknown; the
    /// missing one is derived from `distance = velocity * time`. When all
    /// three are provided the record is stored as-is, with no consistency
    /// check between them.
    ///
    /// # Errors
    ///
    /// In precedence order:
    /// - [`Error::InsufficientData`] if two or more quantities are unknown
    /// - [`Error::DuplicateId`] if the identifier is already stored
    /// - [`Error::InvalidId`] if the identifier is not positive
    /// - [`Error::NegativeValue`] if any provided quantity is negative
    /// - [`Error::DivisionByZero`] if deriving time with zero velocity or
    ///   velocity with zero time
    pub fn register_uniform_motion(
        &self,
        mut candidate: UniformMotionExperiment,
    ) -> Result<UniformMotionExperiment> {
        let unknown = candidate.unknown_count();
        if unknown > 1 {
            return Err(Error::InsufficientData { missing: unknown });
        }

        let mut experiments = self.storage.load()?;
        Self::check_identifier(&experiments, candidate.id())?;

        for value in [candidate.velocity(), candidate.distance(), candidate.time()]
            .into_iter()
            .flatten()
        {
            if value < 0.0 {
                return Err(Error::NegativeValue(value));
            }
        }

        match (candidate.velocity(), candidate.distance(), candidate.time()) {
            (Some(velocity), None, Some(time)) => {
                candidate.set_distance(velocity * time);
            }
            (Some(velocity), Some(distance), None) => {
                if velocity == 0.0 {
                    return Err(Error::DivisionByZero("time"));
                }
                candidate.set_time(distance / velocity);
            }
            (None, Some(distance), Some(time)) => {
                if time == 0.0 {
                    return Err(Error::DivisionByZero("velocity"));
                }
                candidate.set_velocity(distance / time);
            }
            // All three provided: stored as-is, free-form input accepted.
            (Some(_), Some(_), Some(_)) => {}
            // Unreachable after the insufficient-data check above, but the
            // match stays total rather than panicking on a broken invariant.
            _ => return Err(Error::InsufficientData { missing: unknown }),
        }

        debug_assert!(candidate.is_complete());
        info!(id = candidate.id(), "registered uniform motion experiment");

        experiments.push(Experiment::UniformMotion(candidate.clone()));
        self.storage.save(&experiments)?;
        Ok(candidate)
    }

    /// Register a projectile motion experiment, computing its trajectory
    /// from closed-form kinematics.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] / [`Error::InvalidId`] on identifier conflicts
    /// - [`Error::InvalidAngle`] if the launch angle is outside [0, 90]
    /// - [`Error::NegativeValue`] if the launch velocity or gravity is negative
    /// - [`Error::DivisionByZero`] if gravity is zero
    pub fn register_projectile(
        &self,
        mut candidate: ProjectileMotionExperiment,
    ) -> Result<ProjectileMotionExperiment> {
        let mut experiments = self.storage.load()?;
        Self::check_identifier(&experiments, candidate.id())?;

        let angle = candidate.angle();
        if !(0.0..=90.0).contains(&angle) {
            return Err(Error::InvalidAngle(angle));
        }
        let velocity = candidate.initial_velocity();
        if velocity < 0.0 {
            return Err(Error::NegativeValue(velocity));
        }
        let gravity = candidate.gravity();
        if gravity < 0.0 {
            return Err(Error::NegativeValue(gravity));
        }
        if gravity == 0.0 {
            return Err(Error::DivisionByZero("flight time"));
        }

        let radians = angle.to_radians();
        let vertical = velocity * radians.sin();
        let flight_time = 2.0 * vertical / gravity;
        let max_range = velocity * velocity * (2.0 * radians).sin() / gravity;
        let max_height = vertical * vertical / (2.0 * gravity);
        candidate.set_trajectory(max_range, max_height, flight_time);

        info!(id = candidate.id(), "registered projectile experiment");

        experiments.push(Experiment::ProjectileMotion(candidate.clone()));
        self.storage.save(&experiments)?;
        Ok(candidate)
    }

    /// Register a free fall experiment. Validated but stored as given.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] / [`Error::InvalidId`] on identifier conflicts
    /// - [`Error::NegativeValue`] if the height, velocity or gravity is negative
    /// - [`Error::DivisionByZero`] if gravity is zero
    pub fn register_free_fall(&self, candidate: FreeFallExperiment) -> Result<FreeFallExperiment> {
        let mut experiments = self.storage.load()?;
        Self::check_identifier(&experiments, candidate.id())?;

        for value in [
            candidate.height(),
            candidate.initial_velocity(),
            candidate.gravity(),
        ] {
            if value < 0.0 {
                return Err(Error::NegativeValue(value));
            }
        }
        if candidate.gravity() == 0.0 {
            return Err(Error::DivisionByZero("fall time"));
        }

        info!(id = candidate.id(), "registered free fall experiment");

        experiments.push(Experiment::FreeFall(candidate.clone()));
        self.storage.save(&experiments)?;
        Ok(candidate)
    }

    /// Delete the experiment with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no stored record matches.
    pub fn delete(&self, id: i64) -> Result<()> {
        let experiments = self.storage.load()?;
        let before = experiments.len();

        let remaining: Vec<Experiment> = experiments
            .into_iter()
            .filter(|experiment| experiment.id() != id)
            .collect();

        if remaining.len() == before {
            return Err(Error::NotFound(id));
        }

        self.storage.save(&remaining)?;
        info!(id, "deleted experiment");
        Ok(())
    }

    /// List the full stored collection.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn list(&self) -> Result<Vec<Experiment>> {
        let experiments = self.storage.load()?;
        debug!(count = experiments.len(), "listed experiments");
        Ok(experiments)
    }

    // Identifier preconditions shared by every register operation:
    // duplicates are checked against the live store first, then positivity.
    fn check_identifier(experiments: &[Experiment], id: i64) -> Result<()> {
        if experiments.iter().any(|experiment| experiment.id() == id) {
            return Err(Error::DuplicateId(id));
        }
        if id <= 0 {
            return Err(Error::InvalidId(id));
        }
        Ok(())
    }
}
