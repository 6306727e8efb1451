//! Free Fall Record - drop-from-height experiment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::STANDARD_GRAVITY;

/// Free fall experiment.
///
/// Stored as given; the laboratory validates the quantities but derives
/// nothing from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreeFallExperiment {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    /// Initial downward velocity in m/s.
    initial_velocity: f64,
    /// Drop height in metres.
    height: f64,
    /// Gravitational acceleration in m/s².
    gravity: f64,
}

impl FreeFallExperiment {
    /// Create a new record released from rest under standard gravity.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the experiment
    /// * `name` - Human-readable name for the experiment
    /// * `height` - Drop height in metres
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, height: f64) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            initial_velocity: 0.0,
            height,
            gravity: STANDARD_GRAVITY,
        }
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(id: i64, name: impl Into<String>, height: f64) -> FreeFallExperimentBuilder {
        FreeFallExperimentBuilder::new(id, name, height)
    }

    /// Get the experiment ID.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the initial downward velocity in m/s.
    #[must_use]
    pub const fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Get the drop height in metres.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Get the gravitational acceleration in m/s².
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }
}

/// Builder for `FreeFallExperiment`.
#[derive(Debug)]
pub struct FreeFallExperimentBuilder {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    initial_velocity: f64,
    height: f64,
    gravity: f64,
}

impl FreeFallExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, height: f64) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            initial_velocity: 0.0,
            height,
            gravity: STANDARD_GRAVITY,
        }
    }

    /// Set a nonzero initial downward velocity in m/s.
    #[must_use]
    pub const fn initial_velocity(mut self, metres_per_second: f64) -> Self {
        self.initial_velocity = metres_per_second;
        self
    }

    /// Override the gravitational acceleration in m/s².
    #[must_use]
    pub const fn gravity(mut self, metres_per_second_squared: f64) -> Self {
        self.gravity = metres_per_second_squared;
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the `FreeFallExperiment`.
    #[must_use]
    pub fn build(self) -> FreeFallExperiment {
        FreeFallExperiment {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            initial_velocity: self.initial_velocity,
            height: self.height,
            gravity: self.gravity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_released_from_rest() {
        let record = FreeFallExperiment::new(1, "tower drop", 56.0);
        assert!(record.initial_velocity().abs() < f64::EPSILON);
        assert!((record.gravity() - STANDARD_GRAVITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_overrides() {
        let record = FreeFallExperiment::builder(2, "thrown down", 30.0)
            .initial_velocity(2.5)
            .gravity(9.81)
            .build();

        assert!((record.initial_velocity() - 2.5).abs() < f64::EPSILON);
        assert!((record.gravity() - 9.81).abs() < f64::EPSILON);
    }
}
