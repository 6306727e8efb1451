//! Uniform Motion Record - constant-velocity experiment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform rectilinear motion experiment.
///
/// The three physical quantities relate by `distance = velocity * time`.
/// Each is either a known value or explicitly unknown (`None`); at most one
/// may be unknown when the record is handed to the laboratory, which infers
/// the missing quantity before persisting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UniformMotionExperiment {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    /// Velocity in m/s.
    velocity: Option<f64>,
    /// Distance in metres.
    distance: Option<f64>,
    /// Time in seconds.
    time: Option<f64>,
}

impl UniformMotionExperiment {
    /// Create a new record with all three quantities unknown.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the experiment
    /// * `name` - Human-readable name for the experiment
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            velocity: None,
            distance: None,
            time: None,
        }
    }

    /// Create a builder for constructing a record with known quantities.
    #[must_use]
    pub fn builder(id: i64, name: impl Into<String>) -> UniformMotionExperimentBuilder {
        UniformMotionExperimentBuilder::new(id, name)
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

    /// Get the velocity in m/s, if known.
    #[must_use]
    pub const fn velocity(&self) -> Option<f64> {
        self.velocity
    }

    /// Get the distance in metres, if known.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Get the time in seconds, if known.
    #[must_use]
    pub const fn time(&self) -> Option<f64> {
        self.time
    }

    /// Number of quantities still unknown.
    #[must_use]
    pub const fn unknown_count(&self) -> usize {
        self.velocity.is_none() as usize
            + self.distance.is_none() as usize
            + self.time.is_none() as usize
    }

    /// Whether all three quantities are known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unknown_count() == 0
    }

    pub(crate) fn set_velocity(&mut self, metres_per_second: f64) {
        self.velocity = Some(metres_per_second);
    }

    pub(crate) fn set_distance(&mut self, metres: f64) {
        self.distance = Some(metres);
    }

    pub(crate) fn set_time(&mut self, seconds: f64) {
        self.time = Some(seconds);
    }
}

/// Builder for `UniformMotionExperiment`.
#[derive(Debug)]
pub struct UniformMotionExperimentBuilder {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    velocity: Option<f64>,
    distance: Option<f64>,
    time: Option<f64>,
}

impl UniformMotionExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            velocity: None,
            distance: None,
            time: None,
        }
    }

    /// Set the velocity in m/s.
    #[must_use]
    pub const fn velocity(mut self, metres_per_second: f64) -> Self {
        self.velocity = Some(metres_per_second);
        self
    }

    /// Set the distance in metres.
    #[must_use]
    pub const fn distance(mut self, metres: f64) -> Self {
        self.distance = Some(metres);
        self
    }

    /// Set the time in seconds.
    #[must_use]
    pub const fn time(mut self, seconds: f64) -> Self {
        self.time = Some(seconds);
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the `UniformMotionExperiment`.
    #[must_use]
    pub fn build(self) -> UniformMotionExperiment {
        UniformMotionExperiment {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            velocity: self.velocity,
            distance: self.distance,
            time: self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_fully_unknown() {
        let record = UniformMotionExperiment::new(1, "empty");
        assert_eq!(record.unknown_count(), 3);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_builder_quantities() {
        let record = UniformMotionExperiment::builder(2, "two known")
            .velocity(10.0)
            .time(5.0)
            .build();

        assert_eq!(record.velocity(), Some(10.0));
        assert_eq!(record.time(), Some(5.0));
        assert_eq!(record.distance(), None);
        assert_eq!(record.unknown_count(), 1);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = UniformMotionExperiment::builder(3, "full")
            .velocity(10.0)
            .time(5.0)
            .distance(50.0)
            .build();

        let json = serde_json::to_string(&record).expect("serialization failed");
        let deserialized: UniformMotionExperiment =
            serde_json::from_str(&json).expect("deserialization failed");

        assert_eq!(record, deserialized);
    }
}
