//! Projectile Motion Record - ballistic launch experiment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::STANDARD_GRAVITY;

/// Projectile motion experiment.
///
/// Input quantities are the launch parameters; the trajectory fields
/// (maximum range, maximum height, flight time) start at zero and are filled
/// in by the laboratory from closed-form kinematics at registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectileMotionExperiment {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    /// Launch velocity in m/s.
    initial_velocity: f64,
    /// Launch angle in degrees above the horizontal.
    angle: f64,
    /// Gravitational acceleration in m/s².
    gravity: f64,
    /// Horizontal range in metres.
    max_range: f64,
    /// Apex height in metres.
    max_height: f64,
    /// Total flight time in seconds.
    flight_time: f64,
}

impl ProjectileMotionExperiment {
    /// Create a new record with standard gravity and an uncomputed trajectory.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the experiment
    /// * `name` - Human-readable name for the experiment
    /// * `initial_velocity` - Launch velocity in m/s
    /// * `angle` - Launch angle in degrees
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, initial_velocity: f64, angle: f64) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            initial_velocity,
            angle,
            gravity: STANDARD_GRAVITY,
            max_range: 0.0,
            max_height: 0.0,
            flight_time: 0.0,
        }
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(
        id: i64,
        name: impl Into<String>,
        initial_velocity: f64,
        angle: f64,
    ) -> ProjectileMotionExperimentBuilder {
        ProjectileMotionExperimentBuilder::new(id, name, initial_velocity, angle)
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

    /// Get the launch velocity in m/s.
    #[must_use]
    pub const fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Get the launch angle in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Get the gravitational acceleration in m/s².
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Get the horizontal range in metres.
    #[must_use]
    pub const fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Get the apex height in metres.
    #[must_use]
    pub const fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Get the total flight time in seconds.
    #[must_use]
    pub const fn flight_time(&self) -> f64 {
        self.flight_time
    }

    pub(crate) fn set_trajectory(&mut self, max_range: f64, max_height: f64, flight_time: f64) {
        self.max_range = max_range;
        self.max_height = max_height;
        self.flight_time = flight_time;
    }
}

/// Builder for `ProjectileMotionExperiment`.
#[derive(Debug)]
pub struct ProjectileMotionExperimentBuilder {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    initial_velocity: f64,
    angle: f64,
    gravity: f64,
}

impl ProjectileMotionExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, initial_velocity: f64, angle: f64) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            initial_velocity,
            angle,
            gravity: STANDARD_GRAVITY,
        }
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

    /// Build the `ProjectileMotionExperiment`.
    #[must_use]
    pub fn build(self) -> ProjectileMotionExperiment {
        ProjectileMotionExperiment {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            initial_velocity: self.initial_velocity,
            angle: self.angle,
            gravity: self.gravity,
            max_range: 0.0,
            max_height: 0.0,
            flight_time: 0.0,
        }
    }
}
