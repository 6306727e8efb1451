//! Experiment Record Schema
//!
//! This module provides the domain records for the laboratory: one record
//! type per motion model, plus the [`Experiment`] tagged union the store
//! persists.
//!
//! ## Schema Overview
//!
//! ```text
//! Experiment (kind tag) ──┬── UniformMotionExperiment   [velocity, distance, time]
//!                         ├── ProjectileMotionExperiment [v0, angle, gravity → range, height, flight time]
//!                         └── FreeFallExperiment         [v0, height, gravity]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use physilab::experiment::{Experiment, ExperimentKind, UniformMotionExperiment};
//!
//! let candidate = UniformMotionExperiment::builder(1, "cart on rail")
//!     .velocity(10.0)
//!     .time(5.0)
//!     .build();
//!
//! let record = Experiment::UniformMotion(candidate);
//! assert_eq!(record.kind(), ExperimentKind::UniformMotion);
//! assert_eq!(record.id(), 1);
//! ```

mod free_fall;
mod projectile;
mod record;
mod uniform_motion;

pub use free_fall::{FreeFallExperiment, FreeFallExperimentBuilder};
pub use projectile::{ProjectileMotionExperiment, ProjectileMotionExperimentBuilder};
pub use record::{Experiment, ExperimentKind};
pub use uniform_motion::{UniformMotionExperiment, UniformMotionExperimentBuilder};

/// Standard gravitational acceleration in m/s².
pub const STANDARD_GRAVITY: f64 = 9.8;
