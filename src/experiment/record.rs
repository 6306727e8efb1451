//! Experiment union and kind tags
//!
//! The store persists a flat JSON mapping per record with a `kind`
//! discriminator; the union here is internally tagged so serialization
//! produces exactly that shape.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FreeFallExperiment, ProjectileMotionExperiment, UniformMotionExperiment};

/// Closed set of motion-model tags.
///
/// The persistence layer matches stored `kind` fields against these tags
/// exhaustively and fails closed on anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    /// Constant-velocity rectilinear motion.
    UniformMotion,
    /// Ballistic launch at an angle.
    ProjectileMotion,
    /// Vertical drop under gravity.
    FreeFall,
}

impl ExperimentKind {
    /// All recognized kinds.
    pub const ALL: [Self; 3] = [Self::UniformMotion, Self::ProjectileMotion, Self::FreeFall];

    /// The wire tag written into the `kind` field.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::UniformMotion => "uniform_motion",
            Self::ProjectileMotion => "projectile_motion",
            Self::FreeFall => "free_fall",
        }
    }

    /// Parse a wire tag, returning `None` for unrecognized input.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UniformMotion => "Uniform Motion",
            Self::ProjectileMotion => "Projectile Motion",
            Self::FreeFall => "Free Fall",
        };
        f.pad(name)
    }
}

/// A persisted experiment of any kind.
///
/// Serializes as the record's flat field mapping plus a `kind` discriminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Experiment {
    /// Constant-velocity rectilinear motion.
    UniformMotion(UniformMotionExperiment),
    /// Ballistic launch at an angle.
    ProjectileMotion(ProjectileMotionExperiment),
    /// Vertical drop under gravity.
    FreeFall(FreeFallExperiment),
}

impl Experiment {
    /// Get the experiment ID.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::UniformMotion(e) => e.id(),
            Self::ProjectileMotion(e) => e.id(),
            Self::FreeFall(e) => e.id(),
        }
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UniformMotion(e) => e.name(),
            Self::ProjectileMotion(e) => e.name(),
            Self::FreeFall(e) => e.name(),
        }
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::UniformMotion(e) => e.created_at(),
            Self::ProjectileMotion(e) => e.created_at(),
            Self::FreeFall(e) => e.created_at(),
        }
    }

    /// Get the kind tag for this record.
    #[must_use]
    pub const fn kind(&self) -> ExperimentKind {
        match self {
            Self::UniformMotion(_) => ExperimentKind::UniformMotion,
            Self::ProjectileMotion(_) => ExperimentKind::ProjectileMotion,
            Self::FreeFall(_) => ExperimentKind::FreeFall,
        }
    }

    /// Headline result for display: the distance, range, or drop height.
    #[must_use]
    pub fn result_summary(&self) -> String {
        match self {
            Self::UniformMotion(e) => e
                .distance()
                .map_or_else(|| "-".to_string(), |d| format!("d = {d} m")),
            Self::ProjectileMotion(e) => format!("range = {:.2} m", e.max_range()),
            Self::FreeFall(e) => format!("h = {} m", e.height()),
        }
    }
}
