//! # PhysiLab: Physics Experiment Laboratory
//!
//! PhysiLab models simple physics experiments (uniform rectilinear motion,
//! projectile motion, free fall), persists them to a flat JSON file, and
//! exposes register/list/delete operations through the [`Laboratory`]
//! service. Given a partially-specified uniform motion experiment the
//! service infers the missing quantity from `distance = velocity * time`,
//! validates physical plausibility, and enforces identifier uniqueness.
//!
//! The store is single-writer with whole-file-replace semantics: each
//! operation loads the full collection, mutates it in memory and overwrites
//! the file. A crash mid-operation loses that update but never corrupts
//! existing records.
//!
//! ## Example Usage
//!
//! ```rust
//! use physilab::experiment::UniformMotionExperiment;
//! use physilab::storage::MemoryStorage;
//! use physilab::Laboratory;
//!
//! let lab = Laboratory::new(MemoryStorage::new());
//!
//! let candidate = UniformMotionExperiment::builder(1, "cart on rail")
//!     .velocity(10.0)
//!     .time(5.0)
//!     .build();
//!
//! let completed = lab.register_uniform_motion(candidate)?;
//! assert_eq!(completed.distance(), Some(50.0));
//!
//! lab.delete(1)?;
//! assert!(lab.list()?.is_empty());
//! # Ok::<(), physilab::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::float_cmp)] // divisor checks compare against exact zero

pub mod error;
pub mod experiment;
pub mod service;
pub mod storage;

pub use error::{Error, ErrorCategory, Result};
pub use service::Laboratory;
