//! Batch stages operating on part image files

/// Quarter-turn rotation of part images
pub mod rotator;
/// Two-stage slice-then-rotate sequencing
pub mod runner;
/// Cutting the composite sheet into part images
pub mod slicer;

pub use rotator::{RotateReport, RotateTarget, Rotation, Rotator};
pub use runner::{Pipeline, PipelineReport, Silent, Stage, StageObserver};
pub use slicer::{SliceReport, Slicer};
