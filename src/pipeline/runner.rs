//! Slice-then-rotate sequencing and stage progress reporting

use crate::io::error::Result;
use crate::layout::sheet::SheetLayout;
use crate::pipeline::rotator::{RotateReport, RotateTarget, Rotation, Rotator};
use crate::pipeline::slicer::{SliceReport, Slicer};
use std::fmt;
use std::path::Path;

/// One of the two batch stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Cutting the composite sheet
    Slice,
    /// Rotating the part images
    Rotate,
}

impl Stage {
    /// Short lowercase label used in progress output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slice => "slice",
            Self::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives per-file progress from a running stage
pub trait StageObserver {
    /// A stage is about to visit `total` part files
    fn stage_started(&mut self, stage: Stage, total: usize);

    /// A part file has been written, rotated, or found missing
    fn file_visited(&mut self, stage: Stage, path: &Path);

    /// The stage completed without error
    fn stage_finished(&mut self, stage: Stage);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl StageObserver for Silent {
    fn stage_started(&mut self, _stage: Stage, _total: usize) {}

    fn file_visited(&mut self, _stage: Stage, _path: &Path) {}

    fn stage_finished(&mut self, _stage: Stage) {}
}

/// Outcome of both stages
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Files written by the slicer
    pub slice: SliceReport,
    /// Files rotated or skipped by the rotator
    pub rotate: RotateReport,
}

/// Runs the slicer and then the rotator against one layout
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    layout: &'a SheetLayout,
    rotation: Rotation,
    target: RotateTarget,
}

impl<'a> Pipeline<'a> {
    /// Pipeline rotating in place by the default quarter turn
    pub fn new(layout: &'a SheetLayout) -> Self {
        Self {
            layout,
            rotation: Rotation::default(),
            target: RotateTarget::default(),
        }
    }

    /// Use `rotation` for the second stage
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Write rotated images to `target` instead of the default
    #[must_use]
    pub fn with_target(mut self, target: RotateTarget) -> Self {
        self.target = target;
        self
    }

    /// Slice, then rotate
    ///
    /// # Errors
    ///
    /// Returns the first slicing error, in which case rotation never starts, or the
    /// first rotation error. Files processed before a failure keep their new contents.
    pub fn run(&self) -> Result<PipelineReport> {
        self.run_observed(&mut Silent)
    }

    /// Slice, then rotate, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run`]
    pub fn run_observed(&self, observer: &mut dyn StageObserver) -> Result<PipelineReport> {
        let slice = Slicer::new(self.layout).slice_observed(observer)?;
        let rotate = Rotator::new(self.layout)
            .with_rotation(self.rotation)
            .with_target(self.target.clone())
            .rotate_observed(observer)?;

        Ok(PipelineReport { slice, rotate })
    }
}
