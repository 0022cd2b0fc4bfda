//! Quarter-turn rotation of every part image the slicer produced

use crate::io::error::{Result, file_system};
use crate::io::image::{load_image, save_png};
use crate::layout::sheet::{SheetLayout, part_path_under};
use crate::pipeline::runner::{Silent, Stage, StageObserver};
use image::DynamicImage;
use std::fmt;
use std::path::PathBuf;

/// Clockwise rotation applied to each part image
///
/// The canvas always grows to fit, so quarter turns swap width and height and no
/// pixel is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Rotation {
    /// 90° clockwise
    #[default]
    #[value(name = "cw90")]
    Clockwise90,
    /// 180°
    #[value(name = "half")]
    Half,
    /// 270° clockwise, i.e. 90° counter-clockwise
    #[value(name = "cw270")]
    Clockwise270,
}

impl Rotation {
    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Clockwise90 => 1,
            Self::Half => 2,
            Self::Clockwise270 => 3,
        }
    }

    /// Rotated copy of `img`
    pub fn apply(self, img: &DynamicImage) -> DynamicImage {
        match self {
            Self::Clockwise90 => img.rotate90(),
            Self::Half => img.rotate180(),
            Self::Clockwise270 => img.rotate270(),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} degrees clockwise", u16::from(self.quarter_turns()) * 90)
    }
}

/// Where rotated images are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RotateTarget {
    /// Overwrite each source file; repeated runs accumulate rotation
    #[default]
    InPlace,
    /// Mirror the part layout under another root, leaving sources untouched
    CopyTo(PathBuf),
}

/// Files touched by a rotation pass
#[derive(Debug, Clone, Default)]
pub struct RotateReport {
    /// Destinations of rotated images, in visiting order
    pub rotated: Vec<PathBuf>,
    /// Expected source files that did not exist
    pub skipped: Vec<PathBuf>,
}

impl RotateReport {
    /// True when not a single part image was found
    pub const fn found_nothing(&self) -> bool {
        self.rotated.is_empty()
    }
}

/// Rotation stage bound to a layout
#[derive(Debug, Clone)]
pub struct Rotator<'a> {
    layout: &'a SheetLayout,
    rotation: Rotation,
    target: RotateTarget,
}

impl<'a> Rotator<'a> {
    /// Rotator turning images 90° clockwise in place
    pub fn new(layout: &'a SheetLayout) -> Self {
        Self {
            layout,
            rotation: Rotation::default(),
            target: RotateTarget::default(),
        }
    }

    /// Use `rotation` instead of the default quarter turn
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Write rotated images to `target`
    #[must_use]
    pub fn with_target(mut self, target: RotateTarget) -> Self {
        self.target = target;
        self
    }

    /// Rotate every existing part image
    ///
    /// # Errors
    ///
    /// Returns the first load, save, or filesystem error. Files rotated before the
    /// failure are not restored.
    pub fn rotate(&self) -> Result<RotateReport> {
        self.rotate_observed(&mut Silent)
    }

    /// Rotate every existing part image, reporting each visited path
    ///
    /// Parts are visited in catalog order and items in ascending order. A missing
    /// file is recorded in [`RotateReport::skipped`] and is not an error.
    ///
    /// # Errors
    ///
    /// See [`Rotator::rotate`]
    pub fn rotate_observed(&self, observer: &mut dyn StageObserver) -> Result<RotateReport> {
        observer.stage_started(Stage::Rotate, self.layout.file_count());
        let mut report = RotateReport::default();

        for (part, item_number, source) in self.layout.part_files() {
            let exists = source
                .try_exists()
                .map_err(|e| file_system(&source, "check existence", e))?;

            if exists {
                let rotated = self.rotation.apply(&load_image(&source)?);
                let destination = match &self.target {
                    RotateTarget::InPlace => source.clone(),
                    RotateTarget::CopyTo(root) => part_path_under(root, part, item_number),
                };
                save_png(&rotated, &destination)?;
                report.rotated.push(destination);
            } else {
                report.skipped.push(source.clone());
            }

            observer.file_visited(Stage::Rotate, &source);
        }

        observer.stage_finished(Stage::Rotate);
        Ok(report)
    }
}
