//! Cuts a composite sheet into one PNG per (part, item) cell

use crate::io::error::Result;
use crate::io::image::{load_image, save_png};
use crate::layout::grid::CellGrid;
use crate::layout::sheet::SheetLayout;
use crate::pipeline::runner::{Silent, Stage, StageObserver};
use image::DynamicImage;
use std::path::PathBuf;

/// Files produced by a slicing pass
#[derive(Debug, Clone)]
pub struct SliceReport {
    /// Grid the sheet was cut along
    pub grid: CellGrid,
    /// Written files in the order they were produced
    pub written: Vec<PathBuf>,
}

impl SliceReport {
    /// Pixels left uncovered on the right edge and bottom edge
    pub const fn dropped(&self) -> (u32, u32) {
        self.grid.remainder()
    }
}

/// Slicing stage bound to a layout
#[derive(Debug, Clone, Copy)]
pub struct Slicer<'a> {
    layout: &'a SheetLayout,
}

impl<'a> Slicer<'a> {
    /// Slicer for `layout`
    pub const fn new(layout: &'a SheetLayout) -> Self {
        Self { layout }
    }

    /// Load the layout's sheet and cut it
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be loaded, its size does not fit the
    /// layout, or a part image cannot be written
    pub fn slice(&self) -> Result<SliceReport> {
        self.slice_observed(&mut Silent)
    }

    /// Load the layout's sheet and cut it, reporting each written file
    ///
    /// # Errors
    ///
    /// See [`Slicer::slice`]
    pub fn slice_observed(&self, observer: &mut dyn StageObserver) -> Result<SliceReport> {
        observer.stage_started(Stage::Slice, self.layout.file_count());
        let sheet = load_image(self.layout.sheet_path())?;
        let report = self.slice_image(&sheet, observer)?;
        observer.stage_finished(Stage::Slice);
        Ok(report)
    }

    /// Cut an already loaded sheet
    ///
    /// Cells are visited item by item, and within an item from the top part down.
    /// The grid is validated before anything is written, so a size mismatch leaves
    /// the output root untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet size does not fit the layout or a part image
    /// cannot be written
    pub fn slice_image(
        &self,
        sheet: &DynamicImage,
        observer: &mut dyn StageObserver,
    ) -> Result<SliceReport> {
        let grid = self.layout.grid(sheet.width(), sheet.height())?;
        let mut written = Vec::with_capacity(grid.len());

        for item in 0..grid.item_count() {
            for (part_index, part) in (0u32..).zip(self.layout.parts().iter()) {
                let Some(cell) = grid.cell(item, part_index) else {
                    break;
                };

                let piece = sheet.crop_imm(cell.x0, cell.y0, cell.width(), cell.height());
                let path = self.layout.part_path(part, item + 1);
                save_png(&piece, &path)?;

                observer.file_visited(Stage::Slice, &path);
                written.push(path);
            }
        }

        Ok(SliceReport { grid, written })
    }
}
