//! The layout both stages agree on: where the sheet is, how it is divided, and
//! where the part images live

use crate::io::configuration::{
    DEFAULT_ITEM_COUNT, DEFAULT_OUTPUT_ROOT, DEFAULT_SHEET_PATH, PART_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::catalog::PartCatalog;
use crate::layout::grid::{CellGrid, TruncationPolicy};
use std::path::{Path, PathBuf};

/// Single source of truth for sheet geometry and part file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    sheet_path: PathBuf,
    output_root: PathBuf,
    item_count: u32,
    parts: PartCatalog,
    truncation: TruncationPolicy,
}

impl SheetLayout {
    /// Create a layout with the default truncation policy
    ///
    /// # Errors
    ///
    /// Returns an error if `item_count` is zero
    pub fn new(
        sheet_path: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        item_count: u32,
        parts: PartCatalog,
    ) -> Result<Self> {
        if item_count == 0 {
            return Err(invalid_parameter(
                "items",
                &item_count,
                &"at least one item is required",
            ));
        }

        Ok(Self {
            sheet_path: sheet_path.into(),
            output_root: output_root.into(),
            item_count,
            parts,
            truncation: TruncationPolicy::default(),
        })
    }

    /// Replace the truncation policy
    #[must_use]
    pub const fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    /// Composite sheet read by the slicer
    pub fn sheet_path(&self) -> &Path {
        &self.sheet_path
    }

    /// Directory holding one subdirectory per part
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Number of items across the sheet
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Ordered part names
    pub const fn parts(&self) -> &PartCatalog {
        &self.parts
    }

    /// Policy applied to sheets that do not divide evenly
    pub const fn truncation(&self) -> TruncationPolicy {
        self.truncation
    }

    /// Number of part image files a full slice produces
    pub const fn file_count(&self) -> usize {
        self.item_count as usize * self.parts.len()
    }

    /// Grid for a sheet of the given pixel size
    ///
    /// # Errors
    ///
    /// Propagates [`CellGrid::new`] validation failures
    pub fn grid(&self, width: u32, height: u32) -> Result<CellGrid> {
        let part_count = u32::try_from(self.parts.len())
            .map_err(|e| invalid_parameter("parts", &self.parts.len(), &e))?;
        CellGrid::new(width, height, self.item_count, part_count, self.truncation)
    }

    /// Location of `part`'s image for the 1-based `item_number` under the output root
    pub fn part_path(&self, part: &str, item_number: u32) -> PathBuf {
        part_path_under(&self.output_root, part, item_number)
    }

    /// Every expected part file, part-major in catalog order, items ascending
    pub fn part_files(&self) -> impl Iterator<Item = (&str, u32, PathBuf)> + '_ {
        self.parts.iter().flat_map(move |part| {
            (1..=self.item_count).map(move |n| (part, n, self.part_path(part, n)))
        })
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_path: PathBuf::from(DEFAULT_SHEET_PATH),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            item_count: DEFAULT_ITEM_COUNT,
            parts: PartCatalog::default(),
            truncation: TruncationPolicy::default(),
        }
    }
}

/// `<root>/<part>/<item_number>.png`
pub fn part_path_under(root: &Path, part: &str, item_number: u32) -> PathBuf {
    root.join(part).join(format!("{item_number}.{PART_EXTENSION}"))
}
