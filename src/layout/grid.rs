//! Crop rectangles for the (item, part) cells of a composite sheet

use crate::io::error::{Result, SheetError};

/// How to treat pixels left over when the sheet does not divide evenly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Drop the remainder from the last column and row of cells
    #[default]
    Truncate,
    /// Refuse sheets whose width or height leaves a remainder
    Strict,
}

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Left edge, inclusive
    pub x0: u32,
    /// Top edge, inclusive
    pub y0: u32,
    /// Right edge, exclusive
    pub x1: u32,
    /// Bottom edge, exclusive
    pub y1: u32,
}

impl GridCell {
    /// Cell width in pixels
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Cell height in pixels
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Whether the pixel `(x, y)` lies inside the cell
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// Uniform grid of `item_count` columns by `part_count` rows over a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    item_width: u32,
    part_height: u32,
    item_count: u32,
    part_count: u32,
    remainder: (u32, u32),
}

impl CellGrid {
    /// Compute the grid for a `width` × `height` sheet
    ///
    /// Cell extents use truncating division, so with [`TruncationPolicy::Truncate`]
    /// up to `item_count - 1` columns and `part_count - 1` rows of pixels are left
    /// uncovered on the right and bottom edges.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `item_count` or `part_count` is zero
    /// - The sheet is narrower than `item_count` or shorter than `part_count` pixels
    /// - The policy is [`TruncationPolicy::Strict`] and either extent leaves a remainder
    pub fn new(
        width: u32,
        height: u32,
        item_count: u32,
        part_count: u32,
        policy: TruncationPolicy,
    ) -> Result<Self> {
        if item_count == 0 || part_count == 0 {
            return Err(SheetError::InvalidSourceData {
                reason: format!(
                    "grid needs at least one item and one part (got {item_count} items, {part_count} parts)"
                ),
            });
        }

        let item_width = width / item_count;
        let part_height = height / part_count;

        if item_width == 0 || part_height == 0 {
            return Err(SheetError::InvalidSourceData {
                reason: format!(
                    "sheet of {width}x{height} pixels is too small for {item_count} items by {part_count} parts"
                ),
            });
        }

        let remainder = (width % item_count, height % part_count);

        if policy == TruncationPolicy::Strict {
            if remainder.0 != 0 {
                return Err(SheetError::IndivisibleDimension {
                    axis: "width",
                    extent: width,
                    divisor: item_count,
                });
            }
            if remainder.1 != 0 {
                return Err(SheetError::IndivisibleDimension {
                    axis: "height",
                    extent: height,
                    divisor: part_count,
                });
            }
        }

        Ok(Self {
            item_width,
            part_height,
            item_count,
            part_count,
            remainder,
        })
    }

    /// Width of every cell
    pub const fn item_width(&self) -> u32 {
        self.item_width
    }

    /// Height of every cell
    pub const fn part_height(&self) -> u32 {
        self.part_height
    }

    /// Number of columns
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Number of rows
    pub const fn part_count(&self) -> u32 {
        self.part_count
    }

    /// Pixels dropped on the right edge and bottom edge
    pub const fn remainder(&self) -> (u32, u32) {
        self.remainder
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.item_count as usize * self.part_count as usize
    }

    /// Always false for a constructed grid
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rectangle for the zero-based `item` column and `part` row
    pub const fn cell(&self, item: u32, part: u32) -> Option<GridCell> {
        if item >= self.item_count || part >= self.part_count {
            return None;
        }

        let x0 = item * self.item_width;
        let y0 = part * self.part_height;
        Some(GridCell {
            x0,
            y0,
            x1: x0 + self.item_width,
            y1: y0 + self.part_height,
        })
    }

    /// Every cell, item-major: all parts of item 0, then all parts of item 1, and so on
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, GridCell)> + '_ {
        (0..self.item_count).flat_map(move |item| {
            (0..self.part_count).filter_map(move |part| {
                self.cell(item, part).map(|cell| (item, part, cell))
            })
        })
    }
}
