//! Geometry and naming shared by the slicing and rotation stages

/// Ordered, validated list of part names
pub mod catalog;
/// Crop rectangles for every (item, part) cell
pub mod grid;
/// The single configuration object passed to both stages
pub mod sheet;

pub use catalog::PartCatalog;
pub use grid::{CellGrid, GridCell, TruncationPolicy};
pub use sheet::SheetLayout;
