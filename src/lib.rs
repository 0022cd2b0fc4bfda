//! Sprite-sheet slicing into per-part images, followed by quarter-turn rotation
//!
//! A composite sheet holds several items side by side, each split vertically into
//! the same ordered set of named parts. The slicer cuts the sheet into one image per
//! (part, item) pair and the rotator turns every resulting image.

#![forbid(unsafe_code)]

/// Input/output operations, command-line handling and error types
pub mod io;
/// Sheet layout, part catalog and crop grid geometry
pub mod layout;
/// Slicing and rotation stages and the runner that sequences them
pub mod pipeline;

pub use io::error::{Result, SheetError};
