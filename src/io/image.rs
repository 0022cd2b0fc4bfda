//! PNG loading and saving with path-aware errors

use crate::io::error::{Result, SheetError, file_system};
use image::DynamicImage;
use std::path::Path;

/// Load and decode an image, attributing any failure to `path`
///
/// # Errors
///
/// Returns [`SheetError::ImageLoad`] if the file is missing, unreadable, or not
/// a decodable image
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SheetError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save an image as PNG, creating its parent directory first
///
/// An existing file at `path` is overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_png(img: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }
    }

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SheetError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
