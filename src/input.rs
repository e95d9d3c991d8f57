use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShapeError};

/// Open and decode a raster image. Any failure is a [`ShapeError::Decode`].
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decode_error = |source| ShapeError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)
}

/// Use the given path, or ask for one with a file dialog when built with `gui`
pub fn resolve_input(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => pick_image_path(),
    }
}

#[cfg(feature = "gui")]
fn pick_image_path() -> Result<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select an image")
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("All files", &["*"]);
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog.pick_file().ok_or(ShapeError::SelectionCancelled)
}

#[cfg(not(feature = "gui"))]
fn pick_image_path() -> Result<PathBuf> {
    Err(ShapeError::SelectionCancelled)
}
