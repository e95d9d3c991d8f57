use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("No input image was selected")]
    SelectionCancelled,

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No display available: pass --output or build with the `gui` feature")]
    NoDisplay,

    #[error("Display error: {0}")]
    Display(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
