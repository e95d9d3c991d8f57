pub mod app;
pub mod config;
pub mod detection;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::{AppConfig, DisplayConfig, LineConfig, ShapeConfig};
pub use detection::ShapeDetector;
pub use error::{Result, ShapeError};
pub use models::{ApproximatedPolygon, Contour, ShapeDetection, ShapeLabel, ShapeReport};
pub use pipeline::{
    BoundingBox, MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineStep, DebugConfig,
};
