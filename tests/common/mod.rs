#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from shapescan for tests
pub use shapescan::{
    ApproximatedPolygon, Contour, ShapeConfig, ShapeDetection, ShapeDetector, ShapeLabel, ShapeReport,
};
