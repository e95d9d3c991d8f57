pub mod preprocessing;
pub mod contours;
pub mod shapes;
pub mod lines;
pub mod steps;

use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::ShapeConfig;
use crate::error::{Result, ShapeError};
use crate::models::{ApproximatedPolygon, Contour, ShapeDetection, ShapeLabel, ShapeReport};
use crate::pipeline::{Pipeline, PipelineData};

/// Shape detection orchestrator
pub struct ShapeDetector {
    pub config: ShapeConfig,
    pub verbose: bool,
    pub debug_out: Option<PathBuf>,
}

impl ShapeDetector {
    pub fn new(config: ShapeConfig) -> Self {
        Self {
            config,
            verbose: false,
            debug_out: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Dump every intermediate image into `dir` (must be empty or missing)
    pub fn with_debug(mut self, dir: PathBuf) -> Self {
        self.debug_out = Some(dir);
        self
    }

    /// Run the full shape pipeline on an image
    pub fn detect(&self, img: &DynamicImage) -> Result<ShapeReport> {
        self.config.validate()?;

        let mut pipeline = build_shape_pipeline(&self.config).with_verbose(self.verbose);
        if let Some(dir) = &self.debug_out {
            pipeline = pipeline
                .with_debug(dir.clone())
                .map_err(|e| ShapeError::Pipeline(e.to_string()))?;
        }

        let items = pipeline
            .run(img.clone())
            .map_err(|e| ShapeError::Pipeline(e.to_string()))?;

        let report = report_from(&items)?;
        info!(
            "Found {} contours ({} triangles, {} quadrilaterals, {} pentagons, {} hexagons, {} stars, {} circles)",
            report.detections.len(),
            report.count(ShapeLabel::Triangle),
            report.count(ShapeLabel::Quadrilateral),
            report.count(ShapeLabel::Pentagon),
            report.count(ShapeLabel::Hexagon),
            report.count(ShapeLabel::Star),
            report.count(ShapeLabel::Circle),
        );
        Ok(report)
    }

    /// Get the binary mask of an image (for debugging)
    pub fn get_mask(&self, img: &DynamicImage) -> image::GrayImage {
        preprocessing::preprocess(img, &self.config).mask
    }

    /// Get all contours of an image (for debugging)
    pub fn get_contours(&self, img: &DynamicImage) -> Vec<Contour> {
        contours::extract_contours(&self.get_mask(img))
    }
}

impl Default for ShapeDetector {
    fn default() -> Self {
        Self::new(ShapeConfig::default())
    }
}

/// Build the standard shape pipeline using the composable pipeline system
pub fn build_shape_pipeline(config: &ShapeConfig) -> Pipeline {
    use steps::*;

    Pipeline::new()
        .add_step(Arc::new(GrayscaleStep))
        .add_step(Arc::new(BlurStep { kernel_size: config.blur_kernel_size }))
        .add_step(Arc::new(BackgroundSubtractionStep))
        .add_step(Arc::new(ThresholdStep {
            threshold: config.threshold,
            max_value: config.max_value,
        }))
        .add_step(Arc::new(ContourDetectionStep))
        .add_step(Arc::new(ShapeClassificationStep {
            approximation_ratio: config.approximation_ratio,
        }))
}

/// Rebuild a typed detection from the metadata a classified item carries
pub fn detection_from_data(item: &PipelineData) -> Result<ShapeDetection> {
    let missing = |key: &str| ShapeError::Pipeline(format!("Missing {}", key));

    let points = item.get_points("contour_points").ok_or_else(|| missing("contour_points"))?;
    let vertices = item.get_points("polygon_points").ok_or_else(|| missing("polygon_points"))?;
    let epsilon = item.get_float("epsilon").ok_or_else(|| missing("epsilon"))?;
    let shape = item.get_string("shape").ok_or_else(|| missing("shape"))?;
    let label = ShapeLabel::from_name(shape)
        .ok_or_else(|| ShapeError::Pipeline(format!("Unknown shape label {:?}", shape)))?;
    let parent = item
        .get_int("contour_parent")
        .and_then(|p| usize::try_from(p).ok());

    Ok(ShapeDetection {
        contour: Contour {
            points: points.to_vec(),
            parent,
            is_hole: item.get_bool("is_hole").unwrap_or(false),
        },
        polygon: ApproximatedPolygon {
            vertices: vertices.to_vec(),
            epsilon,
        },
        label,
    })
}

fn report_from(items: &[PipelineData]) -> Result<ShapeReport> {
    let detections = items
        .iter()
        .map(detection_from_data)
        .collect::<Result<Vec<_>>>()?;
    let median = items.first().and_then(|item| item.get_float("median"));

    Ok(ShapeReport { detections, median })
}
