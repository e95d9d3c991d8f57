use image::DynamicImage;
use tracing::info;

use crate::config::LineConfig;
use crate::detection::lines::{self, LineReport};
use crate::detection::ShapeDetector;
use crate::display::{DisplayGuard, DisplaySurface};
use crate::error::Result;
use crate::models::ShapeReport;
use crate::render::render_shapes;

/// Detect and label shapes, then present input and output on `surface`.
/// The surface is closed on every return path.
pub fn run_shapes(
    image: &DynamicImage,
    detector: &ShapeDetector,
    surface: &mut dyn DisplaySurface,
) -> Result<ShapeReport> {
    let mut display = DisplayGuard::open(surface)?;
    display.show("Input Image", &image.to_rgb8())?;

    let report = detector.detect(image)?;
    if report.is_empty() {
        info!("No contours found; output is the unannotated input");
    }

    let annotated = render_shapes(image, &report, &detector.config);
    display.show("Output", &annotated)?;
    display.wait_for_dismissal()?;
    Ok(report)
}

/// Detect straight lines, then present the edge map and the annotated input
pub fn run_lines(
    image: &DynamicImage,
    config: &LineConfig,
    surface: &mut dyn DisplaySurface,
) -> Result<LineReport> {
    let mut display = DisplayGuard::open(surface)?;
    display.show("Input Image", &image.to_rgb8())?;

    let report = lines::detect_lines(image, config);
    let edges = DynamicImage::ImageLuma8(report.edges.clone()).to_rgb8();
    display.show("Output Line Edges", &edges)?;
    display.show("Output Line Detections", &report.annotated)?;
    display.wait_for_dismissal()?;
    Ok(report)
}
