use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::edges::canny;
use imageproc::hough::{detect_lines as hough_lines, draw_polar_lines_mut, LineDetectionOptions, PolarLine};
use tracing::info;

use crate::config::LineConfig;
use crate::detection::preprocessing;

/// Output of the line detector.
pub struct LineReport {
    /// Canny edge map the votes were cast from.
    pub edges: GrayImage,
    pub lines: Vec<PolarLine>,
    /// Input with every detected line drawn across it.
    pub annotated: RgbImage,
}

/// Detect edges using Canny
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

/// Grayscale → Canny → Hough line voting → draw lines on the input
///
/// Lines are the standard transform's infinite polar lines, drawn 1px wide
/// across the whole image. They are not clipped to the edge pixels that
/// voted for them, so collinear segments merge into one line.
pub fn detect_lines(img: &DynamicImage, config: &LineConfig) -> LineReport {
    let gray = preprocessing::to_grayscale(img);
    let edges = detect_edges(&gray, config.canny_low, config.canny_high);

    let lines = hough_lines(
        &edges,
        LineDetectionOptions {
            vote_threshold: config.vote_threshold,
            suppression_radius: config.suppression_radius,
        },
    );
    info!("Detected {} lines", lines.len());

    let mut annotated = img.to_rgb8();
    draw_polar_lines_mut(&mut annotated, &lines, Rgb(config.line_color));

    LineReport {
        edges,
        lines,
        annotated,
    }
}
