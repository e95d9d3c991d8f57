pub mod font;

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::config::ShapeConfig;
use crate::models::{ApproximatedPolygon, Contour, ShapeDetection, ShapeReport};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A label ready to be drawn for one detection
#[derive(Debug, Clone, Copy)]
pub struct Annotation<'a> {
    pub detection: &'a ShapeDetection,
    /// Bottom-left of the label's baseline
    pub anchor: (i32, i32),
}

impl<'a> Annotation<'a> {
    pub fn new(detection: &'a ShapeDetection, config: &ShapeConfig) -> Option<Self> {
        let anchor = label_anchor(&detection.polygon, config)?;
        Some(Self { detection, anchor })
    }
}

/// Black text on bright images, white text on dark ones.
/// One choice per image, taken from the global median.
pub fn text_color_for(median: f64, max_value: u8) -> Rgb<u8> {
    if median > max_value as f64 / 2.0 {
        BLACK
    } else {
        WHITE
    }
}

/// Offset into the polygon's bounding box, left of and below its center
pub fn label_anchor(polygon: &ApproximatedPolygon, config: &ShapeConfig) -> Option<(i32, i32)> {
    let bbox = polygon.bounding_box()?;
    let x = bbox.x as f64 + bbox.width as f64 / config.anchor_x_divisor;
    let y = bbox.y as f64 + bbox.height as f64 / config.anchor_y_divisor;
    Some((x as i32, y as i32))
}

/// Stamp a dot on every boundary pixel
pub fn draw_contour(canvas: &mut RgbImage, contour: &Contour, color: Rgb<u8>, thickness: u32) {
    let radius = (thickness / 2) as i32;
    for p in &contour.points {
        draw_filled_circle_mut(canvas, (p.x, p.y), radius, color);
    }
}

/// Draw one detection's boundary and label onto the canvas
pub fn annotate(canvas: &mut RgbImage, annotation: &Annotation<'_>, text_color: Rgb<u8>, config: &ShapeConfig) {
    let detection = annotation.detection;
    draw_contour(canvas, &detection.contour, Rgb(config.contour_color), config.contour_thickness);
    font::draw_text_mut(
        canvas,
        detection.label.name(),
        annotation.anchor,
        config.font_scale,
        config.text_thickness,
        text_color,
    );
}

/// Annotate every detection, in extraction order, on a copy of `image`.
/// Without detections the copy is returned untouched.
pub fn render_shapes(image: &DynamicImage, report: &ShapeReport, config: &ShapeConfig) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let Some(median) = report.median else {
        return canvas;
    };

    let text_color = text_color_for(median, config.max_value);
    for detection in &report.detections {
        if let Some(annotation) = Annotation::new(detection, config) {
            annotate(&mut canvas, &annotation, text_color, config);
        }
    }
    canvas
}
