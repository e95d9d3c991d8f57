use imageproc::point::Point;
use std::fmt;

use crate::pipeline::BoundingBox;

/// One traced boundary of the binary mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Every boundary pixel, in tracing order. The curve is implicitly closed.
    pub points: Vec<Point<i32>>,
    /// Index of the enclosing contour in the same extraction result.
    pub parent: Option<usize>,
    /// True for the inner border of a hole, false for an outer border.
    pub is_hole: bool,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self {
            points,
            parent: None,
            is_hole: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed perimeter length
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        imageproc::geometry::arc_length(&self.points, true)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.points)
    }
}

/// Reduced polygon produced from a [`Contour`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximatedPolygon {
    pub vertices: Vec<Point<i32>>,
    /// Tolerance the polygon was simplified with.
    pub epsilon: f64,
}

impl ApproximatedPolygon {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.vertices)
    }
}

/// Shape name derived from the vertex count of an approximated polygon.
///
/// `Circle` is the catch-all: any count without a dedicated variant lands
/// there, including the counts of tiny noise contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeLabel {
    Triangle,
    Quadrilateral,
    Pentagon,
    Hexagon,
    Star,
    Circle,
}

impl ShapeLabel {
    pub fn from_vertex_count(count: usize) -> Self {
        match count {
            3 => ShapeLabel::Triangle,
            4 => ShapeLabel::Quadrilateral,
            5 => ShapeLabel::Pentagon,
            6 => ShapeLabel::Hexagon,
            10 => ShapeLabel::Star,
            _ => ShapeLabel::Circle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeLabel::Triangle => "Triangle",
            ShapeLabel::Quadrilateral => "Quadrilateral",
            ShapeLabel::Pentagon => "Pentagon",
            ShapeLabel::Hexagon => "Hexagon",
            ShapeLabel::Star => "Star",
            ShapeLabel::Circle => "Circle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Triangle" => Some(ShapeLabel::Triangle),
            "Quadrilateral" => Some(ShapeLabel::Quadrilateral),
            "Pentagon" => Some(ShapeLabel::Pentagon),
            "Hexagon" => Some(ShapeLabel::Hexagon),
            "Star" => Some(ShapeLabel::Star),
            "Circle" => Some(ShapeLabel::Circle),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification result for one contour
#[derive(Debug, Clone)]
pub struct ShapeDetection {
    pub contour: Contour,
    pub polygon: ApproximatedPolygon,
    pub label: ShapeLabel,
}

/// Everything one shape detection pass produced.
#[derive(Debug, Clone, Default)]
pub struct ShapeReport {
    /// Detections in extraction order.
    pub detections: Vec<ShapeDetection>,
    /// Median intensity of the blurred grayscale image. `None` when no
    /// contour was found, since nothing will be labelled.
    pub median: Option<f64>,
}

impl ShapeReport {
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn count(&self, label: ShapeLabel) -> usize {
        self.detections.iter().filter(|d| d.label == label).count()
    }
}
