use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

use crate::models::{ApproximatedPolygon, Contour, ShapeDetection, ShapeLabel};

/// Approximate a closed contour and name it by its vertex count.
///
/// The tolerance is `approximation_ratio` times the closed perimeter, so
/// scaling a contour scales the tolerance with it. No size or convexity
/// checks are applied: a three-pixel speck is classified like a real shape.
pub fn classify(contour: &Contour, approximation_ratio: f64) -> (ApproximatedPolygon, ShapeLabel) {
    let epsilon = approximation_ratio * contour.perimeter();
    let vertices = approximate_closed(&contour.points, epsilon);
    let label = ShapeLabel::from_vertex_count(vertices.len());

    (ApproximatedPolygon { vertices, epsilon }, label)
}

/// Classify each contour, keeping extraction order
pub fn classify_all(contours: Vec<Contour>, approximation_ratio: f64) -> Vec<ShapeDetection> {
    contours
        .into_iter()
        .map(|contour| {
            let (polygon, label) = classify(&contour, approximation_ratio);
            ShapeDetection { contour, polygon, label }
        })
        .collect()
}

/// Rounds of "jump to the farthest point" used to seed the split pair
const SPLIT_SEED_ITERATIONS: usize = 3;

/// Douglas-Peucker on a closed curve.
///
/// The curve is cut at a pair of mutually distant points, found by jumping
/// to the farthest point a few times starting from the first one. Both open
/// chains are simplified and joined back, then near-collinear vertices are
/// dropped. Curves with fewer than three points, or a non-positive
/// tolerance, are returned as-is.
pub fn approximate_closed(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    if points.len() < 3 || !(epsilon > 0.0) {
        return points.to_vec();
    }

    // The trace starts wherever the raster scan first touched the shape,
    // which is rarely a corner. Start from an extremal point instead.
    let mut seed = 0;
    for _ in 0..SPLIT_SEED_ITERATIONS {
        seed = farthest_from(points, points[seed]);
    }
    let points: Vec<Point<i32>> = points[seed..].iter().chain(&points[..seed]).copied().collect();

    let start = points[0];
    let far = farthest_from(&points, start);
    if far == 0 {
        // Every point coincides with the start
        return vec![start];
    }

    let first = approximate_polygon_dp(&points[..=far], epsilon, false);

    let mut closing: Vec<Point<i32>> = points[far..].to_vec();
    closing.push(start);
    let second = approximate_polygon_dp(&closing, epsilon, false);

    // `first` runs start..=far and `second` runs far..=start
    let mut vertices = first;
    if second.len() > 2 {
        vertices.extend_from_slice(&second[1..second.len() - 1]);
    }
    drop_redundant_vertices(vertices, epsilon)
}

/// Remove vertices lying within `epsilon` of the line through their two
/// neighbours. Split points picked on an edge parallel to a chord end up here.
fn drop_redundant_vertices(mut vertices: Vec<Point<i32>>, epsilon: f64) -> Vec<Point<i32>> {
    let mut i = 0;
    let mut checked = 0;
    while vertices.len() > 3 && checked < vertices.len() {
        let n = vertices.len();
        let prev = vertices[(i + n - 1) % n];
        let next = vertices[(i + 1) % n];
        if distance_to_line(vertices[i], prev, next) <= epsilon {
            vertices.remove(i);
            checked = 0;
            if i >= vertices.len() {
                i = 0;
            }
        } else {
            i = (i + 1) % n;
            checked += 1;
        }
    }
    vertices
}

fn distance_to_line(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let (px, py) = ((p.x - a.x) as f64, (p.y - a.y) as f64);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return (px * px + py * py).sqrt();
    }
    (dx * py - dy * px).abs() / length
}

fn farthest_from(points: &[Point<i32>], origin: Point<i32>) -> usize {
    let mut best = 0;
    let mut best_dist = 0i64;
    for (i, p) in points.iter().enumerate() {
        let dx = (p.x - origin.x) as i64;
        let dy = (p.y - origin.y) as i64;
        let dist = dx * dx + dy * dy;
        if dist > best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
