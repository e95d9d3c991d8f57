use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use std::f64::consts::PI;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Uniform color image
pub fn uniform_image(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
}

/// One solid black equilateral triangle (apex up) on a 200x200 white canvas
pub fn black_triangle_on_white() -> DynamicImage {
    let mut img = RgbImage::from_pixel(200, 200, WHITE);
    let vertices = [Point::new(100, 30), Point::new(170, 151), Point::new(30, 151)];
    draw_polygon_mut(&mut img, &vertices, BLACK);
    DynamicImage::ImageRgb8(img)
}

/// One filled black circle of radius 200 on a 600x600 white canvas.
/// The circle covers well under half the pixels so the median stays white.
pub fn black_circle_on_white() -> DynamicImage {
    let mut img = RgbImage::from_pixel(600, 600, WHITE);
    draw_filled_circle_mut(&mut img, (300, 300), 200, BLACK);
    DynamicImage::ImageRgb8(img)
}

/// Binary image: a 255 square on a 0 background
pub fn binary_square() -> GrayImage {
    binary_square_at(80, 80, 20, 20, 40)
}

/// Dense closed outline through `vertices`: every edge is sampled at unit
/// steps and rounded to the pixel grid. The closing vertex is not repeated.
pub fn polygon_outline(vertices: &[(i32, i32)]) -> Vec<Point<i32>> {
    let mut points = Vec::new();
    for i in 0..vertices.len() {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % vertices.len()];
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        for s in 0..steps {
            let t = s as f64 / steps as f64;
            let x = x0 as f64 + (x1 - x0) as f64 * t;
            let y = y0 as f64 + (y1 - y0) as f64 * t;
            points.push(Point::new(x.round() as i32, y.round() as i32));
        }
    }
    points
}

/// Vertices of a regular polygon starting at the top, rounded to integers
pub fn regular_polygon(sides: usize, center: (f64, f64), radius: f64) -> Vec<(i32, i32)> {
    rotated_polygon(sides, center, radius, 0.0)
}

/// Regular polygon turned clockwise by `degrees` from apex-up
pub fn rotated_polygon(sides: usize, center: (f64, f64), radius: f64, degrees: f64) -> Vec<(i32, i32)> {
    (0..sides)
        .map(|k| {
            let angle = -PI / 2.0 + degrees.to_radians() + 2.0 * PI * k as f64 / sides as f64;
            (
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 + radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Five-pointed star (10 vertices) starting at the top tip
pub fn star_vertices(center: (f64, f64), outer: f64, inner: f64) -> Vec<(i32, i32)> {
    rotated_star(center, outer, inner, 0.0)
}

/// Five-pointed star turned clockwise by `degrees`
pub fn rotated_star(center: (f64, f64), outer: f64, inner: f64, degrees: f64) -> Vec<(i32, i32)> {
    (0..10)
        .map(|k| {
            let radius = if k % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + degrees.to_radians() + PI * k as f64 / 5.0;
            (
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 + radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Solid black polygon on a white `size`x`size` canvas
pub fn black_polygon_on_white(size: u32, vertices: &[(i32, i32)]) -> DynamicImage {
    let mut img = RgbImage::from_pixel(size, size, WHITE);
    let points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(&mut img, &points, BLACK);
    DynamicImage::ImageRgb8(img)
}

/// Solid square of 255 covering `x0..x0 + side`, `y0..y0 + side` on a 0 mask
pub fn binary_square_at(width: u32, height: u32, x0: u32, y0: u32, side: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.put_pixel(x, y, Luma([255]));
        }
    }
    img
}

/// Multiply every coordinate by `factor`
pub fn scale_points(points: &[Point<i32>], factor: i32) -> Vec<Point<i32>> {
    points
        .iter()
        .map(|p| Point::new(p.x * factor, p.y * factor))
        .collect()
}
