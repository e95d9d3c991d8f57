use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use std::f64::consts::PI;

fn polygon(center: (f64, f64), radii: &[f64], count: usize) -> Vec<Point<i32>> {
    (0..count)
        .map(|k| {
            let radius = radii[k % radii.len()];
            let angle = -PI / 2.0 + 2.0 * PI * k as f64 / count as f64;
            Point::new(
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 + radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let mut img = RgbImage::from_pixel(800, 600, Rgb([255, 255, 255]));
    let ink = Rgb([30, 30, 30]);

    draw_polygon_mut(&mut img, &polygon((130.0, 160.0), &[90.0], 3), ink);
    draw_polygon_mut(&mut img, &polygon((400.0, 160.0), &[90.0], 4), ink);
    draw_polygon_mut(&mut img, &polygon((670.0, 160.0), &[90.0], 5), ink);
    draw_polygon_mut(&mut img, &polygon((130.0, 440.0), &[90.0], 6), ink);
    draw_polygon_mut(&mut img, &polygon((400.0, 440.0), &[100.0, 40.0], 10), ink);
    draw_filled_circle_mut(&mut img, (670, 440), 90, ink);

    img.save("shapes.png")?;
    println!("Created shapes.png (800x600, one of each shape)");
    Ok(())
}
