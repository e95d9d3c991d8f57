mod common;

use common::*;
use image::{DynamicImage, GrayImage, Luma};
use shapescan::detection::contours::{children_of, extract_contours};
use shapescan::detection::preprocessing::{
    apply_blur, binarize, gaussian_kernel, median_intensity, preprocess, subtract_background,
};

#[test]
fn test_five_tap_kernel_is_binomial() {
    let kernel = gaussian_kernel(5);
    let expected = [1.0, 4.0, 6.0, 4.0, 1.0].map(|v: f32| v / 16.0);
    assert_eq!(kernel.len(), 5);
    for (got, want) in kernel.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6);
    }
    assert_eq!(gaussian_kernel(1), vec![1.0]);
}

#[test]
fn test_blur_keeps_uniform_image() {
    let img = GrayImage::from_pixel(20, 20, Luma([137]));
    assert_eq!(apply_blur(&img, 5), img);
}

#[test]
fn test_median_of_even_count_averages_middle_values() {
    let mut img = GrayImage::new(2, 2);
    img.put_pixel(0, 0, Luma([10]));
    img.put_pixel(1, 0, Luma([20]));
    img.put_pixel(0, 1, Luma([30]));
    img.put_pixel(1, 1, Luma([40]));
    assert_eq!(median_intensity(&img), 25.0);

    let odd = GrayImage::from_fn(3, 1, |x, _| Luma([(x * 50) as u8]));
    assert_eq!(median_intensity(&odd), 50.0);
}

#[test]
fn test_background_subtraction_is_absolute() {
    let img = GrayImage::from_fn(3, 1, |x, _| Luma([[0u8, 100, 255][x as usize]]));
    let out = subtract_background(&img, 100.0);
    assert_eq!(out.as_raw(), &vec![100, 0, 155]);

    let half = subtract_background(&GrayImage::from_pixel(1, 1, Luma([10])), 12.5);
    assert_eq!(half.get_pixel(0, 0)[0], 3);
}

#[test]
fn test_binarize_is_strictly_greater_than_threshold() {
    let img = GrayImage::from_fn(3, 1, |x, _| Luma([[10u8, 11, 200][x as usize]]));
    let mask = binarize(&img, 10, 255);
    assert_eq!(mask.as_raw(), &vec![0, 255, 255]);
}

#[test]
fn test_preprocess_binary_image_is_deterministic() {
    let img = DynamicImage::ImageLuma8(binary_square());
    let config = ShapeConfig::default();

    let first = preprocess(&img, &config);
    let second = preprocess(&img, &config);
    assert_eq!(first.mask, second.mask);
    assert_eq!(first.median, second.median);
    assert!(first.mask.pixels().all(|p| p[0] == 0 || p[0] == 255));
}

#[test]
fn test_dark_and_light_shapes_are_both_foreground() {
    let config = ShapeConfig::default();

    let dark_on_light = preprocess(&black_triangle_on_white(), &config);
    assert_eq!(dark_on_light.median, 255.0);
    assert_eq!(dark_on_light.mask.get_pixel(100, 120)[0], 255);
    assert_eq!(dark_on_light.mask.get_pixel(5, 5)[0], 0);

    let light_on_dark = preprocess(&DynamicImage::ImageLuma8(binary_square()), &config);
    assert_eq!(light_on_dark.median, 0.0);
    assert_eq!(light_on_dark.mask.get_pixel(40, 40)[0], 255);
    assert_eq!(light_on_dark.mask.get_pixel(2, 2)[0], 0);
}

#[test]
fn test_uniform_image_has_empty_mask() {
    let img = uniform_image(50, 40, image::Rgb([128, 128, 128]));
    let pre = preprocess(&img, &ShapeConfig::default());
    assert!(pre.mask.pixels().all(|p| p[0] == 0));
    assert!(extract_contours(&pre.mask).is_empty());
}

#[test]
fn test_contours_include_holes_with_parent() {
    // Square ring: outer border plus the border of its hole
    let mut mask = GrayImage::new(60, 60);
    for y in 10..50 {
        for x in 10..50 {
            let inside_hole = (20..40).contains(&x) && (20..40).contains(&y);
            if !inside_hole {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    let contours = extract_contours(&mask);
    assert_eq!(contours.len(), 2);

    let outer = contours.iter().position(|c| !c.is_hole).expect("outer border");
    let hole = contours.iter().position(|c| c.is_hole).expect("hole border");
    assert_eq!(contours[outer].parent, None);
    assert_eq!(contours[hole].parent, Some(outer));
    assert_eq!(children_of(&contours, outer), vec![hole]);

    // No point compression: every boundary pixel of the 40x40 outer square is kept
    assert_eq!(contours[outer].len(), 4 * 39);
}

#[test]
fn test_region_on_left_edge_is_outer_border() {
    let mask = binary_square_at(60, 60, 0, 10, 30);
    let contours = extract_contours(&mask);

    assert_eq!(contours.len(), 1);
    assert!(!contours[0].is_hole);
    assert_eq!(contours[0].parent, None);
    assert_eq!(contours[0].len(), 4 * 29);

    let min_x = contours[0].points.iter().map(|p| p.x).min();
    assert_eq!(min_x, Some(0));
}

#[test]
fn test_edge_contours_match_interior_ones_shifted() {
    let on_edge = extract_contours(&binary_square_at(60, 60, 0, 0, 30));
    let inside = extract_contours(&binary_square_at(60, 60, 1, 1, 30));

    assert_eq!(on_edge.len(), 1);
    assert_eq!(inside.len(), 1);
    assert_eq!(on_edge[0].is_hole, inside[0].is_hole);

    let mut shifted: Vec<(i32, i32)> = inside[0].points.iter().map(|p| (p.x - 1, p.y - 1)).collect();
    let mut edge: Vec<(i32, i32)> = on_edge[0].points.iter().map(|p| (p.x, p.y)).collect();
    shifted.sort();
    edge.sort();
    assert_eq!(edge, shifted);
}

#[test]
fn test_full_frame_region_keeps_outer_and_hole() {
    // Foreground everywhere except a square in the middle
    let mut mask = GrayImage::from_pixel(40, 40, Luma([255]));
    for y in 10..30 {
        for x in 10..30 {
            mask.put_pixel(x, y, Luma([0]));
        }
    }

    let contours = extract_contours(&mask);
    assert_eq!(contours.len(), 2);
    assert!(!contours[0].is_hole);
    assert_eq!(contours[0].parent, None);
    assert!(contours[1].is_hole);
    assert_eq!(contours[1].parent, Some(0));

    let max = contours[0].points.iter().fold((0, 0), |acc, p| (acc.0.max(p.x), acc.1.max(p.y)));
    assert_eq!(max, (39, 39));
}
