use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::separable_filter_equal;

use crate::config::ShapeConfig;

/// Intermediate images of the preprocessing stage.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub blurred: GrayImage,
    /// Binary mask: every pixel is either 0 or `max_value`.
    pub mask: GrayImage,
    /// Median intensity of `blurred`.
    pub median: f64,
}

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Normalized binomial taps; size 5 gives `[1, 4, 6, 4, 1] / 16`.
pub fn gaussian_kernel(size: u32) -> Vec<f32> {
    let n = size.max(1) as usize - 1;
    let mut row = vec![1.0f64];
    for _ in 0..n {
        let mut next = vec![1.0f64; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    let total: f64 = row.iter().sum();
    row.into_iter().map(|v| (v / total) as f32).collect()
}

/// Square Gaussian blur with a fixed kernel size
pub fn apply_blur(img: &GrayImage, kernel_size: u32) -> GrayImage {
    if kernel_size <= 1 {
        return img.clone();
    }
    separable_filter_equal(img, &gaussian_kernel(kernel_size))
}

/// Median pixel value. For an even pixel count this is the mean of the two
/// middle values.
pub fn median_intensity(img: &GrayImage) -> f64 {
    let total = img.as_raw().len();
    if total == 0 {
        return 0.0;
    }

    let mut histogram = [0usize; 256];
    for &v in img.as_raw() {
        histogram[v as usize] += 1;
    }

    // 0-based ranks of the middle element(s)
    let lower_rank = (total - 1) / 2;
    let upper_rank = total / 2;
    let value_at = |rank: usize| {
        let mut seen = 0;
        for (value, &count) in histogram.iter().enumerate() {
            seen += count;
            if seen > rank {
                return value as f64;
            }
        }
        255.0
    };

    (value_at(lower_rank) + value_at(upper_rank)) / 2.0
}

/// Per-pixel `|p - level|`, rounded and saturated to u8
pub fn subtract_background(img: &GrayImage, level: f64) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let diff = (pixel[0] as f64 - level).abs().round().min(255.0);
        out.put_pixel(x, y, Luma([diff as u8]));
    }
    out
}

/// Pixels strictly above `threshold` become `max_value`, the rest 0
pub fn binarize(img: &GrayImage, threshold: u8, max_value: u8) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let value = if pixel[0] > threshold { max_value } else { 0 };
        out.put_pixel(x, y, Luma([value]));
    }
    out
}

/// Grayscale → blur → median background subtraction → binary mask
pub fn preprocess(img: &DynamicImage, config: &ShapeConfig) -> Preprocessed {
    let gray = to_grayscale(img);
    let blurred = apply_blur(&gray, config.blur_kernel_size);
    let median = median_intensity(&blurred);
    let subtracted = subtract_background(&blurred, median);
    let mask = binarize(&subtracted, config.threshold, config.max_value);

    Preprocessed {
        blurred,
        mask,
        median,
    }
}
