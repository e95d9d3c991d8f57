use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ShapeError};

/// Tunables for the shape pipeline.
///
/// Defaults reproduce the classic contour-approximation recipe: a 5x5 blur,
/// a threshold of 10 on the background-subtracted image and a polygon
/// tolerance of 1% of the contour perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Side of the square Gaussian kernel. Must be odd.
    pub blur_kernel_size: u32,
    /// Background-subtracted intensities strictly above this become foreground.
    pub threshold: u8,
    /// Value written for foreground pixels of the binary mask.
    pub max_value: u8,
    /// Polygon tolerance as a fraction of the closed contour perimeter.
    pub approximation_ratio: f64,
    /// RGB color used to stroke contour boundaries.
    pub contour_color: [u8; 3],
    /// Diameter of the dot stamped on each boundary pixel.
    pub contour_thickness: u32,
    /// Multiplier on the built-in stroke font (1.0 is roughly 21px cap height).
    pub font_scale: f32,
    pub text_thickness: u32,
    /// Label anchor = box_left + width / anchor_x_divisor.
    pub anchor_x_divisor: f64,
    /// Label anchor = box_top + height / anchor_y_divisor.
    pub anchor_y_divisor: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            threshold: 10,
            max_value: 255,
            approximation_ratio: 0.01,
            contour_color: [0, 255, 0],
            contour_thickness: 4,
            font_scale: 1.0,
            text_thickness: 1,
            anchor_x_divisor: 3.0,
            anchor_y_divisor: 1.5,
        }
    }
}

impl ShapeConfig {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_approximation_ratio(mut self, ratio: f64) -> Self {
        self.approximation_ratio = ratio;
        self
    }

    pub fn with_blur_kernel_size(mut self, size: u32) -> Self {
        self.blur_kernel_size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(ShapeError::InvalidConfig(format!(
                "blur_kernel_size must be odd, got {}",
                self.blur_kernel_size
            )));
        }
        if !(self.approximation_ratio > 0.0) {
            return Err(ShapeError::InvalidConfig(format!(
                "approximation_ratio must be positive, got {}",
                self.approximation_ratio
            )));
        }
        if self.anchor_x_divisor <= 0.0 || self.anchor_y_divisor <= 0.0 {
            return Err(ShapeError::InvalidConfig(
                "anchor divisors must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tunables for the Hough line detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub canny_low: f32,
    pub canny_high: f32,
    /// Minimum accumulator votes for a line to be reported.
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in the accumulator.
    pub suppression_radius: u32,
    pub line_color: [u8; 3],
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 120.0,
            vote_threshold: 80,
            suppression_radius: 8,
            line_color: [0, 255, 0],
        }
    }
}

/// Presentation settings for the window surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Images are shrunk to fit this fraction of the screen in each axis.
    pub fit_ratio: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            fit_ratio: 0.6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub shapes: ShapeConfig,
    pub lines: LineConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.shapes.validate()?;
        Ok(config)
    }
}
