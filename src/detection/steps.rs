use crate::pipeline::{PipelineData, PipelineStep, PipelineContext, MetadataValue};
use crate::detection::{preprocessing, contours, shapes};
use crate::models::Contour;
use anyhow::Result;
use image::DynamicImage;
use tracing::debug;

/// Convert image to grayscale
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let gray = preprocessing::to_grayscale(&item.image);
                item.with_image(DynamicImage::ImageLuma8(gray))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Apply a square Gaussian blur
pub struct BlurStep {
    pub kernel_size: u32,
}

impl PipelineStep for BlurStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let blurred = preprocessing::apply_blur(&item.image.to_luma8(), self.kernel_size);
                item.with_image(DynamicImage::ImageLuma8(blurred))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}

/// Subtract the median intensity; records it as `median`
pub struct BackgroundSubtractionStep;

impl PipelineStep for BackgroundSubtractionStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = item.image.to_luma8();
            let median = preprocessing::median_intensity(&gray);
            debug!("median background level {:.1}", median);
            let subtracted = preprocessing::subtract_background(&gray, median);
            result.push(
                item.with_image(DynamicImage::ImageLuma8(subtracted))
                    .with_metadata("median", MetadataValue::Float(median)),
            );
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Background Subtraction"
    }
}

/// Binary threshold
pub struct ThresholdStep {
    pub threshold: u8,
    pub max_value: u8,
}

impl PipelineStep for ThresholdStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let mask = preprocessing::binarize(&item.image.to_luma8(), self.threshold, self.max_value);
                item.with_image(DynamicImage::ImageLuma8(mask))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Threshold"
    }
}

/// Trace contours in the mask - splits one image into one item per contour
pub struct ContourDetectionStep;

impl PipelineStep for ContourDetectionStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let mask = item.image.to_luma8();
            let found = contours::extract_contours(&mask);
            debug!("found {} contours", found.len());

            for (index, contour) in found.into_iter().enumerate() {
                let Some(bbox) = contour.bounding_box() else {
                    continue;
                };

                // Crop the region from the original so debug dumps show each shape
                let cropped = item.original.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height);

                let mut contour_data = PipelineData::from_region(cropped, item.original.clone(), bbox);
                contour_data.metadata = item.metadata.clone();
                contour_data.metadata.insert("contour_index".to_string(), MetadataValue::Int(index as i64));
                contour_data.metadata.insert(
                    "contour_parent".to_string(),
                    MetadataValue::Int(contour.parent.map_or(-1, |p| p as i64)),
                );
                contour_data.metadata.insert("is_hole".to_string(), MetadataValue::Bool(contour.is_hole));
                contour_data.metadata.insert("contour_points".to_string(), MetadataValue::Points(contour.points));

                result.push(contour_data);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Contour Detection"
    }
}

/// Approximate each contour and label it by vertex count
pub struct ShapeClassificationStep {
    pub approximation_ratio: f64,
}

impl PipelineStep for ShapeClassificationStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let points = item.get_points("contour_points")
                .ok_or_else(|| anyhow::anyhow!("Missing contour_points"))?
                .to_vec();
            let (polygon, label) = shapes::classify(&Contour::new(points), self.approximation_ratio);

            debug!(
                "contour {:?}: {} vertices (epsilon {:.2}) → {}",
                item.get_int("contour_index"),
                polygon.vertex_count(),
                polygon.epsilon,
                label
            );

            result.push(
                item.with_metadata("vertex_count", MetadataValue::Int(polygon.vertex_count() as i64))
                    .with_metadata("epsilon", MetadataValue::Float(polygon.epsilon))
                    .with_metadata("polygon_points", MetadataValue::Points(polygon.vertices))
                    .with_metadata("shape", MetadataValue::String(label.name().to_string())),
            );
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Shape Classification"
    }
}
