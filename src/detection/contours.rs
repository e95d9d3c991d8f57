use image::{imageops, GrayImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

use crate::models::Contour;

/// Trace every border of a binary mask (non-zero pixels are foreground).
///
/// Outer borders and hole borders are both returned at every nesting depth,
/// with all boundary pixels kept. `parent` indexes into the returned Vec.
/// Order is the raster order borders are discovered in.
pub fn extract_contours(mask: &GrayImage) -> Vec<Contour> {
    // Border following only opens an outer border after a background pixel,
    // so regions touching the image edge need a zero frame around them.
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);

    find_contours::<i32>(&padded)
        .into_iter()
        .map(|c| Contour {
            // Border pixels are foreground, so they all lie inside the mask
            points: c.points.into_iter().map(|p| Point::new(p.x - 1, p.y - 1)).collect(),
            parent: c.parent,
            is_hole: c.border_type == BorderType::Hole,
        })
        .collect()
}

/// Indices of the direct children of `index`
pub fn children_of(contours: &[Contour], index: usize) -> Vec<usize> {
    contours
        .iter()
        .enumerate()
        .filter(|(_, c)| c.parent == Some(index))
        .map(|(i, _)| i)
        .collect()
}
