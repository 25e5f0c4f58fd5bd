//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{CropRect, Geometry};

/// Largest square that fits the source, centered.
///
/// Offsets use floor division, so an odd leftover pixel ends up on the
/// right/bottom edge.
///
/// # Examples
/// ```
/// # use site_assets::imaging::center_square_crop;
/// let crop = center_square_crop((800, 600));
/// assert_eq!((crop.x, crop.y, crop.width, crop.height), (100, 0, 600, 600));
/// ```
pub fn center_square_crop(source: (u32, u32)) -> CropRect {
    let (width, height) = source;
    let side = width.min(height);
    CropRect {
        x: (width - side) / 2,
        y: (height - side) / 2,
        width: side,
        height: side,
    }
}

/// Scale to a target width, keeping the source aspect ratio.
///
/// Height is `round(target_width * height / width)`, never below 1.
pub fn scale_to_width(source: (u32, u32), target_width: u32) -> (u32, u32) {
    let (width, height) = source;
    let scaled = (target_width as f64 * height as f64 / width as f64).round() as u32;
    (target_width, scaled.max(1))
}

/// Resolve a [`Geometry`] against concrete source dimensions.
///
/// Returns the optional pre-crop and the final output size.
pub fn resolve_geometry(geometry: Geometry, source: (u32, u32)) -> (Option<CropRect>, u32, u32) {
    match geometry {
        Geometry::Stretch { width, height } => (None, width, height),
        Geometry::CenterSquare { side } => (Some(center_square_crop(source)), side, side),
        Geometry::FitWidth { width } => {
            let (w, h) = scale_to_width(source, width);
            (None, w, h)
        }
    }
}
