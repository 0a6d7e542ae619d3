//! Background color detection and alpha channel inspection.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Detect the background reference color of an image.
///
/// Samples the pixel at the origin (0, 0). This is a deliberate
/// single-sample heuristic: icons exported on a uniform backdrop have
/// the backdrop in every corner, so one sample is enough. It is not a
/// general-purpose background detector.
///
/// Returns fully transparent black for an empty (0x0) image.
pub fn background_color(img: &RgbaImage) -> Rgba<u8> {
    if img.width() == 0 || img.height() == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    *img.get_pixel(0, 0)
}

/// A sampled corner pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerSample {
    /// X coordinate of the sample
    pub x: u32,
    /// Y coordinate of the sample
    pub y: u32,
    /// RGBA channels at that coordinate
    pub rgba: [u8; 4],
}

/// Alpha channel inspection report for a decoded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphaReport {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// The four corner pixels (top-left, top-right, bottom-left, bottom-right)
    pub corners: Vec<CornerSample>,
    /// Smallest alpha value in the image
    pub min_alpha: u8,
    /// Largest alpha value in the image
    pub max_alpha: u8,
}

impl AlphaReport {
    /// Check if any pixel is less than fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.min_alpha < 255
    }

    /// Check if the image looks like it still carries an opaque backdrop.
    ///
    /// True when every corner pixel is fully opaque, which is the state
    /// the flood-fill stage exists to fix.
    pub fn needs_cleaning(&self) -> bool {
        !self.corners.is_empty() && self.corners.iter().all(|c| c.rgba[3] == 255)
    }
}

/// Inspect the alpha channel of an image.
///
/// Samples all four corners and scans the full buffer for the alpha
/// range. Returns `None` for an empty (0x0) image.
pub fn inspect_alpha(img: &RgbaImage) -> Option<AlphaReport> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ]
    .iter()
    .map(|&(x, y)| CornerSample {
        x,
        y,
        rgba: img.get_pixel(x, y).0,
    })
    .collect();

    let mut min_alpha = u8::MAX;
    let mut max_alpha = u8::MIN;
    for pixel in img.pixels() {
        let alpha = pixel[3];
        min_alpha = min_alpha.min(alpha);
        max_alpha = max_alpha.max(alpha);
    }

    Some(AlphaReport {
        width,
        height,
        corners,
        min_alpha,
        max_alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_from_origin() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        assert_eq!(background_color(&img), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_background_empty_image() {
        let img = RgbaImage::new(0, 0);
        assert_eq!(background_color(&img), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_inspect_corners_and_range() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([200, 200, 200, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 40]));
        img.put_pixel(2, 2, Rgba([1, 2, 3, 255]));

        let report = inspect_alpha(&img).unwrap();
        assert_eq!(report.width, 3);
        assert_eq!(report.height, 3);
        assert_eq!(report.corners.len(), 4);
        assert_eq!(report.corners[3].rgba, [1, 2, 3, 255]);
        assert_eq!(report.min_alpha, 40);
        assert_eq!(report.max_alpha, 255);
        assert!(report.has_transparency());
        assert!(report.needs_cleaning());
    }

    #[test]
    fn test_inspect_transparent_corners() {
        let mut img = RgbaImage::new(3, 3);
        img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));

        let report = inspect_alpha(&img).unwrap();
        assert!(!report.needs_cleaning());
        assert!(report.has_transparency());
        assert_eq!(report.max_alpha, 255);
    }

    #[test]
    fn test_inspect_empty_image() {
        assert!(inspect_alpha(&RgbaImage::new(0, 0)).is_none());
    }

    #[test]
    fn test_inspect_single_pixel() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([9, 8, 7, 128]));
        let report = inspect_alpha(&img).unwrap();
        // All four corner samples collapse onto the same pixel.
        assert_eq!(report.corners.len(), 4);
        assert!(report.corners.iter().all(|c| c.rgba == [9, 8, 7, 128]));
        assert_eq!(report.min_alpha, 128);
        assert_eq!(report.max_alpha, 128);
    }
}
