//! Opaque-content bounding box detection.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{FaviconError, Result};

/// An axis-aligned bounding box with inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost column
    pub left: u32,
    /// Topmost row
    pub top: u32,
    /// Rightmost column (inclusive)
    pub right: u32,
    /// Bottommost row (inclusive)
    pub bottom: u32,
}

impl BoundingBox {
    /// Width of the box in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    /// Height of the box in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Expand the box by `margin` on every side, clamped to the image
    /// bounds given by `image_width` x `image_height`.
    pub fn expand(&self, margin: u32, image_width: u32, image_height: u32) -> BoundingBox {
        BoundingBox {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: (self.right + margin).min(image_width - 1),
            bottom: (self.bottom + margin).min(image_height - 1),
        }
    }
}

/// Find the bounding box of solidly opaque content.
///
/// Scans the whole buffer and tracks the min/max coordinates of pixels
/// whose alpha is strictly greater than `alpha_threshold`. The cutoff
/// deliberately excludes soft shadow halos, whose alpha tapers low. The
/// resulting box is expanded by `margin` on all sides (clamped to the
/// image) so anti-aliased edges are not clipped by the later crop.
///
/// Fails with [`FaviconError::EmptyContent`] when no pixel qualifies;
/// callers must abort further processing for that image.
pub fn opaque_bounding_box(
    img: &RgbaImage,
    alpha_threshold: u8,
    margin: u32,
) -> Result<BoundingBox> {
    let (width, height) = img.dimensions();

    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] <= alpha_threshold {
            continue;
        }
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x,
                bottom: y,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x),
                bottom: b.bottom.max(y),
            },
        });
    }

    match bbox {
        Some(b) => Ok(b.expand(margin, width, height)),
        None => Err(FaviconError::EmptyContent {
            threshold: alpha_threshold,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_box_dimensions() {
        let b = BoundingBox {
            left: 2,
            top: 3,
            right: 6,
            bottom: 4,
        };
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 2);
    }

    #[test]
    fn test_expand_clamps_to_image() {
        let b = BoundingBox {
            left: 1,
            top: 0,
            right: 8,
            bottom: 9,
        };
        let expanded = b.expand(2, 10, 10);
        assert_eq!(expanded.left, 0);
        assert_eq!(expanded.top, 0);
        assert_eq!(expanded.right, 9);
        assert_eq!(expanded.bottom, 9);
    }

    #[test]
    fn test_finds_opaque_content() {
        let mut img = RgbaImage::new(20, 20);
        for y in 5..10 {
            for x in 8..12 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        let b = opaque_bounding_box(&img, 100, 0).unwrap();
        assert_eq!(b, BoundingBox { left: 8, top: 5, right: 11, bottom: 9 });
        assert!(b.left <= b.right);
        assert!(b.top <= b.bottom);
    }

    #[test]
    fn test_margin_applied() {
        let mut img = RgbaImage::new(20, 20);
        img.put_pixel(10, 10, Rgba([0, 255, 0, 255]));

        let b = opaque_bounding_box(&img, 100, 2).unwrap();
        assert_eq!(b, BoundingBox { left: 8, top: 8, right: 12, bottom: 12 });
    }

    #[test]
    fn test_threshold_excludes_soft_shadow() {
        let mut img = RgbaImage::new(10, 10);
        // Soft shadow ring at alpha 80 around solid content at (4..6, 4..6).
        for y in 2..8 {
            for x in 2..8 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 80]));
            }
        }
        for y in 4..6 {
            for x in 4..6 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }

        let b = opaque_bounding_box(&img, 100, 0).unwrap();
        assert_eq!(b, BoundingBox { left: 4, top: 4, right: 5, bottom: 5 });
    }

    #[test]
    fn test_threshold_is_strict() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 100]));
        assert!(matches!(
            opaque_bounding_box(&img, 100, 0),
            Err(FaviconError::EmptyContent { threshold: 100 })
        ));
    }

    #[test]
    fn test_fully_transparent_image_is_empty() {
        let img = RgbaImage::new(16, 16);
        let err = opaque_bounding_box(&img, 100, 2).unwrap_err();
        assert!(matches!(err, FaviconError::EmptyContent { .. }));
    }

    #[test]
    fn test_single_opaque_pixel() {
        let mut img = RgbaImage::new(5, 5);
        img.put_pixel(0, 4, Rgba([1, 2, 3, 255]));

        let b = opaque_bounding_box(&img, 100, 0).unwrap();
        assert_eq!(b, BoundingBox { left: 0, top: 4, right: 0, bottom: 4 });
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 1);
    }
}
