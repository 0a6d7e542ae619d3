//! Crop and centered resize onto a transparent canvas.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::bbox::BoundingBox;

/// Crop an image to `bbox` and compose it centered on a transparent
/// square canvas of `canvas_size` pixels.
///
/// The crop is scaled by `min(canvas/w, canvas/h)` so it fits within the
/// canvas while preserving its aspect ratio, using Lanczos3 resampling.
/// Offsets are integer-divided, so any odd-size remainder lands toward
/// the top-left. A same-size scale skips the resampler, which keeps
/// re-composition of an already-composed canvas pixel-identical.
pub fn crop_and_center(img: &RgbaImage, bbox: BoundingBox, canvas_size: u32) -> RgbaImage {
    let cropped =
        imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();

    let (crop_width, crop_height) = cropped.dimensions();
    let scale = f64::min(
        canvas_size as f64 / crop_width as f64,
        canvas_size as f64 / crop_height as f64,
    );
    let new_width = ((crop_width as f64 * scale) as u32).max(1);
    let new_height = ((crop_height as f64 * scale) as u32).max(1);

    let resized = if (new_width, new_height) == (crop_width, crop_height) {
        cropped
    } else {
        imageops::resize(&cropped, new_width, new_height, FilterType::Lanczos3)
    };

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    let offset_x = ((canvas_size - new_width) / 2) as i64;
    let offset_y = ((canvas_size - new_height) / 2) as i64;
    imageops::replace(&mut canvas, &resized, offset_x, offset_y);

    canvas
}
