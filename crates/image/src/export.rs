//! Fixed-size PNG variant export.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::{FaviconError, Result};

/// Default export sizes (square, in pixels).
pub const EXPORT_SIZES: [u32; 4] = [32, 180, 192, 512];

/// Render square variants of a composed canvas.
///
/// Every variant is resized independently from `canvas` with Lanczos3,
/// never cascaded from a previous downscale, so resampling error does not
/// compound. A variant matching the canvas size is a plain copy.
pub fn render_variants(canvas: &RgbaImage, sizes: &[u32]) -> Vec<(u32, RgbaImage)> {
    sizes
        .iter()
        .map(|&size| {
            let variant = if canvas.dimensions() == (size, size) {
                canvas.clone()
            } else {
                imageops::resize(canvas, size, size, FilterType::Lanczos3)
            };
            (size, variant)
        })
        .collect()
}

/// Derive the output path for a sized variant.
///
/// `public/favicon.png` at size 32 becomes `public/favicon-32x32.png`.
pub fn variant_path(primary: &Path, size: u32) -> PathBuf {
    let stem = primary
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    primary.with_file_name(format!("{stem}-{size}x{size}.png"))
}

/// Encode a buffer as PNG at `path`.
pub(crate) fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| FaviconError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the composed canvas and its sized variants next to `primary`.
///
/// The canvas itself is written at `primary`; each size in `sizes` is
/// written at [`variant_path`]. Writes are fail-fast: the first failure
/// aborts and earlier files remain on disk.
///
/// Returns the written paths, primary first.
pub fn write_variants(canvas: &RgbaImage, primary: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sizes.len() + 1);

    save_png(canvas, primary)?;
    written.push(primary.to_path_buf());

    for (size, variant) in render_variants(canvas, sizes) {
        let path = variant_path(primary, size);
        save_png(&variant, &path)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_renders_exact_size_set() {
        let canvas = RgbaImage::from_pixel(512, 512, Rgba([10, 20, 30, 255]));
        let variants = render_variants(&canvas, &EXPORT_SIZES);

        let sizes: Vec<u32> = variants.iter().map(|(s, _)| *s).collect();
        assert_eq!(sizes, vec![32, 180, 192, 512]);
        for (size, img) in &variants {
            assert_eq!(img.dimensions(), (*size, *size));
        }
    }

    #[test]
    fn test_same_size_variant_is_copy() {
        let mut canvas = RgbaImage::from_pixel(512, 512, Rgba([1, 2, 3, 255]));
        canvas.put_pixel(100, 100, Rgba([200, 100, 50, 128]));
        let variants = render_variants(&canvas, &[512]);
        assert_eq!(variants[0].1, canvas);
    }

    #[test]
    fn test_variant_path_naming() {
        let primary = Path::new("public/favicon.png");
        assert_eq!(
            variant_path(primary, 32),
            Path::new("public/favicon-32x32.png")
        );
        assert_eq!(
            variant_path(primary, 192),
            Path::new("public/favicon-192x192.png")
        );
    }

    #[test]
    fn test_variant_path_ignores_extension() {
        let primary = Path::new("icon.jpeg");
        assert_eq!(variant_path(primary, 180), Path::new("icon-180x180.png"));
    }

    #[test]
    fn test_write_variants_fail_fast() {
        let canvas = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let primary = Path::new("/nonexistent-dir/favicon.png");

        let err = write_variants(&canvas, primary, &[32]).unwrap_err();
        assert!(matches!(err, FaviconError::Encode { .. }));
    }

    #[test]
    fn test_write_variants_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("favicon.png");
        let canvas = RgbaImage::from_pixel(64, 64, Rgba([5, 6, 7, 255]));

        let written = write_variants(&canvas, &primary, &[32, 180]).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(written[0], primary);

        let small = image::open(&written[1]).unwrap().to_rgba8();
        assert_eq!(small.dimensions(), (32, 32));
        let touch = image::open(&written[2]).unwrap().to_rgba8();
        assert_eq!(touch.dimensions(), (180, 180));
    }
}
