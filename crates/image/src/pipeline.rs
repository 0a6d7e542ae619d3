//! End-to-end favicon processing pipelines.
//!
//! Two file-level drivers: [`clean_favicon`] removes an edge-connected
//! background before cropping and exporting, [`crop_favicon`] crops and
//! exports an image that is already transparent where it should be.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::bbox::{BoundingBox, opaque_bounding_box};
use crate::compose::crop_and_center;
use crate::detect::background_color;
use crate::error::{FaviconError, Result};
use crate::export::{EXPORT_SIZES, write_variants};
use crate::floodfill::{corner_seeds, flood_fill_transparent};

/// Tunables for the favicon pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Per-channel color tolerance for flood-fill background matching
    pub tolerance: u8,
    /// Alpha cutoff for the content bounding box scan
    pub alpha_threshold: u8,
    /// Margin in pixels added around the detected content box
    pub margin: u32,
    /// Side length of the square output canvas
    pub canvas_size: u32,
    /// Square sizes to export
    pub export_sizes: Vec<u32>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            tolerance: 40,
            alpha_threshold: 100,
            margin: 2,
            canvas_size: 512,
            export_sizes: EXPORT_SIZES.to_vec(),
        }
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Source image width in pixels
    pub width: u32,
    /// Source image height in pixels
    pub height: u32,
    /// Detected background color, when background removal ran
    pub background: Option<[u8; 4]>,
    /// Number of pixels converted to transparent
    pub cleared_pixels: usize,
    /// Bounding box of the retained content (margin included)
    pub content_box: BoundingBox,
    /// Output files written, primary first
    pub outputs: Vec<PathBuf>,
}

/// Decode an image file into an RGBA buffer.
pub(crate) fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| FaviconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Remove the background of a favicon, crop to content, and export.
///
/// Decodes `input`, samples the background at the origin, flood-fills it
/// to transparency from all four corners, crops to the opaque content
/// box, re-composes centered on a transparent canvas, and writes the
/// canvas plus sized variants derived from `output`.
///
/// Fails with [`FaviconError::EmptyContent`] when nothing remains above
/// the alpha threshold after background removal; no files are written in
/// that case.
pub fn clean_favicon(input: &Path, output: &Path, options: &CleanOptions) -> Result<CleanReport> {
    let mut img = open_rgba(input)?;
    let (width, height) = img.dimensions();

    let background = background_color(&img);
    let seeds = corner_seeds(&img);
    let cleared = flood_fill_transparent(&mut img, &seeds, background, options.tolerance);

    let (canvas, content_box) = compose(&img, options)?;
    let outputs = write_variants(&canvas, output, &options.export_sizes)?;

    Ok(CleanReport {
        width,
        height,
        background: Some(background.0),
        cleared_pixels: cleared,
        content_box,
        outputs,
    })
}

/// Crop a favicon to its opaque content and export, without background
/// removal.
///
/// For sources that already have a transparent backdrop but carry soft
/// shadow halos or excess padding the canvas should not keep.
pub fn crop_favicon(input: &Path, output: &Path, options: &CleanOptions) -> Result<CleanReport> {
    let img = open_rgba(input)?;
    let (width, height) = img.dimensions();

    let (canvas, content_box) = compose(&img, options)?;
    let outputs = write_variants(&canvas, output, &options.export_sizes)?;

    Ok(CleanReport {
        width,
        height,
        background: None,
        cleared_pixels: 0,
        content_box,
        outputs,
    })
}

fn compose(img: &RgbaImage, options: &CleanOptions) -> Result<(RgbaImage, BoundingBox)> {
    let content_box = opaque_bounding_box(img, options.alpha_threshold, options.margin)?;
    let canvas = crop_and_center(img, content_box, options.canvas_size);
    Ok((canvas, content_box))
}
