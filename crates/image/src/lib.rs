//! Favicon post-processing utilities.
//!
//! This crate provides:
//! - Background color detection and corner alpha inspection
//! - Flood-fill background removal with a per-channel color tolerance
//! - Opaque-content bounding box detection with margin expansion
//! - Crop + centered resize onto a transparent square canvas
//! - Fixed-size PNG variant export (32, 180, 192, 512)

#![warn(missing_docs)]

mod bbox;
mod compose;
mod detect;
mod error;
mod export;
mod floodfill;
mod pipeline;

pub use bbox::{BoundingBox, opaque_bounding_box};
pub use compose::crop_and_center;
pub use detect::{AlphaReport, CornerSample, background_color, inspect_alpha};
pub use error::{FaviconError, Result};
pub use export::{EXPORT_SIZES, render_variants, variant_path, write_variants};
pub use floodfill::{corner_seeds, flood_fill_transparent};
pub use pipeline::{CleanOptions, CleanReport, clean_favicon, crop_favicon};
