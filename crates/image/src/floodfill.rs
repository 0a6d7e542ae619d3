//! Flood-fill background removal.
//!
//! Breadth-first traversal from the image corners that clears every
//! connected pixel matching the background color to fully transparent.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

/// Seed coordinates at the four corners of an image.
///
/// Corners may coincide on degenerate (1-wide or 1-tall) images; the
/// fill deduplicates them. Empty images yield no seeds.
pub fn corner_seeds(img: &RgbaImage) -> Vec<(u32, u32)> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    vec![
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ]
}

/// Clear background-colored pixels to transparent via flood fill.
///
/// Starting from `seeds`, a pixel is converted to `(0, 0, 0, 0)` and its
/// 4-connected neighbors enqueued iff its alpha is nonzero and each of its
/// RGB channels is strictly within `tolerance` of `background`. The check
/// is per-channel, not Euclidean: a pixel 39 away on every channel passes
/// at tolerance 40, one 41 away on a single channel does not.
///
/// Coordinates are marked visited when first discovered, so a pixel is
/// examined at most once even if several neighbors reach it. Already
/// transparent pixels are skipped and never propagate the fill. Seeds
/// outside the image bounds are ignored.
///
/// Returns the number of pixels converted to transparent.
pub fn flood_fill_transparent(
    img: &mut RgbaImage,
    seeds: &[(u32, u32)],
    background: Rgba<u8>,
    tolerance: u8,
) -> usize {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let len = width as usize * height as usize;
    let mut visited = vec![false; len];
    let mut queue = VecDeque::with_capacity((width as usize + height as usize) * 2);

    for &(x, y) in seeds {
        if x < width && y < height {
            enqueue(&mut queue, &mut visited, width, x, y);
        }
    }

    let mut cleared = 0;
    while let Some((x, y)) = queue.pop_front() {
        let pixel = *img.get_pixel(x, y);
        if pixel[3] == 0 {
            continue;
        }
        if !within_tolerance(&pixel, &background, tolerance) {
            continue;
        }

        img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        cleared += 1;

        if x > 0 {
            enqueue(&mut queue, &mut visited, width, x - 1, y);
        }
        if x + 1 < width {
            enqueue(&mut queue, &mut visited, width, x + 1, y);
        }
        if y > 0 {
            enqueue(&mut queue, &mut visited, width, x, y - 1);
        }
        if y + 1 < height {
            enqueue(&mut queue, &mut visited, width, x, y + 1);
        }
    }

    cleared
}

/// Check if each RGB channel of `pixel` is strictly within `tolerance`
/// of the background. Alpha is not compared.
#[inline]
fn within_tolerance(pixel: &Rgba<u8>, background: &Rgba<u8>, tolerance: u8) -> bool {
    pixel[0].abs_diff(background[0]) < tolerance
        && pixel[1].abs_diff(background[1]) < tolerance
        && pixel[2].abs_diff(background[2]) < tolerance
}

#[inline]
fn enqueue(queue: &mut VecDeque<(u32, u32)>, visited: &mut [bool], width: u32, x: u32, y: u32) {
    let idx = y as usize * width as usize + x as usize;
    if !visited[idx] {
        visited[idx] = true;
        queue.push_back((x, y));
    }
}
