//! Deterministic snapshot-to-pixels conversion used for image export.
//!
//! Each cell becomes a `cell_size` x `cell_size` square. Unset cells take
//! the background color, so the output is always fully opaque.

use image::RgbaImage;
use rayon::prelude::*;

use super::{Cell, Color, GridError, Snapshot};

/// RGBA8 pixel buffer produced by the rasterizer
pub type PixelBuffer = RgbaImage;

/// Background substituted for unset cells
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// Rasterize onto the default white background (serial)
pub fn rasterize(
    snapshot: &Snapshot,
    width: usize,
    height: usize,
    cell_size: usize,
) -> Result<PixelBuffer, GridError> {
    rasterize_with_background(snapshot, width, height, cell_size, DEFAULT_BACKGROUND)
}

pub fn rasterize_with_background(
    snapshot: &Snapshot,
    width: usize,
    height: usize,
    cell_size: usize,
    background: Color,
) -> Result<PixelBuffer, GridError> {
    let (px_width, px_height) = checked_image_size(snapshot, width, height, cell_size)?;
    let mut image = RgbaImage::new(px_width, px_height);

    let row_bytes = px_width as usize * 4;
    let buffer: &mut [u8] = &mut image;
    buffer
        .chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| fill_row(row, snapshot.cells(), width, cell_size, py, background));

    Ok(image)
}

/// Parallel rasterization using rayon; output is identical to [`rasterize`].
/// Worth it for large grids or big export scales.
pub fn rasterize_parallel(
    snapshot: &Snapshot,
    width: usize,
    height: usize,
    cell_size: usize,
) -> Result<PixelBuffer, GridError> {
    rasterize_parallel_with_background(snapshot, width, height, cell_size, DEFAULT_BACKGROUND)
}

pub fn rasterize_parallel_with_background(
    snapshot: &Snapshot,
    width: usize,
    height: usize,
    cell_size: usize,
    background: Color,
) -> Result<PixelBuffer, GridError> {
    let (px_width, px_height) = checked_image_size(snapshot, width, height, cell_size)?;
    let mut image = RgbaImage::new(px_width, px_height);

    let row_bytes = px_width as usize * 4;
    let buffer: &mut [u8] = &mut image;
    buffer
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| fill_row(row, snapshot.cells(), width, cell_size, py, background));

    Ok(image)
}

/// Fill one pixel row from the cell row it crosses
#[inline]
fn fill_row(
    row: &mut [u8],
    cells: &[Cell],
    width: usize,
    cell_size: usize,
    py: usize,
    background: Color,
) {
    let cell_row = &cells[(py / cell_size) * width..][..width];
    for (pixels, cell) in row.chunks_exact_mut(cell_size * 4).zip(cell_row) {
        let rgba = cell.color_or(background).to_rgba();
        pixels
            .chunks_exact_mut(4)
            .for_each(|px| px.copy_from_slice(&rgba));
    }
}

fn checked_image_size(
    snapshot: &Snapshot,
    width: usize,
    height: usize,
    cell_size: usize,
) -> Result<(u32, u32), GridError> {
    let invalid = GridError::InvalidDimensions { width, height };
    if width == 0 || height == 0 || cell_size == 0 {
        return Err(invalid);
    }

    let expected = width.checked_mul(height).ok_or(invalid.clone())?;
    if snapshot.len() != expected {
        return Err(GridError::SizeMismatch {
            expected,
            actual: snapshot.len(),
        });
    }

    let px = |cells: usize| {
        cells
            .checked_mul(cell_size)
            .and_then(|n| u32::try_from(n).ok())
    };
    match (px(width), px(height)) {
        (Some(w), Some(h)) if (w as usize).checked_mul(h as usize * 4).is_some() => Ok((w, h)),
        _ => Err(invalid),
    }
}
