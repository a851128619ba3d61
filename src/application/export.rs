//! PNG encoding of rasterized grids.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use thiserror::Error;

use crate::domain::{GridError, PixelBuffer};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Encode a pixel buffer as PNG bytes
pub fn encode_png(pixels: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(pixels.clone()).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Write a pixel buffer to `path` as a PNG file
pub fn save_png(pixels: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = encode_png(pixels)?;
    std::fs::write(path, bytes)?;
    tracing::info!(
        "Exported {}x{} image to {:?}",
        pixels.width(),
        pixels.height(),
        path
    );
    Ok(())
}
