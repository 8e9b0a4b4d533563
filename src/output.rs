//! PNG output: expanding an index grid through the display palette,
//! integer upscaling, and saving.

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::grid::IndexGrid;

/// The 16-color display palette, RGBA. Index 0 is transparent; the
/// remaining entries are the classic handheld-console colors the shade
/// tables were tuned against.
pub const DISPLAY_PALETTE: [[u8; 4]; 16] = [
    [0x00, 0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF, 0xFF],
    [0xFF, 0x21, 0x21, 0xFF],
    [0xFF, 0x93, 0xC4, 0xFF],
    [0xFF, 0x81, 0x35, 0xFF],
    [0xFF, 0xF6, 0x09, 0xFF],
    [0x24, 0x9C, 0xA3, 0xFF],
    [0x78, 0xDC, 0x52, 0xFF],
    [0x00, 0x3F, 0xAD, 0xFF],
    [0x87, 0xF2, 0xFF, 0xFF],
    [0x8E, 0x2E, 0xC4, 0xFF],
    [0xA4, 0x83, 0x9F, 0xFF],
    [0x5C, 0x40, 0x6C, 0xFF],
    [0xE5, 0xCD, 0xC4, 0xFF],
    [0x91, 0x46, 0x3D, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
];

/// Error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Expand a grid of color indices into an RGBA image via
/// [`DISPLAY_PALETTE`].
pub fn render_image(grid: &IndexGrid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let index = grid.get(x as i32, y as i32).unwrap_or(0);
            image.put_pixel(x as u32, y as u32, Rgba(DISPLAY_PALETTE[index as usize]));
        }
    }
    image
}

/// Scale image by an integer factor using nearest-neighbor
/// interpolation, preserving crisp pixel edges.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(
        &image,
        w * factor as u32,
        h * factor as u32,
        FilterType::Nearest,
    )
}

/// Save an RGBA image to a PNG file, creating parent directories as
/// needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}
