//! I/O helpers for chart images and JSON.
//!
//! - `load_raster_image`: decode a PNG/JPEG into a [`RasterImage`], keeping
//!   gray inputs single-channel and color inputs RGB/RGBA.
//! - `save_gray_u8`: write an owned 8-bit gray buffer (e.g. an edge map) to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, ImageView, RasterImage};
use image::{ColorType, DynamicImage, GrayImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk without collapsing color channels.
pub fn load_raster_image(path: &Path) -> Result<RasterImage, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    raster_from_dynamic(img).map_err(|e| format!("Unusable image {}: {e}", path.display()))
}

/// Convert a decoded `image` buffer into the pipeline's raster type.
pub fn raster_from_dynamic(img: DynamicImage) -> Result<RasterImage, crate::InputError> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    match img.color() {
        ColorType::L8 | ColorType::L16 => {
            RasterImage::new(width, height, 1, img.into_luma8().into_raw())
        }
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            RasterImage::new(width, height, 3, img.into_rgb8().into_raw())
        }
        _ => RasterImage::new(width, height, 4, img.into_rgba8().into_raw()),
    }
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_gray_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
