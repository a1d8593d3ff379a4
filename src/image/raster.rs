//! Decoded input raster (the pipeline's entry type).
//!
//! Samples are 8-bit, channel-last, row-major. Supported layouts are gray
//! (1 channel), RGB (3) and RGBA (4, alpha ignored). Construction validates
//! the shape so the rest of the pipeline can assume a non-empty image.
use super::GrayImageU8;
use crate::error::InputError;
use serde::Serialize;

// Y = 0.299 R + 0.587 G + 0.114 B in 14-bit fixed point.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Channel layout of a [`RasterImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLayout {
    Gray,
    Rgb,
    Rgba,
}

impl ColorLayout {
    pub fn from_channels(channels: usize) -> Result<Self, InputError> {
        match channels {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(InputError::UnsupportedChannels(other)),
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RasterImage {
    width: usize,
    height: usize,
    layout: ColorLayout,
    data: Vec<u8>,
}

impl RasterImage {
    /// Validate and wrap a decoded buffer.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::EmptyImage { width, height });
        }
        let layout = ColorLayout::from_channels(channels)?;
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(InputError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Single-channel raster, already grayscale.
    pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Result<Self, InputError> {
        Self::new(width, height, 1, data)
    }

    /// Three-channel RGB raster.
    pub fn rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self, InputError> {
        Self::new(width, height, 3, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to grayscale. Gray input is copied as is; color input is
    /// weighted by the fixed luminance formula.
    pub fn to_gray(&self) -> GrayImageU8 {
        let data = match self.layout {
            ColorLayout::Gray => self.data.clone(),
            ColorLayout::Rgb | ColorLayout::Rgba => self
                .data
                .chunks_exact(self.channels())
                .map(|px| luminance(px[0], px[1], px[2]))
                .collect(),
        };
        GrayImageU8::from_raw(self.width, self.height, data)
    }
}

#[inline]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let acc = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
    ((acc + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_input() {
        let err = RasterImage::gray(0, 10, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            InputError::EmptyImage {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn rejects_two_channel_input() {
        let err = RasterImage::new(2, 2, 2, vec![0; 8]).unwrap_err();
        assert_eq!(err, InputError::UnsupportedChannels(2));
    }

    #[test]
    fn rejects_short_buffer() {
        let err = RasterImage::rgb(4, 4, vec![0; 47]).unwrap_err();
        assert_eq!(
            err,
            InputError::BufferSize {
                expected: 48,
                actual: 47
            }
        );
    }

    #[test]
    fn luminance_weights_match_rgb_to_gray() {
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 150);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn rgba_alpha_is_ignored() {
        let rgba = RasterImage::new(1, 2, 4, vec![255, 0, 0, 0, 255, 0, 0, 255]).unwrap();
        let gray = rgba.to_gray();
        assert_eq!(gray.data(), &[76, 76]);
    }
}
