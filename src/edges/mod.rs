//! Edge map extraction: grayscale → Gaussian smoothing → Canny → dilation.
//!
//! - [`blur`]: separable 5-tap Gaussian with reflect-101 borders.
//! - [`grad`]: integer Sobel gradients with L1 magnitude.
//! - [`canny`]: non-maximum suppression and hysteresis thresholding.
//! - [`morph`]: 3×3 dilation closing one-pixel gaps between edge fragments.
//!
//! The output is an [`EdgeMap`] holding 0/255 samples with the dimensions of
//! the input raster. Extraction is a pure function of the input.

pub mod blur;
pub mod canny;
pub mod grad;
pub mod morph;
mod options;

pub use canny::EDGE;
pub use grad::{sobel_gradients, Grad};
pub use options::EdgeParams;

use crate::image::{GrayImageU8, ImageU8, ImageView, RasterImage};
use crate::regions::Region;
use blur::{blur_u8, GAUSSIAN_5TAP};
use log::debug;

/// Binary edge map (0 or 255 per pixel), immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    map: GrayImageU8,
}

impl EdgeMap {
    /// Wrap an arbitrary gray buffer, mapping every non-zero sample to 255.
    pub fn from_gray(gray: GrayImageU8) -> Self {
        let (w, h) = (gray.width(), gray.height());
        let data = gray
            .into_raw()
            .into_iter()
            .map(|v| if v != 0 { EDGE } else { 0 })
            .collect();
        Self {
            map: GrayImageU8::from_raw(w, h, data),
        }
    }

    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.map.get(x, y) != 0
    }

    pub fn edge_count(&self) -> usize {
        self.map.data().iter().filter(|&&v| v != 0).count()
    }

    pub fn view(&self) -> ImageU8<'_> {
        self.map.as_view()
    }

    /// Borrow the pixels inside `region`, in region-local coordinates.
    pub fn region_view(&self, region: &Region) -> ImageU8<'_> {
        self.map
            .as_view()
            .crop(region.x1, region.y1, region.x2, region.y2)
    }

    pub fn as_gray(&self) -> &GrayImageU8 {
        &self.map
    }
}

/// Build the edge map of a validated raster.
pub fn extract_edges(image: &RasterImage, params: &EdgeParams) -> EdgeMap {
    let gray = image.to_gray();
    extract_edges_gray(&gray, params)
}

/// Edge extraction for input that is already single-channel.
pub fn extract_edges_gray(gray: &GrayImageU8, params: &EdgeParams) -> EdgeMap {
    let smoothed;
    let source = if params.blur {
        smoothed = blur_u8(&gray.as_view(), &GAUSSIAN_5TAP);
        &smoothed
    } else {
        gray
    };
    let edges = canny::canny(
        &source.as_view(),
        params.low_threshold,
        params.high_threshold,
    );
    let map = EdgeMap {
        map: morph::dilate3x3(&edges, params.dilate_iterations),
    };
    debug!(
        "edges: {}x{} -> {} edge pixels (canny {}/{}, dilate x{})",
        map.width(),
        map.height(),
        map.edge_count(),
        params.low_threshold,
        params.high_threshold,
        params.dilate_iterations
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_yields_empty_map() {
        let raster = RasterImage::gray(600, 100, vec![0; 600 * 100]).unwrap();
        let edges = extract_edges(&raster, &EdgeParams::default());
        assert_eq!((edges.width(), edges.height()), (600, 100));
        assert_eq!(edges.edge_count(), 0);
    }

    #[test]
    fn rgb_input_matches_gray_dimensions() {
        let (w, h) = (40usize, 30usize);
        let mut data = vec![0u8; w * h * 3];
        for y in 0..h {
            for x in 20..w {
                let i = (y * w + x) * 3;
                data[i..i + 3].copy_from_slice(&[255, 255, 255]);
            }
        }
        let raster = RasterImage::rgb(w, h, data).unwrap();
        let edges = extract_edges(&raster, &EdgeParams::default());
        assert_eq!((edges.width(), edges.height()), (w, h));
        assert!(edges.edge_count() > 0);
        assert!(edges.view().rows().flatten().all(|&v| v == 0 || v == EDGE));
        // the step edge is found near x = 20 and dilated, nowhere else
        assert!(edges.is_edge(19, 15));
        assert!(!edges.is_edge(5, 15));
        assert!(!edges.is_edge(35, 15));
    }

    #[test]
    fn from_gray_binarizes() {
        let gray = GrayImageU8::from_raw(3, 1, vec![0, 1, 200]);
        let edges = EdgeMap::from_gray(gray);
        assert_eq!(edges.view().row(0), &[0, 255, 255]);
    }
}
