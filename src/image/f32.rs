use super::traits::{ImageView, ImageViewMut};

/// Scratch buffer for the horizontal pass of the separable blur.
///
/// Row-major and tightly packed, so a pixel lives at `y * w + x`.
#[derive(Clone, Debug)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl ImageF32 {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    fn width(&self) -> usize {
        self.w
    }
    fn height(&self) -> usize {
        self.h
    }
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}
