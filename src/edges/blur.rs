//! Separable smoothing of 8-bit gray images.
//!
//! The kernel is applied as a horizontal pass into an `ImageF32` followed by
//! a vertical pass that rounds back to `u8`. Borders are reflected without
//! repeating the edge sample (`gfedcb|abcdefgh|gfedcba`).
use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre and of odd length.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
///
/// This is the fixed kernel used for a 5×5 Gaussian when sigma is derived
/// from the kernel size.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Smooth `src` with the separable `filter` applied along both axes.
pub fn blur_u8<F: SeparableFilter>(src: &ImageU8<'_>, filter: &F) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let taps = filter.taps();
    assert!(
        taps.len() % 2 == 1,
        "separable filter must have an odd number of taps"
    );
    let radius = (taps.len() / 2) as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx] as f32;
            }
            *dst_px = acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = reflect_101(y as isize + k as isize - radius, h);
                acc += tap * horiz.get(x, sy);
            }
            *dst_px = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

fn reflect_101(mut idx: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if idx < 0 {
            idx = -idx;
        } else if idx > last {
            idx = 2 * last - idx;
        } else {
            return idx as usize;
        }
    }
}
