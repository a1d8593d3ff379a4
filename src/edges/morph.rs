//! Binary morphology on 8-bit maps.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Dilate with a 3×3 all-ones structuring element, `iterations` times.
///
/// Each output pixel is the maximum over its in-bounds 3×3 neighbourhood;
/// pixels outside the image never contribute.
pub fn dilate3x3(src: &GrayImageU8, iterations: usize) -> GrayImageU8 {
    let mut current = src.clone();
    for _ in 0..iterations {
        current = dilate_once(&current);
    }
    current
}

fn dilate_once(src: &GrayImageU8) -> GrayImageU8 {
    let (w, h) = (src.width(), src.height());
    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(w - 1);
            let mut m = 0u8;
            for yy in y0..=y1 {
                let row = src.row(yy);
                for &v in &row[x0..=x1] {
                    m = m.max(v);
                }
            }
            *dst_px = m;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_grows_to_block() {
        let mut img = GrayImageU8::new(5, 5);
        img.set(2, 2, 255);
        let out = dilate3x3(&img, 1);
        let lit: usize = out.data().iter().filter(|&&v| v == 255).count();
        assert_eq!(lit, 9);
        assert_eq!(out.get(1, 1), 255);
        assert_eq!(out.get(0, 0), 0);
    }

    #[test]
    fn corner_pixel_stays_in_bounds() {
        let mut img = GrayImageU8::new(3, 3);
        img.set(0, 0, 255);
        let out = dilate3x3(&img, 1);
        assert_eq!(out.data(), &[255, 255, 0, 255, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let mut img = GrayImageU8::new(4, 4);
        img.set(3, 1, 255);
        assert_eq!(dilate3x3(&img, 0), img);
    }
}
