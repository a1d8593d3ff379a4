//! Canny edge detection: non-maximum suppression plus hysteresis.
//!
//! Gradients come from [`sobel_gradients`](super::grad::sobel_gradients) with
//! L1 magnitude. A pixel survives suppression when its magnitude exceeds the
//! low threshold and dominates its two neighbours along the gradient
//! direction, quantized to 0°, 45°, 90° or 135°. Survivors above the high
//! threshold seed the edge set, which then grows through 8-connected
//! survivors.
//!
//! Magnitudes outside the image count as zero during suppression, so border
//! pixels can be edges.
use super::grad::{sobel_gradients, Grad};
use crate::image::{GrayImageU8, ImageU8};

const TAN_22_5_DEG: f64 = 0.414_213_562_373_095_05;

pub const EDGE: u8 = 255;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Candidate {
    None,
    Weak,
    Strong,
}

/// Run Canny on an 8-bit view and return a 0/255 map of the same size.
///
/// `low` and `high` are L1 gradient magnitudes; they are swapped when given
/// in the wrong order.
pub fn canny(src: &ImageU8<'_>, low: i32, high: i32) -> GrayImageU8 {
    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let grad = sobel_gradients(src);
    let candidates = suppress_non_maxima(&grad, low, high);
    hysteresis(&grad, &candidates)
}

fn suppress_non_maxima(grad: &Grad, low: i32, high: i32) -> Vec<Candidate> {
    let (w, h) = (grad.w, grad.h);
    let mut out = vec![Candidate::None; w * h];
    for y in 0..h {
        for x in 0..w {
            let idx = grad.idx(x, y);
            let m = grad.mag[idx];
            if m <= low {
                continue;
            }
            let (xi, yi) = (x as isize, y as isize);
            let dx = grad.gx[idx];
            let dy = grad.gy[idx];
            let ax = dx.abs() as f64;
            let ay = dy.abs() as f64;
            let tg22x = ax * TAN_22_5_DEG;
            // tan(67.5°) = tan(22.5°) + 2
            let tg67x = tg22x + 2.0 * ax;

            let is_max = if ay < tg22x {
                m > grad.mag_or_zero(xi - 1, yi) && m >= grad.mag_or_zero(xi + 1, yi)
            } else if ay > tg67x {
                m > grad.mag_or_zero(xi, yi - 1) && m >= grad.mag_or_zero(xi, yi + 1)
            } else {
                let s: isize = if (dx ^ dy) < 0 { -1 } else { 1 };
                m > grad.mag_or_zero(xi - s, yi - 1) && m > grad.mag_or_zero(xi + s, yi + 1)
            };
            if !is_max {
                continue;
            }
            out[idx] = if m > high {
                Candidate::Strong
            } else {
                Candidate::Weak
            };
        }
    }
    out
}

fn hysteresis(grad: &Grad, candidates: &[Candidate]) -> GrayImageU8 {
    let (w, h) = (grad.w, grad.h);
    let mut map = GrayImageU8::new(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if candidates[grad.idx(x, y)] == Candidate::Strong {
                map.set(x, y, EDGE);
                stack.push((x, y));
            }
        }
    }

    while let Some((x, y)) = stack.pop() {
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                if map.get(nx, ny) == EDGE {
                    continue;
                }
                if candidates[grad.idx(nx, ny)] == Candidate::Weak {
                    map.set(nx, ny, EDGE);
                    stack.push((nx, ny));
                }
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(width: usize, height: usize, split_x: usize, hi: u8) -> GrayImageU8 {
        let mut img = GrayImageU8::new(width, height);
        for y in 0..height {
            for x in split_x..width {
                img.set(x, y, hi);
            }
        }
        img
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImageU8::from_raw(16, 16, vec![80; 256]);
        let edges = canny(&img.as_view(), 50, 150);
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn strong_step_yields_thin_vertical_edge() {
        let img = step_image(16, 12, 8, 200);
        let edges = canny(&img.as_view(), 50, 150);
        for y in 0..12 {
            let row: Vec<usize> = (0..16).filter(|&x| edges.get(x, y) == EDGE).collect();
            assert_eq!(row, vec![7], "row {y} edge columns {row:?}");
        }
    }

    #[test]
    fn weak_step_below_high_threshold_is_dropped() {
        // L1 magnitude of a 30-level step is 4 * 30 = 120: weak but never strong.
        let img = step_image(16, 12, 8, 30);
        let edges = canny(&img.as_view(), 50, 150);
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn weak_pixels_connected_to_strong_are_kept() {
        // Top half strong (200), bottom half weak (30): the weak part is
        // 8-connected to the strong column and survives.
        let mut img = GrayImageU8::new(16, 12);
        for y in 0..12 {
            let hi = if y < 6 { 200 } else { 30 };
            for x in 8..16 {
                img.set(x, y, hi);
            }
        }
        let edges = canny(&img.as_view(), 20, 150);
        assert_eq!(edges.get(7, 0), EDGE);
        assert_eq!(edges.get(7, 11), EDGE);
    }
}
