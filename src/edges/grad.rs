//! Integer Sobel gradients on 8-bit images.
//!
//! - Convolves the 3×3 Sobel pair with border replication (clamped indices).
//! - Outputs per-pixel `gx`, `gy` and the L1 magnitude `|gx| + |gy|`, which
//!   is what the hysteresis thresholds are expressed in.
//!
//! Complexity: O(W·H); memory: three `i32` buffers.
use crate::image::{ImageU8, ImageView};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Per-pixel gradient buffers in row-major order (stride == `w`).
#[derive(Clone, Debug, Default)]
pub struct Grad {
    pub w: usize,
    pub h: usize,
    /// Horizontal derivative
    pub gx: Vec<i32>,
    /// Vertical derivative
    pub gy: Vec<i32>,
    /// L1 magnitude per pixel
    pub mag: Vec<i32>,
}

impl Grad {
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Magnitude with zero padding outside the image.
    #[inline]
    pub fn mag_or_zero(&self, x: isize, y: isize) -> i32 {
        if x < 0 || y < 0 || x >= self.w as isize || y >= self.h as isize {
            0
        } else {
            self.mag[y as usize * self.w + x as usize]
        }
    }
}

/// Compute Sobel gradients on an 8-bit view.
pub fn sobel_gradients(l: &ImageU8<'_>) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = vec![0i32; w * h];
    let mut gy = vec![0i32; w * h];
    let mut mag = vec![0i32; w * h];

    if w == 0 || h == 0 {
        return Grad { w, h, gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0i32;
            let mut sum_y = 0i32;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for (k, &xx) in x_idx.iter().enumerate() {
                    let sample = yy_row[xx] as i32;
                    sum_x += sample * kx_row[k];
                    sum_y += sample * ky_row[k];
                }
            }

            let idx = y * w + x;
            gx[idx] = sum_x;
            gy[idx] = sum_y;
            mag[idx] = sum_x.abs() + sum_y.abs();
        }
    }

    Grad { w, h, gx, gy, mag }
}
