use super::options::HoughParams;
use super::segment::LineSegment;
use crate::image::{ImageU8, ImageView};
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

// Fixed-point precision used when stepping along a traced line.
const SHIFT: u32 = 16;

/// (ρ, θ) vote accumulator with precomputed trigonometry.
struct Accumulator {
    num_angle: usize,
    num_rho: usize,
    votes: Vec<i32>,
    /// `(cos θ / ρ_res, sin θ / ρ_res)` per angle bin.
    trig: Vec<(f64, f64)>,
}

impl Accumulator {
    /// `None` when the bin count does not fit in memory.
    fn new(w: usize, h: usize, params: &HoughParams) -> Option<Self> {
        let num_angle = ((PI / params.theta).round() as usize).max(1);
        let num_rho = ((((w + h) * 2 + 1) as f64 / params.rho).round() as usize).max(1);
        let cells = num_angle
            .checked_mul(num_rho)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<(f64, f64)>())?;
        let irho = 1.0 / params.rho;
        let trig = (0..num_angle)
            .map(|n| {
                let ang = n as f64 * params.theta;
                (ang.cos() * irho, ang.sin() * irho)
            })
            .collect();
        Some(Self {
            num_angle,
            num_rho,
            votes: vec![0; cells],
            trig,
        })
    }

    #[inline]
    fn bin(&self, n: usize, x: usize, y: usize) -> usize {
        let (c, s) = self.trig[n];
        let r = (x as f64 * c + y as f64 * s).round() as i64 + (self.num_rho as i64 - 1) / 2;
        n * self.num_rho + r as usize
    }

    /// Add the votes of pixel `(x, y)`; returns the best `(votes, angle bin)`.
    fn vote(&mut self, x: usize, y: usize) -> (i32, usize) {
        let mut best = (i32::MIN, 0);
        for n in 0..self.num_angle {
            let b = self.bin(n, x, y);
            self.votes[b] += 1;
            if self.votes[b] > best.0 {
                best = (self.votes[b], n);
            }
        }
        best
    }

    fn unvote(&mut self, x: usize, y: usize) {
        for n in 0..self.num_angle {
            let b = self.bin(n, x, y);
            self.votes[b] -= 1;
        }
    }
}

/// Pixel walk along a line in 16.16 fixed point, stopping at the view border.
#[derive(Clone, Copy)]
struct LineWalk {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    /// When set, `x` is integral and `y` carries the fraction.
    x_major: bool,
    w: i64,
    h: i64,
}

impl LineWalk {
    fn reversed(mut self) -> Self {
        self.dx = -self.dx;
        self.dy = -self.dy;
        self
    }
}

impl Iterator for LineWalk {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (px, py) = if self.x_major {
            (self.x, self.y >> SHIFT)
        } else {
            (self.x >> SHIFT, self.y)
        };
        if px < 0 || px >= self.w || py < 0 || py >= self.h {
            return None;
        }
        self.x += self.dx;
        self.y += self.dy;
        Some((px as usize, py as usize))
    }
}

/// Progressive probabilistic Hough transform over the non-zero pixels of a view.
///
/// Pixels are visited in a seeded random order. Each visited pixel votes in
/// the accumulator; once its best bin reaches the threshold the line through
/// it is traced in both directions across the mask, bridging gaps of up to
/// `max_line_gap` pixels. Traced pixels leave the mask, and when the segment
/// is long enough their votes are withdrawn as well.
pub(crate) struct HoughExtractor<'a> {
    view: &'a ImageU8<'a>,
    params: &'a HoughParams,
}

impl<'a> HoughExtractor<'a> {
    pub(crate) fn new(view: &'a ImageU8<'a>, params: &'a HoughParams) -> Self {
        Self { view, params }
    }

    pub(crate) fn extract(&self) -> Vec<LineSegment> {
        let (w, h) = (self.view.width(), self.view.height());
        if w == 0 || h == 0 {
            return Vec::new();
        }
        let params = self.params;
        if let Err(err) = params.validate() {
            warn!("segment search skipped: {err}");
            return Vec::new();
        }
        let max_lines = params.max_lines.unwrap_or(usize::MAX);
        if max_lines == 0 {
            return Vec::new();
        }

        let mut mask = vec![false; w * h];
        let mut points = Vec::new();
        for y in 0..h {
            for (x, &v) in self.view.row(y).iter().enumerate() {
                if v != 0 {
                    mask[y * w + x] = true;
                    points.push((x, y));
                }
            }
        }

        let Some(mut acc) = Accumulator::new(w, h, params) else {
            warn!(
                "segment search skipped: accumulator for {w}x{h} at rho={} theta={} is too large",
                params.rho, params.theta
            );
            return Vec::new();
        };
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut segments = Vec::new();

        while !points.is_empty() {
            let idx = rng.random_range(0..points.len());
            let (x, y) = points.swap_remove(idx);
            if !mask[y * w + x] {
                continue;
            }

            let (max_votes, max_n) = acc.vote(x, y);
            if max_votes < params.threshold {
                continue;
            }

            let walk = self.walk_from(&acc, max_n, x, y);
            let mut line_end = [(x, y); 2];
            for (k, dir) in [walk, walk.reversed()].into_iter().enumerate() {
                let mut gap = 0;
                for (px, py) in dir {
                    if mask[py * w + px] {
                        gap = 0;
                        line_end[k] = (px, py);
                    } else {
                        gap += 1;
                        if gap > params.max_line_gap {
                            break;
                        }
                    }
                }
            }

            let ext_x = (line_end[1].0 as i32 - line_end[0].0 as i32).abs();
            let ext_y = (line_end[1].1 as i32 - line_end[0].1 as i32).abs();
            let good_line = ext_x >= params.min_line_length || ext_y >= params.min_line_length;

            for (k, dir) in [walk, walk.reversed()].into_iter().enumerate() {
                for (px, py) in dir {
                    let i = py * w + px;
                    if mask[i] {
                        if good_line {
                            acc.unvote(px, py);
                        }
                        mask[i] = false;
                    }
                    if (px, py) == line_end[k] {
                        break;
                    }
                }
            }

            if good_line {
                segments.push(LineSegment::new(
                    line_end[0].0 as i32,
                    line_end[0].1 as i32,
                    line_end[1].0 as i32,
                    line_end[1].1 as i32,
                ));
                if segments.len() >= max_lines {
                    break;
                }
            }
        }

        segments
    }

    fn walk_from(&self, acc: &Accumulator, n: usize, x: usize, y: usize) -> LineWalk {
        let (cos_t, sin_t) = acc.trig[n];
        // direction along the line is perpendicular to the normal (cos, sin)
        let a = -sin_t;
        let b = cos_t;
        let (x0, y0) = (x as i64, y as i64);
        let one = (1i64 << SHIFT) as f64;
        let half = 1i64 << (SHIFT - 1);
        let (x_major, dx, dy, x, y) = if a.abs() > b.abs() {
            let dx = if a > 0.0 { 1 } else { -1 };
            let dy = (b * one / a.abs()).round() as i64;
            (true, dx, dy, x0, (y0 << SHIFT) + half)
        } else {
            let dy = if b > 0.0 { 1 } else { -1 };
            let dx = (a * one / b.abs()).round() as i64;
            (false, dx, dy, (x0 << SHIFT) + half, y0)
        };
        LineWalk {
            x,
            y,
            dx,
            dy,
            x_major,
            w: self.view.width() as i64,
            h: self.view.height() as i64,
        }
    }
}
