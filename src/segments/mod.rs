//! Line segment finder for binary edge maps.
//!
//! Implements the progressive probabilistic Hough transform:
//!
//! - Every non-zero pixel of the view is a candidate. Candidates are drawn in
//!   a random order from a generator seeded by [`HoughParams::seed`], so a
//!   given view always yields the same segments.
//! - A drawn pixel votes for all `(ρ, θ)` lines through it. When its best bin
//!   reaches [`HoughParams::threshold`], the line is traced from the pixel in
//!   both directions, tolerating runs of up to `max_line_gap` missing pixels.
//! - The traced pixels are removed from further consideration. If the traced
//!   extent reaches `min_line_length` along x or y, the segment is reported
//!   and its pixels' votes are withdrawn from the accumulator.
//!
//! Coordinates are local to the view; a cropped view of an edge map yields
//! segments relative to the crop origin. An empty view, or one without any
//! line clearing the threshold, yields no segments.
//!
//! Complexity: O(N·A) votes for N edge pixels and A angle bins, plus linear
//! tracing work per accepted line.

mod hough;
mod options;
mod segment;

pub use options::HoughParams;
pub use segment::LineSegment;

use crate::image::ImageU8;

/// Detect line segments in the non-zero pixels of `view`.
pub fn find_segments(view: &ImageU8<'_>, params: &HoughParams) -> Vec<LineSegment> {
    hough::HoughExtractor::new(view, params).extract()
}
