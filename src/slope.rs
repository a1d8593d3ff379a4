//! Reduction of a slice's line segments to one `(slope, confidence)` pair.
//!
//! The slope is the plain arithmetic mean of the per-segment `dy / dx`
//! values; vertical segments have no slope and are skipped. Confidence is a
//! saturating count: a fixed number of points per usable segment, capped at
//! the maximum. It is not a statistical measure.
use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};

/// Confidence scoring knobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceParams {
    pub points_per_segment: f64,
    pub max_confidence: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            points_per_segment: 10.0,
            max_confidence: 100.0,
        }
    }
}

/// Average slope over the non-vertical segments of one slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeEstimate {
    pub slope: f64,
    pub confidence: f64,
    /// Number of non-vertical segments that contributed.
    pub segment_count: usize,
}

impl SlopeEstimate {
    pub const NONE: SlopeEstimate = SlopeEstimate {
        slope: 0.0,
        confidence: 0.0,
        segment_count: 0,
    };
}

/// Estimate with the default scoring (10 points per segment, capped at 100).
pub fn estimate_slope(segments: &[LineSegment]) -> SlopeEstimate {
    estimate_slope_with(segments, &ConfidenceParams::default())
}

pub fn estimate_slope_with(segments: &[LineSegment], params: &ConfidenceParams) -> SlopeEstimate {
    let (sum, count) = segments
        .iter()
        .filter_map(LineSegment::slope)
        .fold((0.0f64, 0usize), |(sum, n), s| (sum + s, n + 1));
    if count == 0 {
        return SlopeEstimate::NONE;
    }
    let confidence = (count as f64 * params.points_per_segment)
        .min(params.max_confidence)
        .max(0.0);
    SlopeEstimate {
        slope: sum / count as f64,
        confidence,
        segment_count: count,
    }
}
