//! Parameter types configuring the analysis stages.
//!
//! Defaults reproduce the reference heuristic: 5×5 Gaussian, Canny 50/150,
//! one 3×3 dilation, Hough with 1 px / 1° resolution, 50 votes, 20 px minimum
//! length, 10 px maximum gap, and 10 confidence points per segment capped at
//! 100. Every struct deserializes with defaults so JSON configs may override
//! any subset.
use crate::edges::EdgeParams;
use crate::segments::HoughParams;
use crate::slope::ConfidenceParams;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Grayscale smoothing, Canny and dilation settings.
    pub edges: EdgeParams,
    /// Probabilistic Hough settings applied to every timeframe slice.
    pub hough: HoughParams,
    /// Segment-count confidence scoring.
    pub confidence: ConfidenceParams,
}

impl AnalyzerParams {
    /// Reject settings the segment finder cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        self.hough.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let p = AnalyzerParams::default();
        assert!(p.edges.blur);
        assert_eq!((p.edges.low_threshold, p.edges.high_threshold), (50, 150));
        assert_eq!(p.edges.dilate_iterations, 1);
        assert_eq!(p.hough.rho, 1.0);
        assert!((p.hough.theta - std::f64::consts::PI / 180.0).abs() < 1e-15);
        assert_eq!(p.hough.threshold, 50);
        assert_eq!(p.hough.min_line_length, 20);
        assert_eq!(p.hough.max_line_gap, 10);
        assert_eq!(p.confidence.points_per_segment, 10.0);
        assert_eq!(p.confidence.max_confidence, 100.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: AnalyzerParams =
            serde_json::from_str(r#"{ "hough": { "threshold": 30 }, "edges": { "blur": false } }"#)
                .unwrap();
        assert_eq!(p.hough.threshold, 30);
        assert_eq!(p.hough.min_line_length, 20);
        assert!(!p.edges.blur);
        assert_eq!(p.edges.high_threshold, 150);
    }

    #[test]
    fn zero_theta_fails_validation() {
        let p: AnalyzerParams = serde_json::from_str(r#"{ "hough": { "theta": 0.0 } }"#).unwrap();
        assert!(p.validate().is_err());
        assert!(AnalyzerParams::default().validate().is_ok());
    }
}
