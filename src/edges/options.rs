use serde::{Deserialize, Serialize};

/// Knobs for the edge extraction stage.
///
/// Thresholds are L1 Sobel magnitudes (`|gx| + |gy|`) on the smoothed 8-bit
/// image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Apply the 5×5 Gaussian before gradient computation.
    pub blur: bool,
    /// Hysteresis lower bound; magnitudes at or below are discarded.
    pub low_threshold: i32,
    /// Hysteresis upper bound; magnitudes above seed edges.
    pub high_threshold: i32,
    /// Number of 3×3 dilation passes applied to the Canny output.
    pub dilate_iterations: usize,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            blur: true,
            low_threshold: 50,
            high_threshold: 150,
            dilate_iterations: 1,
        }
    }
}
