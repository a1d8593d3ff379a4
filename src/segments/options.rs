use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough segment finder.
///
/// - `rho`: distance resolution of the accumulator in pixels.
/// - `theta`: angular resolution in radians.
/// - `threshold`: minimum accumulator votes before a line is traced.
/// - `min_line_length`: segments whose x- and y-extent are both shorter are
///   discarded.
/// - `max_line_gap`: consecutive empty pixels tolerated while tracing.
/// - `max_lines`: optional cap on the number of returned segments.
/// - `seed`: seed for the random pixel order; a fixed seed makes detection
///   reproducible.
///
/// `rho` and `theta` must be finite and positive and `threshold` at least 1;
/// see [`HoughParams::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    pub rho: f64,
    pub theta: f64,
    pub threshold: i32,
    pub min_line_length: i32,
    pub max_line_gap: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta: std::f64::consts::PI / 180.0,
            threshold: 50,
            min_line_length: 20,
            max_line_gap: 10,
            max_lines: None,
            seed: u64::MAX,
        }
    }
}

impl HoughParams {
    /// Check the accumulator resolutions and vote threshold.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.rho.is_finite() && self.rho > 0.0) {
            return Err(format!("hough.rho must be a positive number, got {}", self.rho));
        }
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(format!(
                "hough.theta must be a positive number, got {}",
                self.theta
            ));
        }
        if self.threshold < 1 {
            return Err(format!(
                "hough.threshold must be at least 1, got {}",
                self.threshold
            ));
        }
        if self.max_line_gap < 0 {
            return Err(format!(
                "hough.max_line_gap must not be negative, got {}",
                self.max_line_gap
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(HoughParams::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_resolutions_are_rejected() {
        for theta in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let p = HoughParams {
                theta,
                ..HoughParams::default()
            };
            let err = p.validate().unwrap_err();
            assert!(err.starts_with("hough.theta"), "{err}");
        }
        let p = HoughParams {
            rho: 0.0,
            ..HoughParams::default()
        };
        assert!(p.validate().unwrap_err().starts_with("hough.rho"));
        let p = HoughParams {
            threshold: 0,
            ..HoughParams::default()
        };
        assert!(p.validate().unwrap_err().starts_with("hough.threshold"));
    }
}
