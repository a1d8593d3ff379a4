//! Per-timeframe trend classification.
//!
//! [`TrendAnalyzer`] slices an edge map into the six timeframe regions, finds
//! line segments in each slice, averages their slopes and turns the sign of
//! the average into a [`Direction`]. Image rows grow downward, so a chart
//! line rising on screen has a negative slope and is classified `Up`. A slope
//! of exactly zero, including the "no segments" case, is classified `Down`.

mod analyzer;

pub use analyzer::{analyze_chart, analyze_trends, TrendAnalyzer};

use crate::regions::Timeframe;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Trend direction of a timeframe slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` iff `slope < 0` (strictly); flat slices count as `Down`.
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one timeframe slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeframeResult {
    pub direction: Direction,
    /// Segment-count heuristic in `[0, 100]`.
    pub confidence: f64,
    /// Mean `dy / dx` over the slice's non-vertical segments (image axes).
    pub slope: f64,
}

impl TimeframeResult {
    pub fn from_estimate(slope: f64, confidence: f64) -> Self {
        Self {
            direction: Direction::from_slope(slope),
            confidence,
            slope,
        }
    }
}

/// Ordered mapping from timeframe to result, always in canonical order.
///
/// Serializes as a JSON object keyed by timeframe label. Deserialization
/// requires all six timeframes and restores canonical order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "IndexMap<Timeframe, TimeframeResult>",
    try_from = "IndexMap<Timeframe, TimeframeResult>"
)]
pub struct AnalysisResult {
    entries: IndexMap<Timeframe, TimeframeResult>,
}

impl AnalysisResult {
    /// Assemble from per-timeframe results; entries are re-ordered
    /// canonically.
    pub fn from_entries(entries: impl IntoIterator<Item = (Timeframe, TimeframeResult)>) -> Self {
        let mut entries: IndexMap<Timeframe, TimeframeResult> = entries.into_iter().collect();
        entries.sort_keys();
        Self { entries }
    }

    pub fn get(&self, timeframe: Timeframe) -> Option<&TimeframeResult> {
        self.entries.get(&timeframe)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &TimeframeResult)> + '_ {
        self.entries.iter().map(|(tf, r)| (*tf, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<AnalysisResult> for IndexMap<Timeframe, TimeframeResult> {
    fn from(result: AnalysisResult) -> Self {
        result.entries
    }
}

impl TryFrom<IndexMap<Timeframe, TimeframeResult>> for AnalysisResult {
    type Error = String;

    fn try_from(entries: IndexMap<Timeframe, TimeframeResult>) -> Result<Self, String> {
        if let Some(missing) = Timeframe::ALL.iter().find(|tf| !entries.contains_key(*tf)) {
            return Err(format!("missing timeframe \"{missing}\""));
        }
        Ok(Self::from_entries(entries))
    }
}

impl Index<Timeframe> for AnalysisResult {
    type Output = TimeframeResult;

    fn index(&self, timeframe: Timeframe) -> &TimeframeResult {
        &self.entries[&timeframe]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_slope_is_down() {
        assert_eq!(Direction::from_slope(0.0), Direction::Down);
        assert_eq!(Direction::from_slope(-0.0), Direction::Down);
        assert_eq!(Direction::from_slope(-1e-9), Direction::Up);
        assert_eq!(Direction::from_slope(1.5), Direction::Down);
    }

    #[test]
    fn entries_are_kept_in_canonical_order() {
        let flat = TimeframeResult::from_estimate(0.0, 0.0);
        let result = AnalysisResult::from_entries(
            Timeframe::ALL.iter().rev().map(|&tf| (tf, flat)),
        );
        let order: Vec<Timeframe> = result.iter().map(|(tf, _)| tf).collect();
        assert_eq!(order, Timeframe::ALL.to_vec());
    }

    #[test]
    fn serializes_as_label_keyed_object() {
        let result = AnalysisResult::from_entries([
            (Timeframe::TenMinutes, TimeframeResult::from_estimate(1.5, 100.0)),
            (Timeframe::FiveMinutes, TimeframeResult::from_estimate(-2.0, 30.0)),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"5 minutes":{"direction":"up","confidence":30.0,"slope":-2.0},"10 minutes":{"direction":"down","confidence":100.0,"slope":1.5}}"#
        );
    }

    #[test]
    fn deserializing_restores_canonical_order() {
        let flat = TimeframeResult::from_estimate(0.0, 0.0);
        let reversed: IndexMap<Timeframe, TimeframeResult> =
            Timeframe::ALL.iter().rev().map(|&tf| (tf, flat)).collect();
        let json = serde_json::to_string(&reversed).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        let order: Vec<Timeframe> = back.iter().map(|(tf, _)| tf).collect();
        assert_eq!(order, Timeframe::ALL.to_vec());
    }

    #[test]
    fn deserializing_requires_every_timeframe() {
        let json = r#"{"5 minutes":{"direction":"up","confidence":30.0,"slope":-2.0}}"#;
        let err = serde_json::from_str::<AnalysisResult>(json).unwrap_err();
        assert!(err.to_string().contains("missing timeframe"), "{err}");
    }
}
