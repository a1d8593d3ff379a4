//! Structured, serializable diagnostics for a single analysis run.
use crate::image::raster::ColorLayout;
use crate::regions::{Region, Timeframe};
use crate::segments::LineSegment;
use crate::trend::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the analysis run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub layout: ColorLayout,
    pub edge_pixels: usize,
}

/// Per-slice detail: where the slice lies and which segments it produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceReport {
    pub timeframe: Timeframe,
    pub region: Region,
    pub edge_pixels: usize,
    pub segments: Vec<LineSegment>,
    /// Segments with a defined slope (non-vertical).
    pub sloped_segments: usize,
}

/// Full report returned by `TrendAnalyzer::analyze_image_with_report`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub input: InputDescriptor,
    pub trends: AnalysisResult,
    pub slices: Vec<SliceReport>,
    pub timing: TimingBreakdown,
}
