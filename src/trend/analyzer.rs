use super::{AnalysisResult, TimeframeResult};
use crate::diagnostics::{AnalysisReport, InputDescriptor, SliceReport, TimingBreakdown};
use crate::edges::{extract_edges, EdgeMap};
use crate::image::RasterImage;
use crate::params::AnalyzerParams;
use crate::regions::{timeframe_regions, Region, Timeframe};
use crate::segments::{find_segments, LineSegment};
use crate::slope::{estimate_slope_with, SlopeEstimate};
use log::{debug, warn};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of analysing one timeframe slice.
struct SliceOutcome {
    timeframe: Timeframe,
    region: Region,
    edge_pixels: usize,
    segments: Vec<LineSegment>,
    estimate: SlopeEstimate,
    elapsed_ms: f64,
}

impl SliceOutcome {
    fn result(&self) -> TimeframeResult {
        TimeframeResult::from_estimate(self.estimate.slope, self.estimate.confidence)
    }
}

/// Stateless chart analyzer: edge extraction followed by per-slice trend
/// classification.
///
/// The analyzer holds only parameters; every call is independent and
/// deterministic for a given input.
#[derive(Clone, Debug, Default)]
pub struct TrendAnalyzer {
    params: AnalyzerParams,
}

impl TrendAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Build the edge map of `image` with the configured edge parameters.
    pub fn extract_edges(&self, image: &RasterImage) -> EdgeMap {
        extract_edges(image, &self.params.edges)
    }

    /// Classify the six timeframe slices of an edge map.
    pub fn analyze(&self, edges: &EdgeMap) -> AnalysisResult {
        let outcomes = self.analyze_slices(edges);
        AnalysisResult::from_entries(outcomes.iter().map(|o| (o.timeframe, o.result())))
    }

    /// Complete pipeline: edge extraction then slice classification.
    pub fn analyze_image(&self, image: &RasterImage) -> AnalysisResult {
        self.analyze(&self.extract_edges(image))
    }

    /// Complete pipeline returning the edge map and a diagnostics report.
    pub fn analyze_image_with_report(&self, image: &RasterImage) -> (EdgeMap, AnalysisReport) {
        let t0 = Instant::now();
        let edges = self.extract_edges(image);
        let edges_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let outcomes = self.analyze_slices(&edges);
        let trends =
            AnalysisResult::from_entries(outcomes.iter().map(|o| (o.timeframe, o.result())));

        let mut timing = TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0);
        timing.push("edges", edges_ms);
        for o in &outcomes {
            timing.push(format!("slice {}", o.timeframe), o.elapsed_ms);
        }

        let input = InputDescriptor {
            width: image.width(),
            height: image.height(),
            layout: image.layout(),
            edge_pixels: edges.edge_count(),
        };
        let slices = outcomes
            .into_iter()
            .map(|o| SliceReport {
                timeframe: o.timeframe,
                region: o.region,
                edge_pixels: o.edge_pixels,
                sloped_segments: o.estimate.segment_count,
                segments: o.segments,
            })
            .collect();

        let report = AnalysisReport {
            input,
            trends,
            slices,
            timing,
        };
        (edges, report)
    }

    fn analyze_slices(&self, edges: &EdgeMap) -> Vec<SliceOutcome> {
        let regions = timeframe_regions(edges.width(), edges.height());
        #[cfg(feature = "parallel")]
        {
            regions[..]
                .par_iter()
                .map(|&(tf, region)| self.analyze_slice(edges, tf, region))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            regions
                .iter()
                .map(|&(tf, region)| self.analyze_slice(edges, tf, region))
                .collect()
        }
    }

    fn analyze_slice(
        &self,
        edges: &EdgeMap,
        timeframe: Timeframe,
        region: Region,
    ) -> SliceOutcome {
        let t0 = Instant::now();
        if region.is_empty() {
            warn!(
                "slice {timeframe}: empty region {region:?} (image {}x{})",
                edges.width(),
                edges.height()
            );
        }
        let view = edges.region_view(&region);
        let edge_pixels = view.count_nonzero();
        let segments = find_segments(&view, &self.params.hough);
        let estimate = estimate_slope_with(&segments, &self.params.confidence);
        debug!(
            "slice {timeframe}: x=[{}, {}) edges={} segments={} sloped={} slope={:.4} confidence={:.1}",
            region.x1,
            region.x2,
            edge_pixels,
            segments.len(),
            estimate.segment_count,
            estimate.slope,
            estimate.confidence
        );
        SliceOutcome {
            timeframe,
            region,
            edge_pixels,
            segments,
            estimate,
            elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Classify an edge map with default parameters.
pub fn analyze_trends(edges: &EdgeMap) -> AnalysisResult {
    TrendAnalyzer::default().analyze(edges)
}

/// Run the full default pipeline on a raster.
pub fn analyze_chart(image: &RasterImage) -> AnalysisResult {
    TrendAnalyzer::default().analyze_image(image)
}
