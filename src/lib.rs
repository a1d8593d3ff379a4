#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod regions;
pub mod report;
pub mod trend;

// Stage-level building blocks; public for tools and tests.
pub mod config;
pub mod edges;
pub mod segments;
pub mod slope;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::InputError;
pub use crate::image::RasterImage;
pub use crate::params::AnalyzerParams;
pub use crate::regions::{timeframe_regions, Region, Timeframe};
pub use crate::trend::{
    analyze_chart, analyze_trends, AnalysisResult, Direction, TimeframeResult, TrendAnalyzer,
};

// Stage entry points.
pub use crate::edges::{extract_edges, EdgeMap, EdgeParams};
pub use crate::segments::{find_segments, HoughParams, LineSegment};
pub use crate::slope::{estimate_slope, SlopeEstimate};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use chart_trend::prelude::*;
///
/// # fn main() -> Result<(), InputError> {
/// let (w, h) = (600usize, 100usize);
/// let gray = vec![0u8; w * h];
/// let image = RasterImage::gray(w, h, gray)?;
///
/// let analyzer = TrendAnalyzer::new(AnalyzerParams::default());
/// let result = analyzer.analyze_image(&image);
/// for (timeframe, trend) in result.iter() {
///     println!("{timeframe}: {} ({:.1}%)", trend.direction, trend.confidence);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RasterImage;
    pub use crate::{
        AnalysisResult, AnalyzerParams, Direction, InputError, Timeframe, TimeframeResult,
        TrendAnalyzer,
    };
}
