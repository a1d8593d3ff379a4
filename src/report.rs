//! Text rendering of analysis results for terminals and logs.
//!
//! Maps each direction to a trading recommendation (`up` → BUY,
//! `down` → SELL) and prints confidence as a percentage with one decimal.
use crate::regions::Timeframe;
use crate::trend::{AnalysisResult, Direction, TimeframeResult};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
}

impl From<Direction> for Recommendation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Recommendation::Buy,
            Direction::Down => Recommendation::Sell,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recommendation::Buy => "BUY",
            Recommendation::Sell => "SELL",
        })
    }
}

/// One line, e.g. `5 minutes: BUY (confidence 30.0%, trend UP, slope -2.000)`.
pub fn format_recommendation(timeframe: Timeframe, result: &TimeframeResult) -> String {
    format!(
        "{timeframe}: {} (confidence {:.1}%, trend {}, slope {:.3})",
        Recommendation::from(result.direction),
        result.confidence,
        result.direction.as_str().to_uppercase(),
        result.slope
    )
}

/// All timeframes, one recommendation per line, in canonical order.
pub fn render_text_report(result: &AnalysisResult) -> String {
    result
        .iter()
        .map(|(tf, r)| format_recommendation(tf, r))
        .collect::<Vec<_>>()
        .join("\n")
}
