use crate::params::AnalyzerParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ReportToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub analyzer: AnalyzerParams,
    pub output: ReportOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReportOutputConfig {
    /// Destination of the JSON analysis report.
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// When set, the edge map is also saved as a grayscale PNG.
    #[serde(default)]
    pub edge_map_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let cfg: ReportToolConfig = super::load_json(path)?;
    cfg.analyzer.validate().map_err(|e| super::invalid(path, e))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_analyzer() {
        let cfg: ReportToolConfig = serde_json::from_str(
            r#"{ "input": "chart.png", "output": { "report_json": "out/report.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("chart.png"));
        assert_eq!(cfg.analyzer, AnalyzerParams::default());
        assert!(cfg.output.edge_map_image.is_none());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/trend.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config"), "{err}");
    }

    #[test]
    fn zero_theta_is_reported_not_fatal() {
        let path = std::env::temp_dir().join(format!(
            "chart_trend_zero_theta_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{ "input": "chart.png",
                 "analyzer": { "hough": { "theta": 0.0 } },
                 "output": { "report_json": "out/report.json" } }"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(err.starts_with("Invalid config"), "{err}");
        assert!(err.contains("hough.theta"), "{err}");
    }
}
