use crate::edges::EdgeParams;
use crate::segments::HoughParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edges: EdgeParams,
    #[serde(default)]
    pub hough: HoughParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edge_map_image")]
    pub edge_map_image: PathBuf,
    #[serde(rename = "segments_json")]
    pub segments_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let cfg: EdgeToolConfig = super::load_json(path)?;
    cfg.hough.validate().map_err(|e| super::invalid(path, e))?;
    Ok(cfg)
}
