//! JSON configuration files for the command-line tools.
//!
//! Each tool reads one config file named on the command line. Analyzer
//! parameters are optional and fall back to the defaults in
//! [`crate::params::AnalyzerParams`].
pub mod edge;
pub mod report;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn invalid(path: &Path, err: String) -> String {
    format!("Invalid config {}: {err}", path.display())
}
