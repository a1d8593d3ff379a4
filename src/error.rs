use thiserror::Error;

/// Structurally invalid input handed to the pipeline.
///
/// The pipeline never substitutes defaults for malformed input; "no lines
/// found" is a valid result and is not represented here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("image must be non-empty, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
    #[error("unsupported channel count {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
