//! Error taxonomy shared by both analysis pipelines.
//!
//! All variants are fatal and propagate to the caller unmodified; no
//! operation substitutes a default value for a failure.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Source file missing or unreadable.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sample record could not be parsed from the analysis table.
    #[error("failed to parse sample record")]
    Malformed(#[from] csv::Error),

    /// The angular bin width does not tile [-180, 180) exactly.
    #[error("bin width of {bin_width_degrees} degrees does not evenly divide 360")]
    Configuration { bin_width_degrees: u32 },

    /// A statistical operation was invoked on an empty sample set.
    #[error("{operation} is undefined for an empty sample set")]
    EmptyInput { operation: &'static str },
}
