//! Output formatting and persistence for analysis artifacts.
//!
//! Supports pretty-printed JSON documents and CSV tables under the
//! results directory.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::types::{ProfileReport, RatioSummary};
use crate::extract::TagVocabulary;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Logs a ratio summary as pretty-printed JSON.
pub fn print_summary(summary: &RatioSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes the tag vocabulary as an indented JSON document.
///
/// Keys and values serialize in sorted order, so repeated runs over the
/// same extract produce byte-identical files.
pub fn write_vocabulary(path: &Path, vocabulary: &TagVocabulary) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(vocabulary)?)?;

    debug!(path = %path.display(), keys = vocabulary.len(), "vocabulary written");
    Ok(())
}

/// Writes the bearing profile report as an indented JSON document.
pub fn write_profile(path: &Path, report: &ProfileReport) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(report)?)?;

    debug!(path = %path.display(), bins = report.bins.len(), "bearing profile written");
    Ok(())
}

/// Writes the trimmed ratios as a single-column CSV for the histogram
/// renderer.
pub fn write_ratios_csv(path: &Path, ratios: &[f64]) -> Result<()> {
    ensure_parent(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["path_ratio"])?;
    for ratio in ratios {
        writer.write_record([ratio.to_string()])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = ratios.len(), "trimmed ratios written");
    Ok(())
}
