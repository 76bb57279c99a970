//! Whole-distribution summary of the path ratio.

use crate::analysis::types::{RatioSummary, RouteSample};
use crate::analysis::utility::{mean, percentile, stddev};
use crate::error::AnalysisError;

/// Describes the path ratio distribution across all samples.
///
/// # Errors
///
/// `EmptyInput` if `samples` is empty.
pub fn summarize(samples: &[RouteSample]) -> Result<RatioSummary, AnalysisError> {
    let ratios: Vec<f64> = samples.iter().map(|s| s.path_ratio).collect();

    let median = percentile(&ratios, 0.5).ok_or(AnalysisError::EmptyInput {
        operation: "summarize",
    })?;

    let mean_ratio = mean(&ratios);
    let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(RatioSummary {
        count: ratios.len(),
        mean: mean_ratio,
        stddev: stddev(&ratios, mean_ratio),
        median,
        min,
        max,
    })
}
