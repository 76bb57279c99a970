//! Outlier trimming of the path ratio distribution.

use tracing::debug;

use crate::analysis::types::RouteSample;
use crate::analysis::utility::percentile;
use crate::error::AnalysisError;

/// Lower display bound; a path can never be shorter than the great circle.
pub const DEFAULT_LOWER: f64 = 1.0;
/// Upper trim percentile used by the histogram figures.
pub const DEFAULT_UPPER_PERCENTILE: f64 = 0.999;

/// Restricts the path ratios to `[lower, P(upper_percentile)]`, preserving
/// relative order.
///
/// This is a pure filter for display-range clipping: the samples are left
/// untouched and repeated calls yield identical output.
///
/// # Errors
///
/// `EmptyInput` if `samples` is empty; the trim percentile would be
/// undefined.
pub fn trimmed_ratio_distribution(
    samples: &[RouteSample],
    lower: f64,
    upper_percentile: f64,
) -> Result<Vec<f64>, AnalysisError> {
    let ratios: Vec<f64> = samples.iter().map(|s| s.path_ratio).collect();

    let upper = percentile(&ratios, upper_percentile).ok_or(AnalysisError::EmptyInput {
        operation: "trimmed_ratio_distribution",
    })?;

    let trimmed: Vec<f64> = ratios
        .into_iter()
        .filter(|v| *v >= lower && *v <= upper)
        .collect();

    debug!(
        kept = trimmed.len(),
        total = samples.len(),
        upper,
        "ratio distribution trimmed"
    );
    Ok(trimmed)
}
