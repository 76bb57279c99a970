//! Directional binning of route samples.

use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::types::{BearingProfile, BinStat, RouteSample};
use crate::error::AnalysisError;

/// Bin width used by the directional figures of the original experiment.
pub const DEFAULT_BIN_WIDTH_DEGREES: u32 = 5;

/// Checks that `bin_width_degrees` tiles [-180, 180) exactly, with no
/// overlap and no gap. Runs before any data is read.
pub fn validate_bin_width(bin_width_degrees: u32) -> Result<(), AnalysisError> {
    if bin_width_degrees == 0 || 360 % bin_width_degrees != 0 {
        return Err(AnalysisError::Configuration { bin_width_degrees });
    }
    Ok(())
}

/// Assigns a bearing to its bin index among `bin_count` bins of `width`
/// degrees. Bearings are wrapped into [-180, 180) first, so +180 lands in
/// the -180 bin.
fn bin_index(bearing: f64, width: u32, bin_count: usize) -> usize {
    let shifted = (bearing + 180.0).rem_euclid(360.0);
    let bin = (shifted / f64::from(width)).floor() as usize;
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    bin.min(bin_count - 1)
}

/// Computes the mean path ratio per bearing bin.
///
/// Bins with no samples are omitted rather than reported as zero; a mean
/// over an empty set is undefined. The result depends only on the
/// multiset of samples, not on their order.
///
/// # Errors
///
/// `Configuration` if the bin width is zero or does not divide 360.
pub fn bearing_profile(
    samples: &[RouteSample],
    bin_width_degrees: u32,
) -> Result<BearingProfile, AnalysisError> {
    validate_bin_width(bin_width_degrees)?;
    let bin_count = (360 / bin_width_degrees) as usize;

    let mut sums: BTreeMap<usize, (f64, usize)> = BTreeMap::new();
    for sample in samples {
        let bin = bin_index(sample.bearing, bin_width_degrees, bin_count);
        let entry = sums.entry(bin).or_insert((0.0, 0));
        entry.0 += sample.path_ratio;
        entry.1 += 1;
    }

    let bins: BTreeMap<usize, BinStat> = sums
        .into_iter()
        .map(|(bin, (sum, count))| {
            (
                bin,
                BinStat {
                    mean_ratio: sum / count as f64,
                    samples: count,
                },
            )
        })
        .collect();

    debug!(
        bin_count,
        occupied = bins.len(),
        "bearing profile computed"
    );

    Ok(BearingProfile {
        bin_width_degrees,
        bins,
    })
}
