//! Data types used by the route quality pipeline.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One route sample from the analysis table. Extra columns in the source
/// file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSample {
    /// Compass bearing of travel, degrees in [-180, 180).
    pub bearing: f64,
    /// Traversed path length divided by the great-circle distance between
    /// the same endpoints; always >= 1.0.
    pub path_ratio: f64,
}

/// Per-bin aggregate of the path ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinStat {
    pub mean_ratio: f64,
    pub samples: usize,
}

/// Mean path ratio per non-empty bearing bin.
///
/// Bins of `bin_width_degrees` tile [-180, 180); bin `i` covers
/// `[-180 + i*w, -180 + (i+1)*w)`. Bins with no samples are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct BearingProfile {
    pub bin_width_degrees: u32,
    pub bins: BTreeMap<usize, BinStat>,
}

impl BearingProfile {
    /// Total number of bins tiling the circle.
    pub fn bin_count(&self) -> usize {
        (360 / self.bin_width_degrees) as usize
    }

    /// Center angle of `bin` in degrees. The polar-plot consumer converts
    /// to radians itself.
    pub fn bin_center_degrees(&self, bin: usize) -> f64 {
        -180.0 + (bin as f64 + 0.5) * f64::from(self.bin_width_degrees)
    }
}

/// One row of the serialized bearing profile report.
#[derive(Debug, Serialize)]
pub struct BinEntry {
    pub center_degrees: f64,
    pub mean_ratio: f64,
    pub samples: usize,
}

/// Plot-ready bearing profile, written as JSON for the polar-plot
/// collaborator.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub generated_at: DateTime<Utc>,
    pub bin_width_degrees: u32,
    pub bins: Vec<BinEntry>,
}

impl ProfileReport {
    pub fn from_profile(profile: &BearingProfile) -> Self {
        let bins = profile
            .bins
            .iter()
            .map(|(&bin, stat)| BinEntry {
                center_degrees: profile.bin_center_degrees(bin),
                mean_ratio: stat.mean_ratio,
                samples: stat.samples,
            })
            .collect();

        ProfileReport {
            generated_at: Utc::now(),
            bin_width_degrees: profile.bin_width_degrees,
            bins,
        }
    }
}

/// Whole-distribution summary of the path ratio.
#[derive(Debug, Serialize)]
pub struct RatioSummary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_bin_center_degrees() {
        let profile = BearingProfile {
            bin_width_degrees: 5,
            bins: BTreeMap::new(),
        };

        assert_eq!(profile.bin_count(), 72);
        assert_eq!(profile.bin_center_degrees(0), -177.5);
        assert_eq!(profile.bin_center_degrees(36), 2.5);
        assert_eq!(profile.bin_center_degrees(71), 177.5);
    }
}
