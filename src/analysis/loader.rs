//! Route sample loading.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::analysis::types::RouteSample;
use crate::error::AnalysisError;

/// Loads the analysis table from a delimited file with `bearing` and
/// `path_ratio` columns. The whole table is held in memory; the order
/// statistics downstream need the full distribution.
pub fn load_samples(path: &Path) -> Result<Vec<RouteSample>, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut samples = Vec::new();
    for result in reader.deserialize() {
        let sample: RouteSample = result?;
        samples.push(sample);
    }

    debug!(
        samples = samples.len(),
        path = %path.display(),
        "analysis table loaded"
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_load_samples_reads_rows() {
        let path = temp_path("osm_route_stats_test_load.csv");
        fs::write(&path, "bearing,path_ratio\n2.0,1.1\n-90.0,1.4\n").unwrap();

        let samples = load_samples(&path).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].bearing, 2.0);
        assert_eq!(samples[1].path_ratio, 1.4);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_samples_ignores_extra_columns() {
        let path = temp_path("osm_route_stats_test_extra.csv");
        fs::write(
            &path,
            "bearing,path_ratio,path_length\n10.0,1.2,532.0\n",
        )
        .unwrap();

        let samples = load_samples(&path).unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].path_ratio, 1.2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_samples_missing_file_is_io_error() {
        let result = load_samples(Path::new("/nonexistent/samples.csv"));

        assert!(matches!(result, Err(AnalysisError::Io { .. })));
    }
}
