//! Streaming tag vocabulary extraction from OSM XML extracts.
//!
//! The extract is scanned line by line in a single forward pass, so memory
//! use is bounded by the number of distinct key/value pairs rather than by
//! the file size. Extracts are routinely gigabyte-scale.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::AnalysisError;

/// Mapping from tag key to the distinct values observed for it.
///
/// BTree containers keep serialization order deterministic, so repeated
/// runs over the same extract produce byte-identical documents.
pub type TagVocabulary = BTreeMap<String, BTreeSet<String>>;

/// Matches the `k="..." v="..."` attribute pair of a `<tag>` element.
/// No full XML validation; surrounding markup is ignored.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<tag k="([^"]*)" v="([^"]*)""#).unwrap());

/// Result of one extraction pass.
#[derive(Debug, Default)]
pub struct Extraction {
    pub vocabulary: TagVocabulary,
    /// Lines scanned, including lines that carried no tag.
    pub lines_scanned: usize,
    /// Lines that carried more than one tag marker. All pairs on such
    /// lines are extracted, but they are counted and logged so the
    /// input's structure can be audited.
    pub dense_tag_lines: usize,
}

/// Runs a single forward scan over the extract at `path`.
///
/// # Errors
///
/// Fails only if the file cannot be opened or read; malformed lines are
/// skipped, never fatal.
pub fn extract(path: &Path) -> Result<Extraction, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    scan(BufReader::new(file)).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Streaming core of the extractor, generic over the reader so tests can
/// feed in-memory input.
pub fn scan<R: BufRead>(reader: R) -> std::io::Result<Extraction> {
    let mut extraction = Extraction::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        extraction.lines_scanned += 1;

        let mut tags_on_line = 0;
        for caps in TAG_PATTERN.captures_iter(line) {
            tags_on_line += 1;
            extraction
                .vocabulary
                .entry(caps[1].to_string())
                .or_default()
                .insert(caps[2].to_string());
        }

        if tags_on_line > 1 {
            warn!(
                line = extraction.lines_scanned,
                tags = tags_on_line,
                "multiple tag markers on one line"
            );
            extraction.dense_tag_lines += 1;
        }
    }

    debug!(
        lines = extraction.lines_scanned,
        keys = extraction.vocabulary.len(),
        "extraction pass complete"
    );
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(input: &str) -> Extraction {
        scan(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_single_tag_line_is_captured() {
        let extraction = scan_str("  <tag k=\"highway\" v=\"primary\"/>\n");

        let values = extraction.vocabulary.get("highway").unwrap();
        assert!(values.contains("primary"));
        assert_eq!(extraction.dense_tag_lines, 0);
    }

    #[test]
    fn test_repeated_pairs_deduplicate() {
        let line = "<tag k=\"highway\" v=\"primary\"/>\n";
        let extraction = scan_str(&line.repeat(4));

        assert_eq!(extraction.vocabulary.get("highway").unwrap().len(), 1);
    }

    #[test]
    fn test_lines_without_tags_are_skipped() {
        let input = "<?xml version=\"1.0\"?>\n<node id=\"1\" lat=\"49.0\" lon=\"104.0\"/>\n";
        let extraction = scan_str(input);

        assert!(extraction.vocabulary.is_empty());
        assert_eq!(extraction.lines_scanned, 2);
    }

    #[test]
    fn test_dense_line_extracts_all_pairs_and_is_counted() {
        let extraction = scan_str("<tag k=\"a\" v=\"1\"/><tag k=\"b\" v=\"2\"/>\n");

        assert!(extraction.vocabulary.get("a").unwrap().contains("1"));
        assert!(extraction.vocabulary.get("b").unwrap().contains("2"));
        assert_eq!(extraction.dense_tag_lines, 1);
    }

    #[test]
    fn test_serialization_is_order_independent() {
        let forward = scan_str("<tag k=\"a\" v=\"1\"/>\n<tag k=\"b\" v=\"2\"/>\n");
        let backward = scan_str("<tag k=\"b\" v=\"2\"/>\n<tag k=\"a\" v=\"1\"/>\n");

        assert_eq!(
            serde_json::to_string_pretty(&forward.vocabulary).unwrap(),
            serde_json::to_string_pretty(&backward.vocabulary).unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = extract(Path::new("/nonexistent/extract.osm"));

        assert!(matches!(result, Err(AnalysisError::Io { .. })));
    }
}
