//! End-to-end integration tests: CSV -> stratified split -> JSON -> deserialize.

use std::fs;
use std::path::Path;

use stratus_dbscan::DbscanConfig;
use stratus_io::{ExperimentName, FrameReader, SplitWriter};
use stratus_split::SplitConfig;
use tempfile::TempDir;

/// Path to the test fixture directory.
fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn split_round_trip() {
    // 1. Read CSV
    let frame = FrameReader::new(&fixture_path("valid_20x2.csv"))
        .read()
        .expect("fixture should parse");

    assert_eq!(frame.n_rows(), 20);
    assert_eq!(frame.column_names(), &["class", "x"]);

    // 2. Split 50/50 preserving the two classes
    let config = SplitConfig::new(vec![0.5, 0.5])
        .unwrap()
        .with_class_column("class")
        .with_seed(42);
    let result = config.split(&frame).unwrap();

    // 3. Write JSON artifact
    let dir = TempDir::new().unwrap();
    let experiment = ExperimentName::new("split_rt".into()).unwrap();
    let writer = SplitWriter::new(dir.path(), experiment).unwrap();
    writer.write_splits(&config, &result).unwrap();

    // 4. Deserialize back and verify
    let json_path = dir.path().join("split_rt_splits.json");
    let content: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(content["experiment"], "split_rt");
    assert_eq!(content["n_records"].as_u64().unwrap(), 20);
    assert_eq!(content["n_classes"].as_u64().unwrap(), 2);
    assert_eq!(content["seed"].as_u64().unwrap(), 42);

    let sizes = content["sizes"].as_array().unwrap();
    assert_eq!(sizes.len(), 2);
    assert_eq!(sizes[0].as_u64().unwrap(), 10);
    assert_eq!(sizes[1].as_u64().unwrap(), 10);

    // Every record id appears in exactly one split.
    let splits = content["splits"].as_array().unwrap();
    assert_eq!(splits.len(), 2);
    let mut all_ids: Vec<&str> = splits
        .iter()
        .flat_map(|split| split.as_array().unwrap())
        .map(|id| id.as_str().unwrap())
        .collect();
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), 20, "every record exactly once across splits");
    for id in &all_ids {
        assert!(
            frame.row_ids().iter().any(|rid| rid.as_str() == *id),
            "split member {id} is not a dataset record"
        );
    }

    // Each split holds half of each class (ids r00-r09 are class a).
    for split in splits {
        let n_a = split
            .as_array()
            .unwrap()
            .iter()
            .filter(|id| id.as_str().unwrap() < "r10")
            .count();
        assert_eq!(n_a, 5, "each split should hold half of class a");
    }

    // Observed shares match the targets exactly for this balanced input.
    let shares = content["shares"].as_array().unwrap();
    for share in shares {
        assert!((share.as_f64().unwrap() - 0.5).abs() < 1e-12);
    }
}

#[test]
fn stratified_split_round_trip() {
    let frame = FrameReader::new(&fixture_path("valid_20x2.csv"))
        .read()
        .expect("fixture should parse");

    // The x column forms two tight value bands inside each class, so density
    // sub-grouping doubles the stratum count without changing split sizes.
    let config = SplitConfig::new(vec![0.5, 0.5])
        .unwrap()
        .with_class_column("class")
        .with_stratify_columns(vec!["x".to_string()])
        .with_dbscan(DbscanConfig::new(0.5, 3).unwrap())
        .with_seed(42);
    let result = config.split(&frame).unwrap();

    let dir = TempDir::new().unwrap();
    let experiment = ExperimentName::new("strat_rt".into()).unwrap();
    let writer = SplitWriter::new(dir.path(), experiment).unwrap();
    writer.write_splits(&config, &result).unwrap();

    let json_path = dir.path().join("strat_rt_splits.json");
    let content: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(content["n_strata"].as_u64().unwrap(), 4, "2 classes x 2 bands");
    assert_eq!(content["n_classes"].as_u64().unwrap(), 2);

    let sizes = content["sizes"].as_array().unwrap();
    assert_eq!(sizes[0].as_u64().unwrap(), 10);
    assert_eq!(sizes[1].as_u64().unwrap(), 10);
}

#[test]
fn reader_fixture_files_match_expected_errors() {
    // empty.csv -> EmptyDataset
    let result = FrameReader::new(&fixture_path("empty.csv")).read();
    assert!(
        matches!(result, Err(stratus_io::IoError::EmptyDataset { .. })),
        "empty.csv should give EmptyDataset, got: {:?}",
        result
    );

    // jagged.csv -> InconsistentRowLength
    let result = FrameReader::new(&fixture_path("jagged.csv")).read();
    assert!(
        matches!(result, Err(stratus_io::IoError::InconsistentRowLength { .. })),
        "jagged.csv should give InconsistentRowLength, got: {:?}",
        result
    );

    // duplicate_ids.csv -> DuplicateRecordId
    let result = FrameReader::new(&fixture_path("duplicate_ids.csv")).read();
    assert!(
        matches!(result, Err(stratus_io::IoError::DuplicateRecordId { .. })),
        "duplicate_ids.csv should give DuplicateRecordId, got: {:?}",
        result
    );

    // malformed.csv contains an unclosed quote ("r00,a,1.0 with no closing quote).
    // The csv crate (with flexible=true) parses this as a single-column record,
    // which triggers InconsistentRowLength (1 column vs 3 expected in the header).
    let result = FrameReader::new(&fixture_path("malformed.csv")).read();
    assert!(
        matches!(
            result,
            Err(stratus_io::IoError::InconsistentRowLength { .. })
        ),
        "malformed.csv should give InconsistentRowLength (unclosed quote parsed as 1-col record), got: {:?}",
        result
    );
}
