//! Batch rejection and invalid-input handling.
//!
//! A batch is all-or-nothing: an ONIX 2.1 message anywhere in the input
//! rejects the whole run, and no ledger file is created or replaced.
//! Unreadable files are skipped by default and fatal under the strict
//! reader policy.

use std::path::{Path, PathBuf};

use onix_core::{BatchError, MessageVersion};
use onix_ledger::{run_directory, write_ledgers, LedgerError, PipelineConfig};

fn fixture(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
}

/// Copy the standard batch into a temp dir, plus `extra` files.
fn input_with(extra: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["01_full.xml", "02_update.xml", "03_delete.xml"] {
        std::fs::copy(fixture("batch").join(name), dir.path().join(name)).unwrap();
    }
    for (name, bytes) in extra {
        std::fs::write(dir.path().join(name), bytes).unwrap();
    }
    dir
}

#[test]
fn onix21_message_rejects_the_batch() {
    let legacy = std::fs::read_to_string(fixture("legacy/onix21.xml")).unwrap();
    let input = input_with(&[("04_legacy.xml", legacy.as_str())]);

    let err = run_directory(input.path(), &PipelineConfig::default(), "src").unwrap_err();
    assert!(err.is_batch_rejection());
    match err {
        LedgerError::Batch(BatchError::UnsupportedVersion {
            source_name,
            version,
        }) => {
            assert_eq!(source_name, "04_legacy.xml");
            assert_eq!(version, MessageVersion::Onix2 { release: None });
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejection_leaves_previous_output_untouched() {
    let out = tempfile::tempdir().unwrap();
    let config = PipelineConfig::default();

    let outcome = run_directory(&fixture("batch"), &config, "src").unwrap();
    write_ledgers(&outcome.ledgers, out.path(), &config.ledger_files).unwrap();
    let before = std::fs::read(out.path().join("full.jsonl")).unwrap();

    let legacy = std::fs::read_to_string(fixture("legacy/onix21.xml")).unwrap();
    let input = input_with(&[("00_legacy.xml", legacy.as_str())]);
    assert!(run_directory(input.path(), &config, "src").is_err());

    assert_eq!(std::fs::read(out.path().join("full.jsonl")).unwrap(), before);
}

#[test]
fn unrecognized_release_is_rejected() {
    let input = input_with(&[(
        "09_future.xml",
        "<ONIXMessage release=\"9.9\"><Product/></ONIXMessage>",
    )]);
    let err = run_directory(input.path(), &PipelineConfig::default(), "src").unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Batch(BatchError::UnsupportedVersion {
            version: MessageVersion::Unrecognized { .. },
            ..
        })
    ));
}

#[test]
fn malformed_and_foreign_files_are_skipped_by_default() {
    let input = input_with(&[
        ("04_broken.xml", "<ONIXMessage release=\"3.0\"><Product></ONIXMessage>"),
        ("05_feed.xml", "<rss version=\"2.0\"><channel/></rss>"),
        ("06_short.xml", "<ONIXmessage release=\"3.0\"><product/></ONIXmessage>"),
    ]);
    let outcome = run_directory(input.path(), &PipelineConfig::default(), "src").unwrap();

    assert_eq!(outcome.summary.sources, 3);
    let skipped: Vec<_> = outcome
        .summary
        .skipped
        .iter()
        .filter_map(|s| s.path.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(skipped, vec!["04_broken.xml", "05_feed.xml", "06_short.xml"]);
    assert_eq!(outcome.ledgers.full.len(), 1);
}

#[test]
fn strict_reader_rejects_the_first_invalid_file() {
    let input = input_with(&[("00_feed.xml", "<rss/>")]);
    let mut config = PipelineConfig::default();
    config.reader.fail_on_invalid_file = true;

    let err = run_directory(input.path(), &config, "src").unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Batch(BatchError::InvalidSource { ref source_name, .. }) if source_name == "00_feed.xml"
    ));
}

#[test]
fn empty_directory_yields_three_empty_ledgers() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = PipelineConfig::default();

    let outcome = run_directory(input.path(), &config, "src").unwrap();
    let paths = write_ledgers(&outcome.ledgers, out.path(), &config.ledger_files).unwrap();
    assert_eq!(paths.len(), 3);
    for path in paths {
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "", "{}", path.display());
    }
}

#[test]
fn pattern_limits_discovery() {
    let input = input_with(&[("notes.txt", "not xml at all")]);
    let mut config = PipelineConfig::default();
    config.reader.pattern = "0[12]_*.xml".to_string();

    let outcome = run_directory(input.path(), &config, "src").unwrap();
    assert_eq!(outcome.summary.sources, 2);
    assert!(outcome.ledgers.delete.is_empty());
    assert!(outcome.summary.skipped.is_empty());
}
