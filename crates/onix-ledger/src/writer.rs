//! # JSON Lines Ledger Writer
//!
//! Writes the three ledgers of a finished batch to an output directory,
//! one compact JSON object per line, in routing order. All three files are
//! always produced, empty ones included.
//!
//! Each ledger is first written to a hidden staging file next to its final
//! name. Only when all three are staged are they renamed into place, so a
//! failure while serializing leaves previous output untouched. A failed
//! rename can leave earlier ledgers replaced; the remaining staging files
//! are removed either way.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use onix_mapper::Document;

use crate::config::LedgerFiles;
use crate::error::WriteError;
use crate::router::{LedgerKind, Ledgers};

/// Serialize `documents` to `out`, one per line.
pub fn write_jsonl<'d, W: Write>(
    out: &mut W,
    documents: impl IntoIterator<Item = &'d Document>,
) -> serde_json::Result<usize> {
    let mut lines = 0;
    for document in documents {
        serde_json::to_writer(&mut *out, document)?;
        out.write_all(b"\n").map_err(serde_json::Error::io)?;
        lines += 1;
    }
    Ok(lines)
}

/// Write all three ledgers into `output_dir`. Returns the final paths in
/// ledger order.
pub fn write_ledgers(
    ledgers: &Ledgers,
    output_dir: &Path,
    files: &LedgerFiles,
) -> Result<Vec<PathBuf>, WriteError> {
    std::fs::create_dir_all(output_dir).map_err(|source| WriteError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(LedgerKind::ALL.len());
    for ledger in ledgers.iter() {
        let target = output_dir.join(files.name(ledger.kind()));
        let staging = staging_path(&target);
        if let Err(err) = stage(&staging, ledger.documents()) {
            discard(&staging);
            for (s, _) in &staged {
                discard(s);
            }
            return Err(err);
        }
        staged.push((staging, target));
    }

    let mut written = Vec::with_capacity(staged.len());
    let mut pending = staged.into_iter();
    while let Some((staging, target)) = pending.next() {
        if let Err(source) = std::fs::rename(&staging, &target) {
            discard(&staging);
            for (rest, _) in pending {
                discard(&rest);
            }
            return Err(WriteError::Io {
                path: target,
                source,
            });
        }
        tracing::info!(path = %target.display(), "wrote ledger");
        written.push(target);
    }
    Ok(written)
}

fn stage(path: &Path, documents: &[Document]) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let lines = write_jsonl(&mut out, documents).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            WriteError::Serialize(e)
        }
    })?;
    out.flush().map_err(io_err)?;
    tracing::debug!(path = %path.display(), lines, "staged ledger");
    Ok(())
}

fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.tmp"))
}

fn discard(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %err, "failed to remove staging file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn sample() -> Ledgers {
        let mut ledgers = Ledgers::default();
        ledgers.full.push(doc(json!({ "RecordRef": "a", "Title": "x\ny" })));
        ledgers.full.push(doc(json!({ "RecordRef": "b" })));
        ledgers.delete.push(doc(json!({ "RecordRef": "c" })));
        ledgers
    }

    #[test]
    fn one_compact_line_per_document() {
        let mut out = Vec::new();
        let ledgers = sample();
        let n = write_jsonl(&mut out, ledgers.full.documents()).unwrap();
        assert_eq!(n, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\"RecordRef\":\"a\",\"Title\":\"x\\ny\"}\n{\"RecordRef\":\"b\"}\n"
        );
    }

    #[test]
    fn key_order_is_preserved() {
        let mut out = Vec::new();
        let d = doc(json!({ "z": 1, "a": 2, "m": 3 }));
        write_jsonl(&mut out, [&d]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"z\":1,\"a\":2,\"m\":3}\n");
    }

    #[test]
    fn writes_three_files_including_empty() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let paths = write_ledgers(&sample(), &out, &LedgerFiles::default()).unwrap();

        assert_eq!(paths.len(), 3);
        let full = std::fs::read_to_string(out.join("full.jsonl")).unwrap();
        assert_eq!(full.lines().count(), 2);
        let update = std::fs::read_to_string(out.join("update.jsonl")).unwrap();
        assert!(update.is_empty());
        let delete = std::fs::read_to_string(out.join("delete.jsonl")).unwrap();
        let parsed: Value = serde_json::from_str(delete.trim_end()).unwrap();
        assert_eq!(parsed, json!({ "RecordRef": "c" }));
    }

    #[test]
    fn no_staging_files_remain() {
        let dir = tempfile::tempdir().unwrap();
        write_ledgers(&sample(), dir.path(), &LedgerFiles::default()).unwrap();
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn custom_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let files = LedgerFiles {
            full: "a.jsonl".to_string(),
            update: "b.jsonl".to_string(),
            delete: "c.jsonl".to_string(),
        };
        let paths = write_ledgers(&Ledgers::default(), dir.path(), &files).unwrap();
        assert_eq!(paths[1], dir.path().join("b.jsonl"));
        assert!(dir.path().join("c.jsonl").is_file());
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("full.jsonl"), "stale\n").unwrap();
        write_ledgers(&Ledgers::default(), dir.path(), &LedgerFiles::default()).unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("full.jsonl")).unwrap(), "");
    }

    #[test]
    fn output_path_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "").unwrap();
        let err = write_ledgers(&sample(), &blocker, &LedgerFiles::default()).unwrap_err();
        assert!(matches!(err, WriteError::Io { ref path, .. } if path == &blocker));
    }

    #[test]
    fn failed_rename_removes_remaining_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("update.jsonl")).unwrap();
        std::fs::write(dir.path().join("update.jsonl").join("keep"), "").unwrap();

        let err = write_ledgers(&sample(), dir.path(), &LedgerFiles::default()).unwrap_err();
        assert!(
            matches!(err, WriteError::Io { ref path, .. } if path == &dir.path().join("update.jsonl"))
        );

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
        assert!(!dir.path().join("delete.jsonl").exists());
    }

    #[test]
    fn staging_name_is_hidden() {
        assert_eq!(
            staging_path(Path::new("/o/full.jsonl")),
            PathBuf::from("/o/.full.jsonl.tmp")
        );
    }
}
