//! Message file discovery.
//!
//! Lists the files directly inside an input directory whose names match a
//! glob pattern. The scan is not recursive. Results are sorted by file name
//! so that ledger order is reproducible across runs and platforms.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{ReadError, ReadResult};

/// Pattern used when the caller does not configure one.
pub const DEFAULT_PATTERN: &str = "*.xml";

/// Find message files in `dir` matching `pattern`, sorted by name.
pub fn discover(dir: &Path, pattern: &str) -> ReadResult<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|source| ReadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let io_err = |source| ReadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| matcher.matches(n));
        if matches {
            files.push(path);
        }
    }
    files.sort();

    tracing::info!(dir = %dir.display(), pattern, files = files.len(), "discovered message files");
    Ok(files)
}
