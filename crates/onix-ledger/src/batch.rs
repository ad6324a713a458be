//! # Batch Pipeline
//!
//! A batch is every source of one run, processed in order. It succeeds as
//! a whole or fails as a whole: the first unsupported message version or
//! record variant aborts it, and nothing it produced reaches disk.
//!
//! [`Batch`] is the incremental form, fed one [`Source`] at a time, so a
//! caller can read files lazily. A rejected source leaves the batch as it
//! was before that source was added. [`run_batch`] drives it over an iterator,
//! and [`run_directory`] adds discovery and reading on top.

use std::path::{Path, PathBuf};

use serde::Serialize;

use onix_core::{BatchError, ProductVariant, Source};
use onix_mapper::RecordMapper;
use onix_reader::{discover, read_file};

use crate::config::PipelineConfig;
use crate::error::LedgerResult;
use crate::router::{Ledgers, Router, RouterStats};

/// A file that was skipped because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

/// Counters for a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Sources whose records were routed.
    pub sources: usize,
    /// Product records seen across those sources.
    pub records: usize,
    /// Per-ledger and dropped counts.
    pub routing: RouterStats,
    /// Files skipped under the lenient reader policy.
    pub skipped: Vec<SkippedSource>,
}

/// The in-memory result of a successful batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub ledgers: Ledgers,
    pub summary: BatchSummary,
}

/// An open batch.
#[derive(Debug)]
pub struct Batch {
    router: Router,
    data_source: String,
    sources: usize,
    records: usize,
    skipped: Vec<SkippedSource>,
}

impl Batch {
    /// Start a batch. `data_source` labels every derived record identifier.
    pub fn new(mapper: RecordMapper, data_source: impl Into<String>) -> Self {
        Self {
            router: Router::new(mapper),
            data_source: data_source.into(),
            sources: 0,
            records: 0,
            skipped: Vec::new(),
        }
    }

    /// Route every record of `source`, in document order. Nothing is routed
    /// unless every record is routable.
    pub fn add_source(&mut self, source: &Source) -> Result<(), BatchError> {
        if !source.version.is_supported() {
            return Err(BatchError::UnsupportedVersion {
                source_name: source.name.clone(),
                version: source.version.clone(),
            });
        }
        if let Some(index) = source
            .records
            .iter()
            .position(|r| matches!(r, ProductVariant::Legacy(_)))
        {
            return Err(BatchError::UnsupportedRecord {
                source_name: source.name.clone(),
                index,
            });
        }
        tracing::info!(
            source = %source.name,
            version = %source.version,
            records = source.len(),
            "processing source"
        );
        for (index, record) in source.records.iter().enumerate() {
            self.router
                .route(record, &source.name, &self.data_source, index)?;
        }
        self.sources += 1;
        self.records += source.len();
        Ok(())
    }

    /// Record a file that was skipped instead of read.
    pub fn skip(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.skipped.push(SkippedSource {
            path: path.into(),
            reason: reason.into(),
        });
    }

    /// Close the batch.
    pub fn finish(self) -> BatchOutcome {
        let (ledgers, routing) = self.router.finish();
        let summary = BatchSummary {
            sources: self.sources,
            records: self.records,
            routing,
            skipped: self.skipped,
        };
        tracing::info!(
            sources = summary.sources,
            records = summary.records,
            full = summary.routing.full,
            update = summary.routing.update,
            delete = summary.routing.delete,
            dropped = summary.routing.dropped_total(),
            skipped = summary.skipped.len(),
            "batch complete"
        );
        BatchOutcome { ledgers, summary }
    }
}

/// Process already-read sources as one batch.
pub fn run_batch<'s>(
    sources: impl IntoIterator<Item = &'s Source>,
    mapper: RecordMapper,
    data_source: &str,
) -> Result<BatchOutcome, BatchError> {
    let mut batch = Batch::new(mapper, data_source);
    for source in sources {
        batch.add_source(source)?;
    }
    Ok(batch.finish())
}

/// Discover, read and process every matching file in `input_dir`.
///
/// Files are read one at a time in sorted name order. An unreadable file
/// is skipped with a warning, or aborts the batch with
/// [`BatchError::InvalidSource`] when `reader.fail_on_invalid_file` is set.
pub fn run_directory(
    input_dir: &Path,
    config: &PipelineConfig,
    data_source: &str,
) -> LedgerResult<BatchOutcome> {
    let paths = discover(input_dir, &config.reader.pattern)?;
    let mut batch = Batch::new(RecordMapper::new(config.mapper_config()), data_source);

    for path in paths {
        match read_file(&path) {
            Ok(source) => batch.add_source(&source)?,
            Err(err) if config.reader.fail_on_invalid_file => {
                return Err(BatchError::InvalidSource {
                    source_name: display_name(&path),
                    reason: err.to_string(),
                }
                .into());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping invalid file");
                batch.skip(path, err.to_string());
            }
        }
    }
    Ok(batch.finish())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
