//! # Error Types — Pipeline Error Hierarchy
//!
//! [`LedgerError`] is the top-level error of a pipeline run. It keeps the
//! two failure classes an automated caller must tell apart:
//!
//! - [`LedgerError::Batch`]: the input was rejected (unsupported message
//!   version or record variant, or an invalid file under a strict reader).
//!   Nothing was written.
//! - Everything else: an operational failure (unreadable config, missing
//!   input directory, unwritable output).

use std::path::PathBuf;

use thiserror::Error;

use onix_core::BatchError;
use onix_reader::ReadError;

/// Top-level error for a pipeline run.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The batch was rejected.
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// Input discovery or reading failed.
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Ledger output failed.
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl LedgerError {
    /// Whether the input itself was rejected, as opposed to an operational
    /// failure.
    pub fn is_batch_rejection(&self) -> bool {
        matches!(self, Self::Batch(_))
    }
}

/// Failure while writing ledger files.
#[derive(Error, Debug)]
pub enum WriteError {
    /// A file or directory operation failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while loading pipeline configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for this schema.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience alias for pipeline operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use onix_core::MessageVersion;

    #[test]
    fn batch_error_is_transparent() {
        let err = LedgerError::from(BatchError::UnsupportedVersion {
            source_name: "old.xml".to_string(),
            version: MessageVersion::Onix2 { release: None },
        });
        assert!(err.is_batch_rejection());
        assert_eq!(
            format!("{err}"),
            "unsupported message version in old.xml: ONIX 2.x (only ONIX 3.x is processed)"
        );
    }

    #[test]
    fn operational_errors_are_not_rejections() {
        let err = LedgerError::from(ConfigError::Invalid("empty file name".to_string()));
        assert!(!err.is_batch_rejection());
        assert_eq!(
            format!("{err}"),
            "config error: invalid configuration: empty file name"
        );
    }

    #[test]
    fn write_io_display_includes_path() {
        let err = WriteError::Io {
            path: PathBuf::from("/out/full.jsonl"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(format!("{err}"), "/out/full.jsonl: denied");
    }
}
