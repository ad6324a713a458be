//! # Pipeline Configuration
//!
//! Loaded from an optional YAML file. Every field has a default, so an
//! empty file (or no file at all) yields the stock behavior:
//!
//! ```yaml
//! ledger_files:
//!   full: full.jsonl
//!   update: update.jsonl
//!   delete: delete.jsonl
//! reader:
//!   pattern: "*.xml"
//!   fail_on_invalid_file: false
//! identifiers:
//!   duplicates: first_wins   # first_wins | last_wins | collect
//!   missing: omit            # omit | null
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use onix_mapper::{IdentifierPolicy, MapperConfig};
use onix_reader::DEFAULT_PATTERN;

use crate::error::ConfigError;
use crate::router::LedgerKind;

/// Top-level pipeline settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Output file names.
    pub ledger_files: LedgerFiles,
    /// Input discovery and invalid-file handling.
    pub reader: ReaderConfig,
    /// Identifier slot policy passed to the mapper.
    pub identifiers: IdentifierPolicy,
}

/// File names of the three ledgers, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerFiles {
    pub full: String,
    pub update: String,
    pub delete: String,
}

impl Default for LedgerFiles {
    fn default() -> Self {
        Self {
            full: LedgerKind::Full.default_file_name().to_string(),
            update: LedgerKind::Update.default_file_name().to_string(),
            delete: LedgerKind::Delete.default_file_name().to_string(),
        }
    }
}

impl LedgerFiles {
    /// File name for a ledger.
    pub fn name(&self, kind: LedgerKind) -> &str {
        match kind {
            LedgerKind::Full => &self.full,
            LedgerKind::Update => &self.update,
            LedgerKind::Delete => &self.delete,
        }
    }
}

/// Reader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// File-name glob matched inside the input directory.
    pub pattern: String,
    /// Abort the batch on an unreadable file instead of skipping it.
    pub fail_on_invalid_file: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            fail_on_invalid_file: false,
        }
    }
}

impl PipelineConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Ok(config)
    }

    /// Parse and validate YAML text. `origin` is only used in errors.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document for a struct; treat it as defaults.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<&str> = Vec::with_capacity(LedgerKind::ALL.len());
        for kind in LedgerKind::ALL {
            let name = self.ledger_files.name(kind);
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "ledger_files.{kind} must not be empty"
                )));
            }
            if name.contains(|c: char| c == '/' || c == '\\') || name == "." || name == ".." {
                return Err(ConfigError::Invalid(format!(
                    "ledger_files.{kind} must be a plain file name, got {name:?}"
                )));
            }
            if seen.contains(&name) {
                return Err(ConfigError::Invalid(format!(
                    "ledger_files.{kind} reuses file name {name:?}"
                )));
            }
            seen.push(name);
        }
        if self.reader.pattern.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "reader.pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings handed to the record mapper.
    pub fn mapper_config(&self) -> MapperConfig {
        MapperConfig {
            identifiers: self.identifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_mapper::{DuplicatePolicy, MissingSlot};
    use std::io::Write;

    fn parse(yaml: &str) -> Result<PipelineConfig, ConfigError> {
        PipelineConfig::from_yaml(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.ledger_files.full, "full.jsonl");
        assert_eq!(config.ledger_files.update, "update.jsonl");
        assert_eq!(config.ledger_files.delete, "delete.jsonl");
        assert_eq!(config.reader.pattern, "*.xml");
        assert!(!config.reader.fail_on_invalid_file);
        assert_eq!(config.identifiers, IdentifierPolicy::DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse("").unwrap(), PipelineConfig::default());
        assert_eq!(parse("  \n").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = parse(
            "ledger_files:\n  update: changes.jsonl\nreader:\n  fail_on_invalid_file: true\n",
        )
        .unwrap();
        assert_eq!(config.ledger_files.full, "full.jsonl");
        assert_eq!(config.ledger_files.update, "changes.jsonl");
        assert_eq!(config.reader.pattern, "*.xml");
        assert!(config.reader.fail_on_invalid_file);
    }

    #[test]
    fn identifier_policy_reaches_mapper_config() {
        let config = parse("identifiers:\n  duplicates: collect\n  missing: \"null\"\n").unwrap();
        let mapper = config.mapper_config();
        assert_eq!(mapper.identifiers.duplicates, DuplicatePolicy::Collect);
        assert_eq!(mapper.identifiers.missing, MissingSlot::Null);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse("ledger_file:\n  full: x.jsonl\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn duplicate_file_names_are_rejected() {
        let err = parse("ledger_files:\n  update: full.jsonl\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("update")));
    }

    #[test]
    fn path_like_file_names_are_rejected() {
        let err = parse("ledger_files:\n  delete: ../delete.jsonl\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let err = parse("reader:\n  pattern: \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("pattern")));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reader:\n  pattern: \"*.onix\"").unwrap();
        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.reader.pattern, "*.onix");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PipelineConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
