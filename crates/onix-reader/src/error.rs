//! Reader failures. Every variant names the file it came from.

use std::path::PathBuf;

use thiserror::Error;

/// Why a message file could not be turned into a source.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file is not well-formed XML.
    #[error("malformed XML in {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// The document ended with elements still open.
    #[error("truncated XML in {}: <{open}> is never closed", path.display())]
    Truncated { path: PathBuf, open: String },

    /// The document has no root element at all.
    #[error("no root element in {}", path.display())]
    NoRoot { path: PathBuf },

    /// The root element is not an ONIX message.
    #[error("{} is not an ONIX message (root element <{root}>)", path.display())]
    NotOnix { path: PathBuf, root: String },

    /// The message uses short tags, which are not supported.
    #[error("{} uses ONIX short tags, which are not supported", path.display())]
    ShortTags { path: PathBuf },

    /// The file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The discovery pattern is not a valid glob.
    #[error("invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ReadError {
    /// The file or directory the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Xml { path, .. }
            | Self::Truncated { path, .. }
            | Self::NoRoot { path }
            | Self::NotOnix { path, .. }
            | Self::ShortTags { path }
            | Self::Io { path, .. } => Some(path),
            Self::Pattern { .. } => None,
        }
    }
}

/// Convenience alias for reader operations.
pub type ReadResult<T> = Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_onix_display_names_root() {
        let err = ReadError::NotOnix {
            path: PathBuf::from("in/feed.xml"),
            root: "rss".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("in/feed.xml"));
        assert!(msg.contains("<rss>"));
    }

    #[test]
    fn short_tags_display() {
        let err = ReadError::ShortTags {
            path: PathBuf::from("a.xml"),
        };
        assert_eq!(
            format!("{err}"),
            "a.xml uses ONIX short tags, which are not supported"
        );
    }

    #[test]
    fn path_accessor() {
        let err = ReadError::Truncated {
            path: PathBuf::from("b.xml"),
            open: "Product".to_string(),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("b.xml")));
    }
}
