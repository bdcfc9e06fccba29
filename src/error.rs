use std::{error, fmt, io, path::PathBuf};

use crate::level::Category;

/// Errors raised while loading a level or config file.
///
/// None of these are fatal to a running session: the caller logs them and
/// carries on with defaults (no collision geometry, default config).
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The file is not valid JSON for what it should contain.
    Json {
        /// Path (or `<inline>`) of the document
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// Only JSON exports are understood.
    UnsupportedFormat(String),
    /// The document parsed but holds values we cannot use.
    Invalid(String),
}

impl LoadError {
    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LoadError::Json {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            LoadError::Json { path, source } => {
                write!(f, "Failed to parse JSON {}: {}", path.display(), source)
            }
            LoadError::UnsupportedFormat(path) => {
                write!(f, "Unsupported level format (expected .json): {}", path)
            }
            LoadError::Invalid(msg) => write!(f, "Invalid contents: {}", msg),
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An expected object group was absent from the level file.
///
/// The category is treated as empty. A missing ground layer leaves the level
/// with nothing to stand on, so it is reported as a hard warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLayer {
    /// The category whose layer was not found
    pub category: Category,
}

impl MissingLayer {
    /// Whether the missing layer leaves the level without ground collision.
    pub fn is_hard(&self) -> bool {
        self.category == Category::Ground
    }
}

impl fmt::Display for MissingLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No object layer named '{}' was found in the level",
            self.category.layer_name()
        )
    }
}
