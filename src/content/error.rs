//! Error types for content loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while splitting or decoding a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    /// YAML block could not be decoded into event metadata
    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON block could not be decoded into event metadata
    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    /// Opening fence names a format other than YAML or JSON
    #[error("unsupported front-matter language {0:?}")]
    UnsupportedLanguage(String),
}

/// Errors that abort an event listing
#[derive(Error, Debug)]
pub enum LoadError {
    /// A directory entry or file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file carries a malformed front-matter block
    #[error("malformed front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

impl LoadError {
    /// Path of the file that caused the failure
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::FrontMatter { path, .. } => path,
        }
    }
}
