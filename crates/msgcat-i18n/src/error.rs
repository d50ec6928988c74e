//! Error types for loading message sources

use msgcat_common::MsgcatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a catalog. Retrieval itself never fails.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A message file could not be read.
    #[error("Failed to read message file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A message file is not valid YAML.
    #[error("Failed to parse message file {origin}: {source}")]
    Parse {
        /// File or resource name.
        origin: String,
        /// Underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document root is a scalar or a sequence.
    #[error("Message file {origin} must contain a mapping at its root")]
    InvalidRoot {
        /// File or resource name.
        origin: String,
    },
}

/// Result type for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for MsgcatError {
    fn from(err: CatalogError) -> Self {
        Self::localization(err.to_string(), None, err)
    }
}
