//! Gate store error types.

use std::path::PathBuf;

/// Errors that can occur when retrieving gate records.
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    /// The backing file could not be read
    #[error("failed to read gate data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing data does not have the expected shape
    #[error("malformed gate data in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// The store could not be reached at all
    #[error("gate store unavailable: {0}")]
    Unavailable(String),
}
