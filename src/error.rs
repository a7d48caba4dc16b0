//! Crate-wide error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can surface from the admin console core.
///
/// Recoverable conditions (unknown page, missing env file, odd route token
/// counts) are handled locally by the components that encounter them and
/// never appear here.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The persisted configuration exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted configuration could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored route string could not be tokenized (unterminated quote).
    #[error("malformed route string: {0}")]
    RouteParse(#[from] shell_words::ParseError),

    /// Dispatch was attempted against an empty page registry.
    #[error("no pages registered")]
    NoPages,
}
