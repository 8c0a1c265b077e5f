//! Error types for `declpatch`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `declpatch` pipeline.
#[derive(Debug, Error)]
pub enum DeclpatchError {
    /// Loading or parsing the declarations failed.
    #[error(transparent)]
    Merge(#[from] decl_patch::MergeError),

    /// Serialising the merged tree to JSON failed.
    #[error("failed to encode the merged declaration as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the merged output failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being written when the error occurred.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
