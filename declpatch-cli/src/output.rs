//! Output writers for `declpatch`.

use std::io::Write;

use camino::Utf8Path;

use crate::error::DeclpatchError;

/// Writes the merged payload to `out`, or to standard output when no path
/// was given.
///
/// # Errors
///
/// Returns a [`DeclpatchError::Io`] tagged with the destination when the
/// write fails.
pub fn write_merged(out: Option<&Utf8Path>, payload: &str) -> Result<(), DeclpatchError> {
    match out {
        Some(path) => std::fs::write(path, payload).map_err(|io_err| DeclpatchError::Io {
            path: path.to_path_buf(),
            source: io_err,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(payload.as_bytes())
                .map_err(|io_err| DeclpatchError::Io {
                    path: Utf8Path::new("<stdout>").to_path_buf(),
                    source: io_err,
                })
        }
    }
}
