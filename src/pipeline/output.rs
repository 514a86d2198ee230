use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::idempotency::output_digest;

/// Mode for a newly created document on Unix
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Serialize `items` as a pretty-printed JSON array and replace `path` with it.
///
/// The document is written to a temporary file beside `path` and renamed
/// into place, so a failed run never leaves a partial file behind. The
/// parent directory must already exist. The replaced file keeps the
/// permissions of the one it overwrites; a new file gets `0o644` on Unix.
/// Non-ASCII text is written as UTF-8, not escaped. Returns the document digest.
pub fn write_json_atomic<T: Serialize>(path: &Path, items: &[T]) -> Result<String> {
    let bytes = serde_json::to_vec_pretty(items)?;
    let digest = output_digest(&bytes);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    if let Some(permissions) = target_permissions(path)? {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ImportError::Io(e.error))?;

    debug!(bytes = bytes.len(), digest = %digest, "wrote {}", path.display());
    Ok(digest)
}

/// Permissions the written document should carry, `None` to keep the temp file's
fn target_permissions(path: &Path) -> Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(existing) => Ok(Some(existing.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
