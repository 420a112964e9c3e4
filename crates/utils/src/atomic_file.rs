//! Atomic file writes so a failed run never leaves a truncated output file

use ssmenv_core::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory the temporary file is staged in; must be the destination's own
/// directory so the final rename stays on one file system.
fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// The file that actually gets replaced, and its current permissions.
///
/// An existing destination is canonicalized so symlinks are written through
/// rather than replaced.
fn resolve_target(path: &Path) -> std::io::Result<(PathBuf, Option<fs::Permissions>)> {
    match fs::canonicalize(path) {
        Ok(real) => {
            let permissions = fs::metadata(&real)?.permissions();
            Ok((real, Some(permissions)))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((path.to_path_buf(), None)),
        Err(e) => Err(e),
    }
}

fn create_temp(temp_path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create_new(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(NEW_FILE_MODE);
    }
    options.open(temp_path)
}

/// Mode for files that did not exist before; the content is secret
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o600;

/// Write data to a file atomically by writing to a temporary file and renaming.
///
/// The parent directory must already exist. An existing destination keeps its
/// permissions, and a symlinked destination has its target replaced. New files
/// are created owner-only. Every failure is reported as [`Error::WriteError`]
/// against `path`, and the destination is left untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let (target, permissions) = resolve_target(path).map_err(|e| Error::write_error(path, e))?;
    let temp_path = staging_dir(&target).join(format!(".{}.tmp", Uuid::new_v4()));

    let result = (|| -> std::io::Result<()> {
        let mut file = create_temp(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        if let Some(permissions) = permissions {
            fs::set_permissions(&temp_path, permissions)?;
        }
        Ok(())
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::write_error(path, e));
    }

    fs::rename(&temp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::write_error(path, e)
    })?;

    tracing::trace!(
        path = %path.display(),
        target = %target.display(),
        bytes = content.len(),
        "atomic write complete"
    );
    Ok(())
}

/// Write string content to a file atomically
pub fn write_atomic_string(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
