//! Private-file helpers.
//!
//! Key and credential files are created owner-only (0600 on Unix). Each
//! helper opens, writes, and closes its handle before returning.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use tracing::warn;

#[cfg(unix)]
use crate::core::constants::FILE_MODE;
use crate::error::{Error, Result};

fn private_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options
}

/// Restrict an existing file to owner-only access (Unix only).
fn restrict(path: &Path, op: &'static str) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(FILE_MODE))
            .map_err(Error::io(op, path))?;
    }
    #[cfg(not(unix))]
    let _ = (path, op);
    Ok(())
}

/// Create or truncate `path` and write `contents` to it.
pub(crate) fn write_private(path: &Path, contents: &[u8], op: &'static str) -> Result<()> {
    let mut file = private_options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(Error::io(op, path))?;
    file.write_all(contents).map_err(Error::io(op, path))?;
    file.sync_all().map_err(Error::io(op, path))?;
    drop(file);
    restrict(path, op)
}

/// Append `contents` to `path`, creating it if missing.
///
/// The whole buffer is handed to a single `write_all` so a line is never
/// split across calls.
pub(crate) fn append_private(path: &Path, contents: &[u8], op: &'static str) -> Result<()> {
    let mut file = private_options()
        .append(true)
        .create(true)
        .open(path)
        .map_err(Error::io(op, path))?;
    file.write_all(contents).map_err(Error::io(op, path))?;
    file.flush().map_err(Error::io(op, path))
}

/// Write `contents` to a sibling temporary file, then rename it over `path`.
pub(crate) fn replace_private(path: &Path, contents: &[u8], op: &'static str) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    if let Err(e) = write_private(tmp_path, contents, op) {
        let _ = fs::remove_file(tmp_path);
        return Err(match e {
            Error::Io { op, source, .. } => Error::Io {
                op,
                path: path.to_path_buf(),
                source,
            },
            other => other,
        });
    }

    fs::rename(tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(tmp_path);
        Error::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Warn when `path` is readable by anyone other than its owner (Unix only).
pub(crate) fn warn_if_exposed(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = fs::metadata(path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                warn!(
                    path = %path.display(),
                    mode = %format!("{:o}", mode),
                    "insecure key file permissions"
                );
            }
        }
    }
    #[cfg(not(unix))]
    let _ = path;
}
