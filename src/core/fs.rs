//! Filesystem helpers for the generated artifacts.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::core::constants::{INITDB_DIR_MODE, SECRET_FILE_MODE};
use crate::error::{Result, ScaffoldError};

/// Write `content` to `path`, creating or truncating it.
///
/// With `restrict_permissions` the file ends up owner read/write only, even
/// when it already existed with wider permissions.
///
/// # Errors
///
/// Returns `ScaffoldError::Write` if the parent directory is missing or the
/// file cannot be written.
pub fn write_file(path: &Path, content: &str, restrict_permissions: bool) -> Result<()> {
    let write_err = |source: std::io::Error| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    };

    if restrict_permissions {
        write_restricted(path, content).map_err(write_err)?;
    } else {
        fs::write(path, content).map_err(write_err)?;
    }

    info!(path = %path.display(), restricted = restrict_permissions, "created file");
    Ok(())
}

#[cfg(unix)]
fn write_restricted(path: &Path, content: &str) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(SECRET_FILE_MODE)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    // `mode` only applies on creation.
    fs::set_permissions(path, fs::Permissions::from_mode(SECRET_FILE_MODE))
}

#[cfg(not(unix))]
fn write_restricted(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Create a single directory.
///
/// # Errors
///
/// Returns `ScaffoldError::DirExists` if anything already exists at `path`,
/// or `ScaffoldError::CreateDir` for any other failure.
pub fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(INITDB_DIR_MODE);
    }

    builder.create(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            ScaffoldError::DirExists(path.to_path_buf())
        } else {
            ScaffoldError::CreateDir {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    info!(path = %path.display(), "created directory");
    Ok(())
}

/// Resolve `.` and `..` components lexically, without touching the disk.
///
/// `..` at the root (or at the start of a relative path) is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last().copied() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
