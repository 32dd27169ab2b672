//! Process-wide helpers: working directory, temp directory and absolute paths.

use std::io;

use once_cell::sync::OnceCell;

use crate::core::Result;
use crate::error::Error;
use crate::path::NativePath;
use crate::sys;

static TEMP_DIR: OnceCell<NativePath> = OnceCell::new();

/// Returns the current working directory of the process.
pub fn current_dir() -> Result<NativePath> {
    let cwd = std::env::current_dir().map_err(|err| Error::from_io("getcwd", "", err))?;
    match cwd.into_os_string().into_string() {
        Ok(cwd) => Ok(NativePath::new(cwd)),
        Err(cwd) => Err(Error::from_io(
            "getcwd",
            cwd.to_string_lossy(),
            io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        )),
    }
}

/// Returns the temp directory.
///
/// Looked up once per process from the environment (`TMPDIR` on POSIX; `TMP`, `TEMP`,
/// `USERPROFILE` on Windows), falling back to the platform default when none is set.
pub fn temp_dir() -> &'static NativePath {
    TEMP_DIR.get_or_init(|| {
        let dir = lookup_temp_dir(|name| std::env::var(name).ok());
        log::debug!("temp directory: {}", dir);
        dir
    })
}

fn lookup_temp_dir<F>(var: F) -> NativePath
where
    F: Fn(&str) -> Option<String>,
{
    sys::TEMP_DIR_VARS
        .iter()
        .filter_map(|name| var(*name))
        .find(|value| !value.is_empty())
        .map(NativePath::new)
        .unwrap_or_else(|| NativePath::new(sys::DEFAULT_TEMP_DIR))
}

/// Returns `path` unchanged if it is absolute, otherwise joined onto the working directory.
pub fn abspath<P: AsRef<NativePath>>(path: P) -> Result<NativePath> {
    let path = path.as_ref();
    if path.is_abspath() {
        return Ok(path.clone());
    }
    Ok(current_dir()?.join(path))
}

/// Creates a new empty file named `<prefix><random>.tmp` inside `dir` and returns its path.
///
/// The file is kept on disk; removing it is up to the caller.
pub fn generate_tmp_filename<P: AsRef<NativePath>>(dir: P, prefix: &str) -> Result<NativePath> {
    let dir = dir.as_ref();
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".tmp")
        .tempfile_in(dir.as_str())
        .map_err(|err| Error::from_io("create", dir.as_str(), err))?;
    let (_, path) = file
        .keep()
        .map_err(|err| Error::from_io("create", dir.as_str(), err.error))?;
    log::trace!("created temp file {}", path.display());
    match path.into_os_string().into_string() {
        Ok(path) => Ok(NativePath::new(path)),
        Err(path) => Err(Error::from_io(
            "create",
            path.to_string_lossy(),
            io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        )),
    }
}
