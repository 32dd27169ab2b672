//! Native backend.
//!
//! The calls into the OS go through `std::fs`; what differs per platform (the error-code table,
//! temp-directory variables) lives in `unix` or `windows` and is selected at build time.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{DEFAULT_TEMP_DIR, TEMP_DIR_VARS, translate};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{DEFAULT_TEMP_DIR, TEMP_DIR_VARS, translate};

use std::fs;
use std::io;

/// Renders the OS description of `code`. Never fails: unknown codes give whatever the OS
/// reports, and an empty description yields an empty string.
pub(crate) fn error_message(code: i32) -> String {
    let text = io::Error::from_raw_os_error(code).to_string();
    let suffix = format!("(os error {})", code);
    if let Some(message) = text.strip_suffix(suffix.as_str()) {
        return message.trim_end().to_owned();
    }
    text
}

pub(crate) fn create_dir(path: &str) -> io::Result<()> {
    fs::create_dir(path)
}

/// Follows symlinks, like `stat`.
pub(crate) fn exists(path: &str) -> io::Result<()> {
    fs::metadata(path).map(|_| ())
}

/// Does not follow symlinks: a link to a directory is not a directory.
pub(crate) fn is_dir(path: &str) -> io::Result<bool> {
    Ok(fs::symlink_metadata(path)?.is_dir())
}

/// Removes a file, or a directory if it is empty.
pub(crate) fn remove(path: &str) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// One name read from a native directory stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawName {
    Name(String),
    /// The OS name is not valid UTF-8; holds a lossy rendering for diagnostics.
    Undecodable(String),
}

/// A native directory stream yielding raw entry names.
/// Dropping it releases the native handle.
pub(crate) trait RawDir {
    /// Returns the next name, or `None` once the stream is exhausted.
    fn read_next(&mut self) -> io::Result<Option<RawName>>;
}

impl RawDir for fs::ReadDir {
    fn read_next(&mut self) -> io::Result<Option<RawName>> {
        let Some(entry) = self.next() else {
            return Ok(None);
        };
        let name = match entry?.file_name().into_string() {
            Ok(name) => RawName::Name(name),
            Err(name) => RawName::Undecodable(name.to_string_lossy().into_owned()),
        };
        Ok(Some(name))
    }
}

pub(crate) fn open_dir(path: &str) -> io::Result<Box<dyn RawDir>> {
    Ok(Box::new(fs::read_dir(path)?))
}
