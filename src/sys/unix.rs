//! POSIX backend.

use crate::error::ErrorKind;

pub(crate) const TEMP_DIR_VARS: &[&str] = &["TMPDIR"];
pub(crate) const DEFAULT_TEMP_DIR: &str = "/tmp";

pub(crate) fn translate(code: i32) -> ErrorKind {
    match code {
        libc::EPERM | libc::EACCES => ErrorKind::PermissionDenied,
        libc::ENOENT => ErrorKind::NotFound,
        libc::EEXIST => ErrorKind::AlreadyExists,
        libc::ENOTDIR => ErrorKind::NotADirectory,
        _ => ErrorKind::Unknown(code),
    }
}
