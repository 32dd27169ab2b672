//! Windows backend.

use crate::error::ErrorKind;

const ERROR_FILE_NOT_FOUND: i32 = 2;
const ERROR_PATH_NOT_FOUND: i32 = 3;
const ERROR_ACCESS_DENIED: i32 = 5;
const ERROR_FILE_EXISTS: i32 = 80;
const ERROR_CALL_NOT_IMPLEMENTED: i32 = 120;
const ERROR_ALREADY_EXISTS: i32 = 183;
const ERROR_DIRECTORY: i32 = 267;

pub(crate) const TEMP_DIR_VARS: &[&str] = &["TMP", "TEMP", "USERPROFILE"];
pub(crate) const DEFAULT_TEMP_DIR: &str = "C:\\Windows\\Temp";

pub(crate) fn translate(code: i32) -> ErrorKind {
    match code {
        ERROR_ACCESS_DENIED => ErrorKind::PermissionDenied,
        ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => ErrorKind::NotFound,
        ERROR_ALREADY_EXISTS | ERROR_FILE_EXISTS => ErrorKind::AlreadyExists,
        ERROR_DIRECTORY => ErrorKind::NotADirectory,
        ERROR_CALL_NOT_IMPLEMENTED => ErrorKind::Unimplemented,
        _ => ErrorKind::Unknown(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_windows_table() {
        assert_eq!(translate(ERROR_ACCESS_DENIED), ErrorKind::PermissionDenied);
        assert_eq!(translate(ERROR_PATH_NOT_FOUND), ErrorKind::NotFound);
        assert_eq!(translate(ERROR_ALREADY_EXISTS), ErrorKind::AlreadyExists);
        assert_eq!(translate(ERROR_DIRECTORY), ErrorKind::NotADirectory);
        assert_eq!(translate(ERROR_CALL_NOT_IMPLEMENTED), ErrorKind::Unimplemented);
        assert_eq!(translate(1234), ErrorKind::Unknown(1234));
    }
}
