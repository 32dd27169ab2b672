//! Typed filesystem errors.
//!
//! Native failures arrive as raw OS codes. [`translate`] maps a code onto the small closed
//! [`ErrorKind`] set; [`Error`] wraps the kind together with everything needed to diagnose the
//! failure: the operation, the path, the native code, the OS message and the caller location.

use std::fmt;
use std::io;
use std::panic::Location;

use crate::sys;

/// The closed set of failure kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("permission denied")]
    PermissionDenied,
    #[error("not a directory")]
    NotADirectory,
    #[error("unimplemented")]
    Unimplemented,
    /// A native code with no dedicated kind.
    ///
    /// `-1` marks a failure that carried no OS code. Such failures are classified by their
    /// `io::ErrorKind` instead, and the kinds with no counterpart in this set land here.
    #[error("unknown error (code {0})")]
    Unknown(i32),
    /// The API was misused, e.g. an unopened directory iterator was read.
    #[error("invalid state")]
    InvalidState,
}

/// Maps a native error code of the build platform onto an [`ErrorKind`].
///
/// Only failure codes may be passed in: callers check for success before translating.
pub fn translate(code: i32) -> ErrorKind {
    debug_assert_ne!(code, 0, "success code passed to the error translator");
    sys::translate(code)
}

/// A failed filesystem operation.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    operation: &'static str,
    path: String,
    code: Option<i32>,
    message: String,
    location: &'static Location<'static>,
}

impl Error {
    /// Builds an error from a native code, running it through [`translate`].
    #[track_caller]
    pub(crate) fn from_code(operation: &'static str, path: impl Into<String>, code: i32) -> Self {
        Self {
            kind: translate(code),
            operation,
            path: path.into(),
            code: Some(code),
            message: sys::error_message(code),
            location: Location::caller(),
        }
    }

    /// Builds an error from a failed std call.
    ///
    /// Errors without an OS code fall back to their `io::ErrorKind`: the kinds with a direct
    /// counterpart keep it, `Unsupported` becomes `Unimplemented` and the rest `Unknown(-1)`.
    #[track_caller]
    pub(crate) fn from_io(
        operation: &'static str,
        path: impl Into<String>,
        err: io::Error,
    ) -> Self {
        match err.raw_os_error() {
            Some(code) if code != 0 => Self::from_code(operation, path, code),
            _ => Self {
                kind: kind_from_io(err.kind()),
                operation,
                path: path.into(),
                code: None,
                message: err.to_string(),
                location: Location::caller(),
            },
        }
    }

    #[track_caller]
    pub(crate) fn invalid_state(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidState,
            operation,
            path: String::new(),
            code: None,
            message: message.into(),
            location: Location::caller(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the failed operation, e.g. `"mkdir"`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The native error code, if the failure came from the OS.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Human-readable OS description; empty if none is available.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location of the call that failed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.operation)?;
        if !self.path.is_empty() {
            write!(f, " for '{}'", self.path)?;
        }
        write!(f, ": {}", self.kind)?;
        match (self.code, self.message.is_empty()) {
            (Some(code), false) => write!(f, " (os error {}, str: {})", code, self.message)?,
            (Some(code), true) => write!(f, " (os error {})", code)?,
            (None, false) => write!(f, " ({})", self.message)?,
            (None, true) => {}
        }
        write!(f, " at {}:{}", self.location.file(), self.location.line())
    }
}

impl std::error::Error for Error {}

fn kind_from_io(kind: io::ErrorKind) -> ErrorKind {
    match kind {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
        io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
        io::ErrorKind::NotADirectory => ErrorKind::NotADirectory,
        io::ErrorKind::Unsupported => ErrorKind::Unimplemented,
        _ => ErrorKind::Unknown(-1),
    }
}
