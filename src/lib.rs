//! A small cross-platform layer over filesystem paths and directory traversal.
//!
//! ### Overview
//!
//! `fspath-kit` gives you a string-backed [`Path`] value with separator-aware joining,
//! splitting and decomposition, a handful of directory operations (`mkdir`, `mkdir_parents`,
//! `rm`, `rmrf`, ...) that report failures as typed [`Error`]s, and a lazy directory iterator
//! whose entries resolve their type only when asked.
//!
//! **Key ideas**:
//! - **One interface, two backends**: POSIX and Windows differ only in the [`Separator`] policy
//!   and the native error table; the right one is picked at build time.
//! - **Typed errors**: native error codes are translated into a small closed [`ErrorKind`] set,
//!   while the [`Error`] keeps the operation, path, code and OS message for diagnostics.
//! - **No hidden magic**: no retries, no rollback, no sorting of directory entries.
//!
//! ### Example
//!
//! ```no_run
//! use fspath_kit::{join, env, fs};
//!
//! let root = join!(env::temp_dir(), "my_workspace");
//! fs::mkdir_parents(join!(root, "a", "b")).unwrap();
//!
//! for entry in fs::iter_dir(&root).unwrap() {
//!     let entry = entry.unwrap();
//!     println!("{} is dir: {}", entry.name(), entry.is_dir().unwrap());
//! }
//!
//! fs::rmrf(&root).unwrap();
//! ```

mod core;
pub mod env;
pub mod error;
pub mod fs;
pub mod path;
mod sys;

pub use crate::core::Result;
pub use error::{Error, ErrorKind, translate};
pub use fs::{
    DirEntry, DirIter, EntryType, exists, iter_dir, mkdir, mkdir_if_not_exists, mkdir_parents,
    rm, rmrf, rmrf_if_exists,
};
pub use path::{
    Native, NativePath, Path, Posix, PosixPath, Separator, Split, Windows, WindowsPath, dirname,
    extension,
};

/// Joins any number of path-like parts (string literals, `String`s, `Path`s) into a [`Path`].
///
/// Empty parts are skipped and exactly one separator is placed at each boundary. The policy
/// defaults to the build platform's; put a policy in angle brackets to choose another one.
///
/// ```
/// use fspath_kit::{join, Posix, Windows};
///
/// assert_eq!(join!(<Posix> "a", "", "b", "c"), "a/b/c");
/// assert_eq!(join!(<Windows> "C:/", "Documents"), "C:/Documents");
/// ```
#[macro_export]
macro_rules! join {
    (<$policy:ty> $($part:expr),+ $(,)?) => {
        $crate::Path::<$policy>::from_parts([$(::core::convert::AsRef::<str>::as_ref(&$part)),+])
    };
    ($($part:expr),+ $(,)?) => {
        <$crate::Path>::from_parts([$(::core::convert::AsRef::<str>::as_ref(&$part)),+])
    };
}
