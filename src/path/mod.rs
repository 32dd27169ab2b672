//! String-backed path values.
//!
//! ### Key points:
//! - **Join**: parts are glued with exactly one separator at each boundary; empty parts vanish.
//! - **Split**: every segment keeps its trailing separator, so joining the segments again gives
//!   back the normalized path.
//! - **Raw helpers**: `dirname` and `extension` work on any string, including strings written
//!   under the opposite policy.
//! - **Policies**: `Path<Posix>` and `Path<Windows>` are distinct types; `Path` alone means the
//!   policy of the build platform.

mod separator;

use std::fmt;
use std::marker::PhantomData;

pub use separator::{Native, Posix, Separator, Windows};

/// Path under the build platform's policy.
pub type NativePath = Path<Native>;

/// Path under the POSIX policy.
pub type PosixPath = Path<Posix>;

/// Path under the Windows policy.
pub type WindowsPath = Path<Windows>;

/// An immutable path string tied to a separator policy.
///
/// Every transformation (`join`, `dirname`, ...) produces a new value; a `Path` is never changed
/// in place and holds no OS resources, so it can be cloned and shared freely.
///
/// Equality and ordering compare the underlying strings, which makes `Path` usable as a
/// `BTreeMap`/`HashMap` key.
///
/// ### Example:
/// ```
/// use fspath_kit::{PosixPath, join, Posix};
///
/// let path = PosixPath::from_parts(["a", "", "b", "c.txt"]);
/// assert_eq!(path, "a/b/c.txt");
/// assert_eq!(path.dirname(), "a/b");
/// assert_eq!(path.extension(), "txt");
///
/// let same = join!(<Posix> "a", "b/", "c.txt");
/// assert_eq!(same, path);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<S: Separator = Native> {
    inner: String,
    policy: PhantomData<S>,
}

impl<S: Separator> Path<S> {
    /// Wraps `path` as is, without any normalization.
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            inner: path.into(),
            policy: PhantomData,
        }
    }

    /// Joins an arbitrary number of parts into one path.
    ///
    /// A separator is inserted before a non-empty part only when the accumulated path is
    /// non-empty and does not already end with a separator. Empty parts are skipped.
    pub fn from_parts<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut inner = String::new();
        for part in parts {
            Self::push_part(&mut inner, part.as_ref());
        }
        Self::new(inner)
    }

    /// Returns a new path with `part` appended.
    pub fn join<T: AsRef<str>>(&self, part: T) -> Self {
        let mut inner = self.inner.clone();
        Self::push_part(&mut inner, part.as_ref());
        Self::new(inner)
    }

    /// Splits the path into segments, each ending with (and including) its separator.
    /// The last segment has no separator if the path does not end with one.
    pub fn split(&self) -> Split<'_, S> {
        Split::new(&self.inner)
    }

    /// Returns everything before the last separator, see [`dirname`].
    pub fn dirname(&self) -> &str {
        dirname(&self.inner)
    }

    /// Returns everything after the last `.`, see [`extension`].
    pub fn extension(&self) -> &str {
        extension(&self.inner)
    }

    /// Checks the path against the absolute-path syntax of the policy.
    pub fn is_abspath(&self) -> bool {
        S::is_abspath(&self.inner)
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    fn push_part(buf: &mut String, part: &str) {
        if part.is_empty() {
            return;
        }
        if let Some(last) = buf.chars().next_back() {
            if !S::is_separator(last) {
                buf.push(S::SEPARATOR);
            }
        }
        buf.push_str(part);
    }
}

impl<S: Separator> fmt::Debug for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<S: Separator> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<S: Separator> From<&str> for Path<S> {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl<S: Separator> From<String> for Path<S> {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl<S: Separator> From<Path<S>> for String {
    fn from(path: Path<S>) -> Self {
        path.inner
    }
}

impl<S: Separator> AsRef<str> for Path<S> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<S: Separator> AsRef<Path<S>> for Path<S> {
    fn as_ref(&self) -> &Path<S> {
        self
    }
}

impl AsRef<std::path::Path> for Path<Native> {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.inner)
    }
}

impl<S: Separator> PartialEq<str> for Path<S> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl<S: Separator> PartialEq<&str> for Path<S> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

/// Iterator over the segments of a path, created by [`Path::split`].
#[derive(Debug, Clone)]
pub struct Split<'a, S: Separator> {
    rest: &'a str,
    policy: PhantomData<S>,
}

impl<'a, S: Separator> Split<'a, S> {
    pub fn new(path: &'a str) -> Self {
        Self {
            rest: path,
            policy: PhantomData,
        }
    }
}

impl<'a, S: Separator> Iterator for Split<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| S::is_separator(c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(self.rest.len());
        let (segment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(segment)
    }
}

/// Returns the part of `path` before its last separator.
///
/// `/` is searched first and `\` only when there is no `/` at all, so the function works on
/// strings of either policy. If there is no separator, `path` is returned unchanged.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/').or_else(|| path.rfind('\\')) {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Returns the part of `path` after its last `.`, or an empty string when there is no `.`.
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(pos) => &path[pos + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    mod join {
        use super::*;

        #[test]
        fn test_join_simple() {
            assert_eq!(PosixPath::from_parts(["a", "b", "c"]), "a/b/c");
            assert_eq!(WindowsPath::from_parts(["a", "b", "c"]), "a\\b\\c");
        }

        #[test]
        fn test_join_skips_empty_parts() {
            assert_eq!(PosixPath::from_parts(["a", "", "b", "", "c"]), "a/b/c");
            assert_eq!(
                PosixPath::from_parts(["a", "", "b"]),
                PosixPath::from_parts(["a", "b"])
            );
            assert_eq!(PosixPath::from_parts(["", "a"]), "a");
            assert_eq!(PosixPath::from_parts(["", ""]), "");
            assert_eq!(PosixPath::from_parts(Vec::<String>::new()), "");
        }

        #[test]
        fn test_join_no_duplicate_separator() {
            assert_eq!(PosixPath::from_parts(["a/", "b"]), "a/b");
            assert_eq!(PosixPath::from_parts(["/", "usr", "lib"]), "/usr/lib");
            assert_eq!(WindowsPath::from_parts(["a/b", "c"]), "a/b\\c");
            assert_eq!(WindowsPath::from_parts(["C:/", "Documents"]), "C:/Documents");
            assert_eq!(WindowsPath::from_parts(["C:\\", "Documents"]), "C:\\Documents");
        }

        #[test]
        fn test_join_backslash_is_a_name_char_on_posix() {
            assert_eq!(PosixPath::from_parts(["a\\", "b"]), "a\\/b");
        }

        #[test]
        fn test_join_method() {
            let base = PosixPath::new("/tmp");
            let child = base.join("x").join("").join("y.txt");
            assert_eq!(child, "/tmp/x/y.txt");
            // the source is untouched
            assert_eq!(base, "/tmp");
        }

        #[test]
        fn test_join_macro_mixed_parts() {
            let root = PosixPath::new("/root");
            let name = String::from("b");
            let path = crate::join!(<Posix> root, "a", name, "");
            assert_eq!(path, "/root/a/b");

            let win = crate::join!(<Windows> "C:", "x");
            assert_eq!(win, "C:\\x");
        }

        #[test]
        fn test_join_macro_native_policy() {
            let path: NativePath = crate::join!("a", "b");
            let expected = format!("a{}b", Native::SEPARATOR);
            assert_eq!(path, expected.as_str());
        }
    }

    mod split {
        use super::*;

        #[test]
        fn test_split_keeps_trailing_separators() {
            let path = PosixPath::new("/usr/lib/x.so");
            let segments: Vec<_> = path.split().collect();
            assert_eq!(segments, vec!["/", "usr/", "lib/", "x.so"]);
        }

        #[test]
        fn test_split_trailing_separator() {
            let path = PosixPath::new("a/b/");
            let segments: Vec<_> = path.split().collect();
            assert_eq!(segments, vec!["a/", "b/"]);
        }

        #[test]
        fn test_split_empty() {
            assert_eq!(PosixPath::new("").split().count(), 0);
        }

        #[test]
        fn test_split_windows_both_separators() {
            let path = WindowsPath::new("C:\\Users/me\\x");
            let segments: Vec<_> = path.split().collect();
            assert_eq!(segments, vec!["C:\\", "Users/", "me\\", "x"]);
        }

        #[test]
        fn test_split_reverses_join() {
            let parts = ["alpha", "beta", "gamma", "d.txt"];
            let path = PosixPath::from_parts(parts);
            let segments: Vec<_> = path.split().map(|s| s.trim_end_matches('/')).collect();
            assert_eq!(segments, parts);
        }

        #[test]
        fn test_rejoin_normalizes() {
            let path = PosixPath::new("/a/b/c");
            let rejoined = PosixPath::from_parts(path.split());
            assert_eq!(rejoined, path);
        }
    }

    mod decompose {
        use super::*;

        #[test]
        fn test_dirname() {
            assert_eq!(dirname("a/b/c.txt"), "a/b");
            assert_eq!(dirname("c.txt"), "c.txt");
            assert_eq!(dirname("/c.txt"), "");
            assert_eq!(dirname("a\\b\\c.txt"), "a\\b");
            // `/` wins over `\` even when it comes first
            assert_eq!(dirname("a/b\\c.txt"), "a");
        }

        #[test]
        fn test_dirname_opposite_policy() {
            let path = PosixPath::new("C:\\dir\\file");
            assert_eq!(path.dirname(), "C:\\dir");
            let path = WindowsPath::new("/usr/lib/x");
            assert_eq!(path.dirname(), "/usr/lib");
        }

        #[test]
        fn test_extension() {
            assert_eq!(extension("a/b/c.txt"), "txt");
            assert_eq!(extension("a/b/c"), "");
            assert_eq!(extension("archive.tar.gz"), "gz");
            assert_eq!(extension("dot."), "");
            assert_eq!(PosixPath::new("x/y.rs").extension(), "rs");
        }

        #[test]
        fn test_is_abspath() {
            assert!(PosixPath::new("/a").is_abspath());
            assert!(!PosixPath::new("a/b").is_abspath());
            assert!(WindowsPath::new("C:/a").is_abspath());
            assert!(!WindowsPath::new("C:").is_abspath());
            assert!(!WindowsPath::new("a\\b").is_abspath());
        }
    }

    mod compare {
        use super::*;

        #[test]
        fn test_equality_is_string_equality() {
            assert_eq!(PosixPath::new("a/b"), PosixPath::from_parts(["a", "b"]));
            assert_ne!(PosixPath::new("a/b"), PosixPath::new("a/b/"));
        }

        #[test]
        fn test_ordering_as_map_key() {
            let set: BTreeSet<PosixPath> =
                ["b", "a/c", "a"].into_iter().map(PosixPath::from).collect();
            let ordered: Vec<_> = set.iter().map(|p| p.as_str()).collect();
            assert_eq!(ordered, vec!["a", "a/c", "b"]);
        }

        #[test]
        fn test_display_and_debug() {
            let path = PosixPath::new("a/b");
            assert_eq!(path.to_string(), "a/b");
            assert_eq!(format!("{:?}", path), "\"a/b\"");
            assert_eq!(String::from(path), "a/b");
        }
    }
}
