//! Separator policies.
//!
//! A policy fixes the separator that `join` inserts, which characters count as separators, and
//! what an absolute path looks like. Policies are zero-sized marker types, so `Path<Posix>` and
//! `Path<Windows>` are distinct types and cannot be mixed by accident.

use std::fmt::Debug;
use std::hash::Hash;

/// Platform rule for path separators and absolute-path syntax.
pub trait Separator:
    Debug + Copy + Clone + Default + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// The character inserted between joined parts.
    const SEPARATOR: char;

    /// Returns true if `c` terminates a path segment under this policy.
    fn is_separator(c: char) -> bool;

    /// Returns true if `path` is absolute under this policy.
    fn is_abspath(path: &str) -> bool;
}

/// POSIX-style paths: `/` separates, absolute paths start with `/`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posix;

/// Windows-style paths: `\` is inserted, both `\` and `/` separate, absolute paths look like `C:\`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Windows;

impl Separator for Posix {
    const SEPARATOR: char = '/';

    fn is_separator(c: char) -> bool {
        c == '/'
    }

    fn is_abspath(path: &str) -> bool {
        path.starts_with(Self::SEPARATOR)
    }
}

impl Separator for Windows {
    const SEPARATOR: char = '\\';

    fn is_separator(c: char) -> bool {
        c == '\\' || c == '/'
    }

    /// Only the classic drive-letter form (`X:\` or `X:/`) is absolute.
    fn is_abspath(path: &str) -> bool {
        let mut chars = path.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(_), Some(':'), Some(third)) => Self::is_separator(third),
            _ => false,
        }
    }
}

/// The policy of the platform this crate was built for.
#[cfg(unix)]
pub type Native = Posix;

/// The policy of the platform this crate was built for.
#[cfg(windows)]
pub type Native = Windows;
