//! Filesystem operations on native paths.
//!
//! Every fallible operation returns on the first native failure with a translated [`Error`];
//! nothing is retried. `mkdir_parents` and `rmrf` are not atomic: on failure, whatever was
//! already created or removed stays that way.

mod dir;
mod entry;

pub use dir::{DirIter, iter_dir};
pub use entry::{DirEntry, EntryType};

use crate::core::Result;
use crate::error::{Error, ErrorKind};
use crate::path::NativePath;
use crate::sys;

/// Returns true if `path` can be stat'ed. Any failure, including a permission error, gives
/// `false`.
pub fn exists<P: AsRef<NativePath>>(path: P) -> bool {
    sys::exists(path.as_ref().as_str()).is_ok()
}

/// Creates exactly one directory.
///
/// Fails with `AlreadyExists` if `path` exists, `NotFound` if the parent is missing,
/// `NotADirectory` if a component is a file, `PermissionDenied` without rights.
pub fn mkdir<P: AsRef<NativePath>>(path: P) -> Result<()> {
    let path = path.as_ref();
    sys::create_dir(path.as_str()).map_err(|err| Error::from_io("mkdir", path.as_str(), err))
}

/// Like [`mkdir`], but an existing `path` is not an error.
pub fn mkdir_if_not_exists<P: AsRef<NativePath>>(path: P) -> Result<()> {
    match mkdir(path) {
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        result => result,
    }
}

/// Creates `path` and all its missing ancestors.
///
/// The path is split into segments and every accumulated prefix is created if it does not
/// exist yet. Stops at the first failure without removing the prefixes created so far.
pub fn mkdir_parents<P: AsRef<NativePath>>(path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("creating directory tree {}", path);
    let mut prefix = NativePath::default();
    for segment in path.split() {
        prefix = prefix.join(segment);
        if exists(&prefix) {
            continue;
        }
        log::trace!("creating {}", prefix);
        mkdir_if_not_exists(&prefix)?;
    }
    Ok(())
}

/// Removes a single file or an empty directory.
pub fn rm<P: AsRef<NativePath>>(path: P) -> Result<()> {
    let path = path.as_ref();
    sys::remove(path.as_str()).map_err(|err| Error::from_io("rm", path.as_str(), err))
}

/// Removes the directory `path` with everything below it.
///
/// Children are visited once each, in the order the OS lists them: directories are removed
/// recursively, everything else with [`rm`]. Symlinks are removed, never followed, and that
/// includes `path` itself: if it is a symlink or a file it is removed with [`rm`].
///
/// A child whose name cannot be decoded does not stop the listing: its siblings are still
/// removed, then the first such error is returned and `path` is left in place.
pub fn rmrf<P: AsRef<NativePath>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let is_dir = sys::is_dir(path.as_str());
    if !is_dir.map_err(|err| Error::from_io("stat", path.as_str(), err))? {
        log::debug!("{} is not a directory, removing it alone", path);
        return rm(path);
    }
    log::debug!("removing tree {}", path);
    let mut listing_error = None;
    for entry in iter_dir(path)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                listing_error.get_or_insert(err);
                continue;
            }
        };
        let child = entry.path();
        if entry.is_dir()? {
            rmrf(&child)?;
        } else {
            rm(&child)?;
        }
    }
    match listing_error {
        Some(err) => Err(err),
        None => rm(path),
    }
}

/// Like [`rmrf`], but a missing `path` is not an error.
pub fn rmrf_if_exists<P: AsRef<NativePath>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !exists(path) {
        return Ok(());
    }
    rmrf(path)
}

/// Chainable forms of the operations above.
impl NativePath {
    pub fn exists(&self) -> bool {
        exists(self)
    }

    pub fn mkdir(&self) -> Result<&Self> {
        mkdir(self)?;
        Ok(self)
    }

    pub fn mkdir_if_not_exists(&self) -> Result<&Self> {
        mkdir_if_not_exists(self)?;
        Ok(self)
    }

    pub fn mkdir_parents(&self) -> Result<&Self> {
        mkdir_parents(self)?;
        Ok(self)
    }
}
