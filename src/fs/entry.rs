use std::cell::Cell;

use crate::core::Result;
use crate::error::Error;
use crate::path::NativePath;
use crate::sys;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// Type of an entry before and after the first stat.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Resolution {
    Unresolved,
    Resolved(EntryType),
}

/// One child of a listed directory.
///
/// The entry type is not known when the entry is read. It is resolved by an lstat of
/// `dir / name` (symlinks are not followed) on the first call to
/// [`entry_type`](DirEntry::entry_type), `is_dir` or `is_file`, and cached for the rest of
/// the entry's life.
#[derive(Debug, Clone)]
pub struct DirEntry {
    dir: NativePath,
    name: String,
    kind: Cell<Resolution>,
}

impl DirEntry {
    pub(crate) fn new(dir: NativePath, name: String) -> DirEntry {
        DirEntry {
            dir,
            name,
            kind: Cell::new(Resolution::Unresolved),
        }
    }

    /// Entry name, without any directory part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory this entry was listed from.
    pub fn dir(&self) -> &NativePath {
        &self.dir
    }

    /// Full path: the owning directory joined with the name.
    pub fn path(&self) -> NativePath {
        self.dir.join(&self.name)
    }

    pub fn entry_type(&self) -> Result<EntryType> {
        if let Resolution::Resolved(kind) = self.kind.get() {
            return Ok(kind);
        }
        let path = self.path();
        let kind = match sys::is_dir(path.as_str()) {
            Ok(true) => EntryType::Directory,
            Ok(false) => EntryType::File,
            Err(err) => return Err(Error::from_io("stat", path.as_str(), err)),
        };
        self.kind.set(Resolution::Resolved(kind));
        Ok(kind)
    }

    pub fn is_dir(&self) -> Result<bool> {
        Ok(self.entry_type()? == EntryType::Directory)
    }

    pub fn is_file(&self) -> Result<bool> {
        Ok(self.entry_type()? == EntryType::File)
    }

    #[cfg(test)]
    fn is_resolved(&self) -> bool {
        self.kind.get() != Resolution::Unresolved
    }
}
