//! Lazy directory iteration.
//!
//! [`DirIter`] is a small state machine over a native directory stream:
//!
//! - **Unopened**: created with `Default`; reading it is an error.
//! - **Open**: holds the native handle and the current entry.
//! - **Undecodable**: holds the native handle; the current entry has a name that is not valid
//!   UTF-8 and reads as an error. Advancing continues with the next entry.
//! - **End**: the stream is exhausted and the handle has been released.
//!
//! The `.` and `..` pseudo-entries are never surfaced. Entry order is whatever the OS yields.

use std::fmt;
use std::io;

use crate::core::Result;
use crate::error::Error;
use crate::fs::DirEntry;
use crate::path::NativePath;
use crate::sys::{self, RawDir, RawName};

enum State {
    Unopened,
    Open {
        handle: Box<dyn RawDir>,
        current: DirEntry,
    },
    Undecodable {
        handle: Box<dyn RawDir>,
        name: String,
    },
    End,
}

/// Sequential enumerator of the children of one directory.
///
/// ### Example:
/// ```no_run
/// use fspath_kit::{NativePath, iter_dir};
///
/// for entry in iter_dir(NativePath::new("/var/log")).unwrap() {
///     let entry = entry.unwrap();
///     println!("{} dir={}", entry.name(), entry.is_dir().unwrap());
/// }
/// ```
///
/// Besides `Iterator`, the state machine is available directly through
/// [`current`](DirIter::current) and [`advance`](DirIter::advance). Two iterators compare equal
/// only when both have reached the end, which makes an exhausted `DirIter` usable as an end
/// sentinel.
pub struct DirIter {
    dir: NativePath,
    state: State,
    yielded: bool,
}

impl DirIter {
    /// Opens `path` and positions the iterator on its first real entry.
    pub fn open<P: AsRef<NativePath>>(path: P) -> Result<Self> {
        let dir = path.as_ref().clone();
        log::debug!("opening directory {}", dir);
        let handle = sys::open_dir(dir.as_str())
            .map_err(|err| Error::from_io("opendir", dir.as_str(), err))?;
        Self::with_handle(dir, handle)
    }

    pub(crate) fn with_handle(dir: NativePath, handle: Box<dyn RawDir>) -> Result<Self> {
        let mut iter = Self {
            dir,
            state: State::End,
            yielded: false,
        };
        iter.fetch(handle)?;
        Ok(iter)
    }

    /// Moves to the next entry. Does nothing once the end is reached.
    pub fn advance(&mut self) -> Result<()> {
        self.yielded = false;
        match std::mem::replace(&mut self.state, State::End) {
            State::Unopened => {
                self.state = State::Unopened;
                Err(Error::invalid_state("advance", "directory iterator was never opened"))
            }
            State::End => Ok(()),
            State::Open { handle, .. } | State::Undecodable { handle, .. } => self.fetch(handle),
        }
    }

    /// Returns the current entry, or `None` at the end.
    ///
    /// An entry whose name is not valid UTF-8 reads as an error; [`advance`](DirIter::advance)
    /// moves past it.
    pub fn current(&self) -> Result<Option<&DirEntry>> {
        match &self.state {
            State::Unopened => Err(Error::invalid_state(
                "current",
                "directory iterator was never opened",
            )),
            State::Open { current, .. } => Ok(Some(current)),
            State::Undecodable { name, .. } => Err(self.undecodable(name)),
            State::End => Ok(None),
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.state, State::End)
    }

    /// The directory being listed.
    pub fn dir(&self) -> &NativePath {
        &self.dir
    }

    /// Releases the native handle early and moves to the end.
    pub fn close(&mut self) {
        self.state = State::End;
    }

    #[track_caller]
    fn undecodable(&self, name: &str) -> Error {
        let err = io::Error::new(
            io::ErrorKind::InvalidData,
            format!("entry name is not valid UTF-8: {:?}", name),
        );
        Error::from_io("readdir", self.dir.as_str(), err)
    }

    // Reads until a real entry or the end of the stream. The handle is dropped (closed) on
    // every path that does not keep it in `Open` or `Undecodable`.
    fn fetch(&mut self, mut handle: Box<dyn RawDir>) -> Result<()> {
        loop {
            match handle.read_next() {
                Ok(Some(RawName::Name(name))) if name == "." || name == ".." => continue,
                Ok(Some(RawName::Name(name))) => {
                    log::trace!("{}: entry {}", self.dir, name);
                    let current = DirEntry::new(self.dir.clone(), name);
                    self.state = State::Open { handle, current };
                    return Ok(());
                }
                Ok(Some(RawName::Undecodable(name))) => {
                    log::warn!("{}: entry name is not valid UTF-8: {:?}", self.dir, name);
                    self.state = State::Undecodable { handle, name };
                    return Ok(());
                }
                Ok(None) => {
                    self.state = State::End;
                    return Ok(());
                }
                Err(err) => {
                    self.state = State::End;
                    return Err(Error::from_io("readdir", self.dir.as_str(), err));
                }
            }
        }
    }
}

impl Default for DirIter {
    /// An unopened iterator.
    fn default() -> Self {
        Self {
            dir: NativePath::default(),
            state: State::Unopened,
            yielded: false,
        }
    }
}

impl PartialEq for DirIter {
    fn eq(&self, other: &Self) -> bool {
        self.is_end() && other.is_end()
    }
}

impl fmt::Debug for DirIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Unopened => "unopened",
            State::Open { .. } => "open",
            State::Undecodable { .. } => "undecodable",
            State::End => "end",
        };
        f.debug_struct("DirIter")
            .field("dir", &self.dir)
            .field("state", &state)
            .finish()
    }
}

impl Iterator for DirIter {
    type Item = Result<DirEntry>;

    /// Yields the current entry, advancing lazily on the following call. A read error is
    /// yielded once, after which the iterator is at its end. An entry whose name is not valid
    /// UTF-8 is yielded as an error and iteration goes on. An unopened iterator yields an
    /// `InvalidState` error once.
    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded {
            if let Err(err) = self.advance() {
                return Some(Err(err));
            }
        }
        if matches!(self.state, State::Unopened) {
            self.state = State::End;
            return Some(Err(Error::invalid_state("next", "directory iterator was never opened")));
        }
        let item = match &self.state {
            State::Open { current, .. } => Ok(current.clone()),
            State::Undecodable { name, .. } => Err(self.undecodable(name)),
            _ => return None,
        };
        self.yielded = true;
        Some(item)
    }
}

/// Opens an iterator over the children of `path`.
pub fn iter_dir<P: AsRef<NativePath>>(path: P) -> Result<DirIter> {
    DirIter::open(path)
}
