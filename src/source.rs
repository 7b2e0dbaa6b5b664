use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::io::RawFd;

/// What to read: a file path or an already-open file descriptor.
///
/// Every read entry point takes `impl Into<Source>`, so callers pass a
/// `&str`, `Path`, `PathBuf`, raw path bytes, or (on Unix) a descriptor
/// directly. Descriptors are read from their current position and are never
/// closed by this library.
#[derive(Debug, Clone)]
pub enum Source {
    Path(PathBuf),
    #[cfg(unix)]
    Fd(RawFd),
}

impl From<&str> for Source {
    fn from(path: &str) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl From<String> for Source {
    fn from(path: String) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

#[cfg(unix)]
impl From<Vec<u8>> for Source {
    fn from(path: Vec<u8>) -> Self {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;
        Source::Path(PathBuf::from(OsString::from_vec(path)))
    }
}

#[cfg(unix)]
impl From<&[u8]> for Source {
    fn from(path: &[u8]) -> Self {
        Source::from(path.to_vec())
    }
}

#[cfg(unix)]
impl From<RawFd> for Source {
    fn from(fd: RawFd) -> Self {
        Source::Fd(fd)
    }
}
