//! Byte-level file access for the read entry points.
//!
//! This is a thin seam over `std::fs` and `tokio::fs`: whole-file reads for
//! each [`Source`] variant, plus the mapping from open-flag strings to
//! `OpenOptions`. Errors pass through untouched so callers can branch on
//! the OS error kind.

use std::fs::OpenOptions;
use std::io::{self, Read};

use tracing::debug;

use crate::Source;

pub(crate) fn read_raw_sync(source: &Source, flag: Option<&str>) -> io::Result<Vec<u8>> {
    let bytes = match source {
        Source::Path(path) => match flag {
            None => std::fs::read(path)?,
            Some(flag) => {
                let mut file = open_options(flag)?.open(path)?;
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)?;
                bytes
            }
        },
        #[cfg(unix)]
        Source::Fd(fd) => read_fd(*fd)?,
    };
    debug!(len = bytes.len(), "read file contents");
    #[cfg(feature = "metrics")]
    crate::metrics::FILES_READ.inc();
    Ok(bytes)
}

pub(crate) async fn read_raw(source: Source, flag: Option<String>) -> io::Result<Vec<u8>> {
    if let (Source::Path(path), None) = (&source, &flag) {
        let bytes = tokio::fs::read(path).await?;
        debug!(len = bytes.len(), "read file contents");
        #[cfg(feature = "metrics")]
        crate::metrics::FILES_READ.inc();
        return Ok(bytes);
    }
    // Flagged opens and descriptor reads run on the blocking pool.
    tokio::task::spawn_blocking(move || read_raw_sync(&source, flag.as_deref()))
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
}

/// Maps an open-flag string onto `OpenOptions`.
///
/// The flag vocabulary is the `"r"` / `"w"` / `"a"` family, with `+` for
/// read-write, `x` for exclusive creation, and `s` for synchronous reads
/// (treated as plain reads here). Unknown flags fail before any file is
/// touched.
fn open_options(flag: &str) -> io::Result<OpenOptions> {
    let mut options = OpenOptions::new();
    match flag {
        "r" | "rs" | "sr" => {
            options.read(true);
        }
        "r+" | "rs+" | "sr+" => {
            options.read(true).write(true);
        }
        "w" => {
            options.write(true).create(true).truncate(true);
        }
        "wx" | "xw" => {
            options.write(true).create_new(true);
        }
        "w+" => {
            options.read(true).write(true).create(true).truncate(true);
        }
        "wx+" | "xw+" => {
            options.read(true).write(true).create_new(true);
        }
        "a" | "as" | "sa" => {
            options.append(true).create(true);
        }
        "ax" | "xa" => {
            options.append(true).create_new(true);
        }
        "a+" | "as+" | "sa+" => {
            options.read(true).append(true).create(true);
        }
        "ax+" | "xa+" => {
            options.read(true).append(true).create_new(true);
        }
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid file open flag: {other:?}"),
            ));
        }
    }
    Ok(options)
}

#[cfg(unix)]
fn read_fd(fd: std::os::unix::io::RawFd) -> io::Result<Vec<u8>> {
    use std::fs::File;
    use std::mem::ManuallyDrop;
    use std::os::unix::io::FromRawFd;

    // The caller owns the descriptor; ManuallyDrop keeps the temporary
    // handle from closing it on drop.
    let mut file = ManuallyDrop::new(unsafe { File::from_raw_fd(fd) });
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
