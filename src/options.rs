use std::fmt;
use std::str::FromStr;

use crate::{ReadError, Reviver};

/// Text encoding a file's bytes are decoded with before parsing.
///
/// Only `utf8` is recognized, and the name is matched exactly: aliases such
/// as `"utf-8"` or `"UTF8"` are rejected rather than normalized. An absent
/// encoding means the file is read as raw bytes, and no byte-order mark is
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
}

impl FromStr for Encoding {
    type Err = ReadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "utf8" => Ok(Encoding::Utf8),
            other => Err(ReadError::UnsupportedEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf8"),
        }
    }
}

/// Options for a single read.
///
/// The default is "no options": raw byte read, default open flag, no
/// reviver. Call sites set individual fields with struct-update syntax:
///
/// ```
/// use ndjson_file::{Encoding, ReadOptions};
///
/// let options = ReadOptions {
///     encoding: Some(Encoding::Utf8),
///     ..Default::default()
/// };
/// ```
pub struct ReadOptions {
    /// Decode the file's bytes as text before parsing. `None` reads raw
    /// bytes, and skips byte-order-mark stripping.
    pub encoding: Option<Encoding>,
    /// File open mode flag: `"r"`, `"r+"`, `"w"`, `"wx"`, `"a"`, `"a+"`
    /// and friends. Passed through to the open call verbatim; `None` opens
    /// read-only.
    pub flag: Option<String>,
    /// Transform applied to every parsed value, key by key. See [`Reviver`].
    pub reviver: Option<Reviver>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            encoding: None,
            flag: None,
            reviver: None,
        }
    }
}

/// A bare encoding is shorthand for options that set only `encoding`.
impl From<Encoding> for ReadOptions {
    fn from(encoding: Encoding) -> Self {
        Self {
            encoding: Some(encoding),
            ..Default::default()
        }
    }
}
