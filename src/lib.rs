//! # NDJSON file reading
//!
//! This library reads a file of newline-delimited JSON (NDJSON) and returns
//! the parsed sequence of values, with both a blocking entry point
//! ([`read_sync`]) and a non-blocking one ([`read`]). Blank lines are
//! skipped, a leading UTF-8 byte-order mark is stripped when the file is
//! decoded with [`Encoding::Utf8`], and the first malformed line aborts the
//! whole read with an error naming that line.
//!
//! ## Example
//!
//! ```no_run
//! use ndjson_file::{read, read_sync_with, Encoding, ReadError, ReadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ReadError> {
//!     // Non-blocking read of a whole NDJSON file.
//!     let values = read("events.ndjson").await?;
//!     println!("parsed {} records", values.len());
//!
//!     // Blocking read, decoding as UTF-8 text (strips a leading BOM).
//!     let values = read_sync_with("events.ndjson", ReadOptions::from(Encoding::Utf8))?;
//!     println!("parsed {} records", values.len());
//!     Ok(())
//! }
//! ```
//!
//! Typed reads deserialize every line straight into a `serde` type:
//!
//! ```no_run
//! #[derive(Debug, serde::Deserialize)]
//! struct Event {
//!     kind: String,
//!     at: u64,
//! }
//!
//! # fn main() -> Result<(), ndjson_file::ReadError> {
//! let events: Vec<Event> = ndjson_file::read_sync_as("events.ndjson")?;
//! # Ok(())
//! # }
//! ```

pub use simd_json::OwnedValue;

#[cfg(test)]
mod tests;

mod bom;
pub use bom::*;

mod error;
pub use error::*;

mod fs;

mod options;
pub use options::*;

mod parse;
pub use parse::*;

mod read;
pub use read::*;

mod revive;
pub use revive::*;

mod source;
pub use source::*;

#[cfg(feature = "metrics")]
mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::*;
