use serde::de::DeserializeOwned;
use simd_json::OwnedValue;
use tracing::instrument;

use crate::{
    fs, parse_ndjson, parse_ndjson_as, strip_utf8_bom, Encoding, ReadError, ReadOptions, Source,
};

/// Reads a file as newline-delimited JSON without blocking.
///
/// Equivalent to [`read_with`] with default options. The returned future
/// resolves exactly once, with either the parsed values or the first
/// failure; it never panics for runtime conditions such as a missing file.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), ndjson_file::ReadError> {
/// let values = ndjson_file::read("events.ndjson").await?;
/// # Ok(())
/// # }
/// ```
pub async fn read(target: impl Into<Source>) -> Result<Vec<OwnedValue>, ReadError> {
    read_with(target, ReadOptions::default()).await
}

/// Reads a file as newline-delimited JSON without blocking, with options.
pub async fn read_with(
    target: impl Into<Source>,
    options: ReadOptions,
) -> Result<Vec<OwnedValue>, ReadError> {
    read_with_inner(target.into(), options).await
}

/// Reads a file as newline-delimited JSON, blocking the calling thread.
///
/// Equivalent to [`read_sync_with`] with default options.
pub fn read_sync(target: impl Into<Source>) -> Result<Vec<OwnedValue>, ReadError> {
    read_sync_with(target, ReadOptions::default())
}

/// Reads a file as newline-delimited JSON, blocking the calling thread, with
/// options.
///
/// ```no_run
/// use ndjson_file::{read_sync_with, Encoding, ReadOptions};
///
/// # fn main() -> Result<(), ndjson_file::ReadError> {
/// let values = read_sync_with("events.ndjson", ReadOptions::from(Encoding::Utf8))?;
/// # Ok(())
/// # }
/// ```
pub fn read_sync_with(
    target: impl Into<Source>,
    options: ReadOptions,
) -> Result<Vec<OwnedValue>, ReadError> {
    read_sync_inner(target.into(), options)
}

/// Typed non-blocking read: deserializes every line into `T`.
///
/// The file is decoded as UTF-8 text with a leading byte-order mark
/// stripped; options do not apply because revivers transform dynamic values
/// only.
pub async fn read_as<T: DeserializeOwned>(
    target: impl Into<Source>,
) -> Result<Vec<T>, ReadError> {
    let bytes = fs::read_raw(target.into(), None).await?;
    let text = String::from_utf8_lossy(&bytes);
    parse_ndjson_as(strip_utf8_bom(&text))
}

/// Typed blocking read: deserializes every line into `T`.
pub fn read_sync_as<T: DeserializeOwned>(target: impl Into<Source>) -> Result<Vec<T>, ReadError> {
    let source = target.into();
    let bytes = fs::read_raw_sync(&source, None)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_ndjson_as(strip_utf8_bom(&text))
}

#[instrument(skip(options))]
async fn read_with_inner(
    source: Source,
    options: ReadOptions,
) -> Result<Vec<OwnedValue>, ReadError> {
    let bytes = fs::read_raw(source, options.flag.clone()).await?;
    decode(&bytes, &options)
}

#[instrument(skip(options))]
fn read_sync_inner(source: Source, options: ReadOptions) -> Result<Vec<OwnedValue>, ReadError> {
    let bytes = fs::read_raw_sync(&source, options.flag.as_deref())?;
    decode(&bytes, &options)
}

/// Shared decode tail: text conversion, BOM handling, line parsing.
///
/// BOM stripping applies only to `Encoding::Utf8` reads; raw byte reads keep
/// a leading BOM, which then fails JSON parsing on line 1 rather than being
/// silently removed.
fn decode(bytes: &[u8], options: &ReadOptions) -> Result<Vec<OwnedValue>, ReadError> {
    let text = String::from_utf8_lossy(bytes);
    let text = match options.encoding {
        Some(Encoding::Utf8) => strip_utf8_bom(&text),
        None => text.as_ref(),
    };
    parse_ndjson(text, options.reviver.as_ref())
}
