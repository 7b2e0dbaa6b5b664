use serde::de::DeserializeOwned;
use simd_json::OwnedValue;
use tracing::debug;

use crate::{revive, ReadError, Reviver};

/// Parses NDJSON text into one value per non-blank line.
///
/// Lines are split on `\n` or `\r\n`. Blank and whitespace-only lines are
/// skipped without affecting line numbering. The first malformed line aborts
/// the parse with [`ReadError::Parse`] naming that line; no values parsed
/// before it are returned. When `reviver` is present, every value is piped
/// through it before being collected.
pub fn parse_ndjson(text: &str, reviver: Option<&Reviver>) -> Result<Vec<OwnedValue>, ReadError> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_line(line).map_err(|source| ReadError::Parse {
            line: index + 1,
            source,
        })?;
        let value = match reviver {
            Some(reviver) => revive(value, reviver),
            None => value,
        };
        values.push(value);
    }
    debug!(count = values.len(), "parsed NDJSON lines");
    #[cfg(feature = "metrics")]
    crate::metrics::LINES_PARSED.inc_by(values.len() as u64);
    Ok(values)
}

/// Typed variant of [`parse_ndjson`]: deserializes every non-blank line into
/// `T`.
pub fn parse_ndjson_as<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ReadError> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_line_as(line).map_err(|source| ReadError::Parse {
            line: index + 1,
            source,
        })?;
        values.push(value);
    }
    debug!(count = values.len(), "parsed NDJSON lines");
    #[cfg(feature = "metrics")]
    crate::metrics::LINES_PARSED.inc_by(values.len() as u64);
    Ok(values)
}

fn parse_line(line: &str) -> Result<OwnedValue, simd_json::Error> {
    // simd-json parses in place, so each line gets its own scratch buffer.
    let mut bytes = line.as_bytes().to_vec();
    match simd_json::to_owned_value(&mut bytes) {
        Ok(value) => Ok(value),
        Err(err) => {
            #[cfg(feature = "relaxed")]
            {
                if let Ok(value) = json5::from_str::<OwnedValue>(line) {
                    return Ok(value);
                }
            }
            Err(err)
        }
    }
}

fn parse_line_as<T: DeserializeOwned>(line: &str) -> Result<T, simd_json::Error> {
    let mut bytes = line.as_bytes().to_vec();
    match simd_json::from_slice::<T>(&mut bytes) {
        Ok(value) => Ok(value),
        Err(err) => {
            #[cfg(feature = "relaxed")]
            {
                if let Ok(value) = json5::from_str::<T>(line) {
                    return Ok(value);
                }
            }
            Err(err)
        }
    }
}
