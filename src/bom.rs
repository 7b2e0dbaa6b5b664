/// Strips a leading UTF-8 byte-order mark from `text`.
///
/// Returns the input unchanged when no BOM is present, so applying it twice
/// is the same as applying it once. Only the leading position counts; a
/// U+FEFF later in the text is data.
pub fn strip_utf8_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
