mod async_tests;

use std::io::Write;

use tempfile::NamedTempFile;

/// Writes `content` to a fresh temporary file and returns its handle; the
/// file is deleted when the handle drops.
pub(crate) fn fixture(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}
