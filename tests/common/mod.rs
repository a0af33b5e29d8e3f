//! Common test utilities for integration tests

use devnotes_mcp::DevNotesHandler;
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (DevNotesHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = DevNotesHandler::new(temp_file.path().to_str().unwrap(), false).unwrap();
    (handler, temp_file)
}
