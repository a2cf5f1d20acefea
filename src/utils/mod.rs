//! Input helpers for the CLI

pub mod encoding;

pub use encoding::{is_binary_file, read_text_file};

use std::path::Path;

/// Drop a single trailing `\n` or `\r\n`.
///
/// Files and piped input usually end with a newline the user never typed.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')).unwrap_or(text)
}

/// Label used for a file in reports, with forward slashes on every platform.
pub fn source_label(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
