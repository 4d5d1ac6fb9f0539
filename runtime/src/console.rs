//! Console output.

use crate::status::Status;

/// A console the image can write text to.
///
/// Implementations take care of whatever character encoding and line-ending convention the
/// underlying device requires, so callers always write plain Rust strings with `\n` newlines.
pub trait Console {
    /// Writes `s` to the console.
    ///
    /// A warning status (e.g. [`Status::WarnUnknownGlyph`]) is returned as `Err` even though the
    /// text was written; use [`Status::is_error`] to tell the two apart.
    fn write_str(&mut self, s: &str) -> Result<(), Status>;
}
