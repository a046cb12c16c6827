//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing styled text.

use crate::error::FormatError;
use crate::model::styled_text::StyledText;

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between a string representation and
/// [`StyledText`]. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
///         Ok(StyledText::new(source))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → StyledText)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (StyledText → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into styled text
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<StyledText, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize styled text into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &StyledText) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
