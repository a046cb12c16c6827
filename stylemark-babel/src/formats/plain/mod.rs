//! Plain text format: the text without any styling.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::styled_text::StyledText;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl Format for PlainFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Unstyled text"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        Ok(StyledText::new(source))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        Ok(doc.text().to_string())
    }
}
