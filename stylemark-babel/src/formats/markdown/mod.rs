//! Markdown format implementation
//!
//! This module implements bidirectional conversion between styled text and the small
//! Markdown dialect the editor exchanges: `**bold**`, `*italic*` and `~~strikethrough~~`.
//!
//! # Library Choice
//!
//! No Markdown library is involved. A CommonMark parser would reinterpret delimiter runs
//! such as `***a*b**` by its own flanking rules, while the exchange format is defined by the
//! exact placement algorithm in [`serializer`] and the exact stripping algorithm in
//! [`parser`]. CommonMark rendering is only used in tests, to check that simple exports
//! still read as the intended emphasis.
//!
//! # Element Mapping Table
//!
//! | Attribute      | Markdown      | Export Notes                          | Import Notes                     |
//! |----------------|---------------|---------------------------------------|----------------------------------|
//! | Bold           | `**text**`    | Carried over into the next run        | Stripped first                   |
//! | Italic         | `*text*`      | Carried over into the next run        | Stripped after `**`              |
//! | Strikethrough  | `~~text~~`    | Closed at every run boundary          | Stripped last                    |
//! | Newline        | `\n`          | Closes everything, opens nothing      | Plain character                  |
//!
//! # Lossy Conversions
//!
//! - whitespace never carries styling, so `**a b**` exports from a fully bold `a b` as
//!   `**a** **b**`
//! - an opening delimiter without a partner is deleted on import (see
//!   [`crate::options::UnmatchedDelimiter`])
//! - literal `*` and `~~` in the text are indistinguishable from delimiters; there is no
//!   escaping

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::styled_text::StyledText;
use crate::options::CodecOptions;

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: CodecOptions,
}

impl MarkdownFormat {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with bold, italic and strikethrough delimiters"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        Ok(parser::parse_from_markdown(source, &self.options.decode))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc, &self.options))
    }
}
