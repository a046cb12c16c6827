//! Functional entry points for the Markdown codec
//!
//! Thin wrappers over the markdown format for callers that hold text and style codes
//! rather than a [`StyledText`], or that want a one-shot call instead of a registry lookup.

use crate::error::FormatError;
use crate::formats::markdown::{parser, serializer};
use crate::model::attributes::StyleMark;
use crate::model::styled_text::StyledText;
use crate::options::CodecOptions;

/// Export a styled buffer to Markdown.
///
/// # Example
///
/// ```ignore
/// use stylemark_babel::model::{Attribute, StyleSpan, StyledText};
/// use stylemark_babel::options::CodecOptions;
/// use stylemark_babel::transforms::markdown_from_styled;
///
/// let doc = StyledText::with_spans("abc", [StyleSpan::new(0, 3, Attribute::Bold)]);
/// assert_eq!(markdown_from_styled(&doc, &CodecOptions::default()), "**abc**");
/// ```
pub fn markdown_from_styled(doc: &StyledText, options: &CodecOptions) -> String {
    serializer::serialize_to_markdown(doc, options)
}

/// Encode `text` with legacy integer codes, one per character.
///
/// The newline sentinel is taken from `options`. Fails when the lengths differ or a code is
/// neither in `0..=7` nor the sentinel.
pub fn encode_style_codes(
    text: &str,
    codes: &[u8],
    options: &CodecOptions,
) -> Result<String, FormatError> {
    serializer::encode_codes(text, codes, options.newline_sentinel, &options.encode)
}

/// Encode `text` with one [`StyleMark`] per character.
pub fn encode_style_marks(
    text: &str,
    marks: &[StyleMark],
    options: &CodecOptions,
) -> Result<String, FormatError> {
    serializer::encode(text, marks, &options.encode)
}

/// Strip delimiters from `markdown`, returning the plain text and its spans.
pub fn decode_markdown(markdown: &str, options: &CodecOptions) -> StyledText {
    parser::parse_from_markdown(markdown, &options.decode)
}

/// Round-trip transformation: decode and re-encode
///
/// Normalizes delimiter placement, e.g. `**a****b**` becomes `**ab**`.
///
/// ```ignore
/// use stylemark_babel::options::CodecOptions;
/// use stylemark_babel::transforms::normalize_markdown;
///
/// assert_eq!(normalize_markdown("**a****b**", &CodecOptions::default()), "**ab**");
/// ```
pub fn normalize_markdown(markdown: &str, options: &CodecOptions) -> String {
    markdown_from_styled(&decode_markdown(markdown, options), options)
}
