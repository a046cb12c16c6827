//! JSON format implementation
//!
//! The decoded form of a document: the plain text plus its spans, as handed to an editor
//! surface that applies the styling itself.
//!
//! ```json
//! {
//!   "text": "abc",
//!   "spans": [{ "start": 0, "end": 1, "attribute": "bold" }]
//! }
//! ```
//!
//! Offsets are character offsets. Parsing rejects spans that run past the text or end
//! before they start.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::styled_text::{StyleSpan, StyledText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct JsonDocument {
    text: String,
    #[serde(default)]
    spans: Vec<StyleSpan>,
}

/// Format implementation for the JSON span list
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Plain text with a JSON list of style spans"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        let doc: JsonDocument =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        let len = doc.text.chars().count();
        if let Some(bad) = doc
            .spans
            .iter()
            .find(|span| span.start > span.end || span.end > len)
        {
            return Err(FormatError::ParseError(format!(
                "span {}..{} ({}) is outside the {len}-character text",
                bad.start, bad.end, bad.attribute
            )));
        }
        Ok(StyledText::with_spans(doc.text, doc.spans))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        to_json_string(doc)
    }
}

/// Pretty-printed JSON for `doc`.
pub fn to_json_string(doc: &StyledText) -> Result<String, FormatError> {
    let wire = JsonDocument {
        text: doc.text().to_string(),
        spans: doc.spans().to_vec(),
    };
    serde_json::to_string_pretty(&wire).map_err(|e| FormatError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attributes::Attribute;

    #[test]
    fn serializes_text_and_spans() {
        let doc = StyledText::with_spans("abc", [StyleSpan::new(0, 1, Attribute::Bold)]);
        let json = JsonFormat.serialize(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "abc");
        assert_eq!(value["spans"][0]["attribute"], "bold");
        assert_eq!(value["spans"][0]["end"], 1);
    }

    #[test]
    fn parses_back() {
        let source = r#"{"text": "héllo", "spans": [{"start": 1, "end": 5, "attribute": "strikethrough"}]}"#;
        let doc = JsonFormat.parse(source).unwrap();
        assert_eq!(doc.text(), "héllo");
        assert_eq!(
            doc.spans(),
            &[StyleSpan::new(1, 5, Attribute::Strikethrough)]
        );
    }

    #[test]
    fn spans_default_to_empty() {
        let doc = JsonFormat.parse(r#"{"text": "x"}"#).unwrap();
        assert!(doc.spans().is_empty());
    }

    #[test]
    fn rejects_out_of_range_spans() {
        let source = r#"{"text": "ab", "spans": [{"start": 0, "end": 3, "attribute": "italic"}]}"#;
        assert!(matches!(
            JsonFormat.parse(source),
            Err(FormatError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_unknown_attributes() {
        let source = r#"{"text": "ab", "spans": [{"start": 0, "end": 1, "attribute": "underline"}]}"#;
        assert!(JsonFormat.parse(source).is_err());
    }
}
