//! Import tests for Markdown format (Markdown → styled text)

use stylemark_babel::format::Format;
use stylemark_babel::formats::markdown::MarkdownFormat;
use stylemark_babel::formats::JsonFormat;
use stylemark_babel::model::{Attribute, StyleSpan, StyledText};
use stylemark_babel::options::{CodecOptions, DecodeOptions, UnmatchedDelimiter};

fn import(md: &str) -> StyledText {
    MarkdownFormat::default().parse(md).unwrap()
}

#[test]
fn test_bold_and_italic_spans() {
    let doc = import("**a**b*c*");
    assert_eq!(doc.text(), "abc");
    assert_eq!(
        doc.spans(),
        &[
            StyleSpan::new(0, 1, Attribute::Bold),
            StyleSpan::new(2, 3, Attribute::Italic),
        ]
    );
}

#[test]
fn test_unmatched_opening_marker_is_lost() {
    let doc = import("**bold");
    assert_eq!(doc.text(), "bold");
    assert!(doc.spans().is_empty());
}

#[test]
fn test_unmatched_opening_marker_kept_on_request() {
    let format = MarkdownFormat::new(CodecOptions {
        decode: DecodeOptions {
            unmatched: UnmatchedDelimiter::Keep,
        },
        ..CodecOptions::default()
    });
    let doc = format.parse("**bold").unwrap();
    assert_eq!(doc.text(), "**bold");
    assert!(doc.spans().is_empty());
}

#[test]
fn test_spans_address_final_text() {
    let doc = import("~~a~~ **b** *c*");
    assert_eq!(doc.text(), "a b c");
    let mut spans = doc.spans().to_vec();
    spans.sort_by_key(|span| span.start);
    assert_eq!(
        spans,
        vec![
            StyleSpan::new(0, 1, Attribute::Strikethrough),
            StyleSpan::new(2, 3, Attribute::Bold),
            StyleSpan::new(4, 5, Attribute::Italic),
        ]
    );
}

#[test]
fn test_multibyte_text_uses_char_offsets() {
    let doc = import("é**ü**ñ");
    assert_eq!(doc.text(), "éüñ");
    assert_eq!(doc.spans(), &[StyleSpan::new(1, 2, Attribute::Bold)]);
}

#[test]
fn test_newlines_are_plain_characters() {
    let doc = import("**a**\n*b*");
    assert_eq!(doc.text(), "a\nb");
    assert_eq!(
        doc.spans(),
        &[
            StyleSpan::new(0, 1, Attribute::Bold),
            StyleSpan::new(2, 3, Attribute::Italic),
        ]
    );
}

#[test]
fn test_import_then_json_export() {
    let doc = import("**a**b");
    let json = JsonFormat.serialize(&doc).unwrap();
    let reparsed = JsonFormat.parse(&json).unwrap();
    assert_eq!(reparsed, doc);
}
