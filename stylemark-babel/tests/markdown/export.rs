//! Export tests for Markdown format (styled text → Markdown)
//!
//! Delimiter placement is checked with inline snapshots; simple exports are also run through
//! Comrak to make sure a CommonMark reader sees the intended emphasis.

use crate::common::{marks, styled_from_codes};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use stylemark_babel::format::Format;
use stylemark_babel::formats::markdown::serializer::encode;
use stylemark_babel::formats::markdown::MarkdownFormat;
use stylemark_babel::model::{Attribute, StyleSpan, StyledText};
use stylemark_babel::options::{
    CodecOptions, EncodeOptions, NewlineOutput, PairPolicy, StrikethroughClose,
};

fn export(text: &str, codes: &[u8]) -> String {
    MarkdownFormat::default()
        .serialize(&styled_from_codes(text, codes))
        .unwrap()
}

fn export_with(text: &str, codes: &[u8], encode_options: EncodeOptions) -> String {
    encode(text, &marks(codes), &encode_options).unwrap()
}

/// Collect `(node kind, text)` for every emphasis-like node in the Comrak AST
fn emphasis_nodes(md: &str) -> Vec<(&'static str, String)> {
    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    let root = parse_document(&arena, md, &options);

    let mut found = Vec::new();
    collect_emphasis(root, &mut found);
    found
}

fn collect_emphasis<'a>(node: &'a AstNode<'a>, found: &mut Vec<(&'static str, String)>) {
    let kind = match node.data.borrow().value {
        NodeValue::Strong => Some("Strong"),
        NodeValue::Emph => Some("Emph"),
        NodeValue::Strikethrough => Some("Strikethrough"),
        _ => None,
    };
    if let Some(kind) = kind {
        found.push((kind, collect_text(node)));
    }
    for child in node.children() {
        collect_emphasis(child, found);
    }
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let NodeValue::Text(t) = &descendant.data.borrow().value {
            text.push_str(t);
        }
    }
    text
}

#[test]
fn test_plain_text_is_untouched() {
    assert_snapshot!(export("hello world", &[0; 11]), @"hello world");
}

#[test]
fn test_single_runs() {
    assert_snapshot!(export("abc", &[1, 1, 1]), @"**abc**");
    assert_snapshot!(export("abc", &[2, 2, 2]), @"*abc*");
    assert_snapshot!(export("abc", &[4, 4, 4]), @"~~abc~~");
}

#[test]
fn test_bold_followed_by_italic() {
    assert_snapshot!(export("abc", &[1, 2, 2]), @"**a***bc*");
}

#[test]
fn test_nested_carry_over() {
    assert_snapshot!(export("ab", &[1, 3]), @"**a*b***");
    assert_snapshot!(export("ab", &[3, 1]), @"***a*b**");
}

#[test]
fn test_combined_styles() {
    assert_snapshot!(export("ab", &[5, 5]), @"**~~ab~~**");
    assert_snapshot!(export("a", &[7]), @"***~~a~~***");
}

#[test]
fn test_strikethrough_closes_eagerly() {
    assert_snapshot!(export("ab", &[4, 5]), @"~~a~~**~~b~~**");
}

#[test]
fn test_strikethrough_deferred() {
    let deferred = EncodeOptions {
        strikethrough: StrikethroughClose::Deferred,
        ..EncodeOptions::default()
    };
    assert_snapshot!(export_with("ab", &[4, 5], deferred), @"~~a**b**~~");
}

#[test]
fn test_newline_resets_delimiters() {
    assert_snapshot!(export("a\nb", &[1, 20, 1]), @r"
    **a**
    **b**
    ");
}

#[test]
fn test_newline_as_paragraph_break() {
    let paragraph = EncodeOptions {
        newline: NewlineOutput::Paragraph,
        ..EncodeOptions::default()
    };
    assert_eq!(export_with("a\nb", &[1, 20, 0], paragraph), "**a**\n\nb");
}

#[test]
fn test_whitespace_never_styled() {
    let doc = StyledText::with_spans("a b", [StyleSpan::new(0, 3, Attribute::Bold)]);
    let md = MarkdownFormat::default().serialize(&doc).unwrap();
    assert_snapshot!(md, @"**a** **b**");
}

#[test]
fn test_two_bold_spans_collapse_under_legacy_policy() {
    let doc = StyledText::with_spans(
        "ab",
        [
            StyleSpan::new(0, 2, Attribute::Bold),
            StyleSpan::new(0, 1, Attribute::Bold),
        ],
    );

    let legacy = MarkdownFormat::default().serialize(&doc).unwrap();
    assert_snapshot!(legacy, @"***a*b**");

    let by_kind = MarkdownFormat::new(CodecOptions {
        extract: stylemark_babel::options::ExtractOptions {
            pair_policy: PairPolicy::ByKind,
        },
        ..CodecOptions::default()
    })
    .serialize(&doc)
    .unwrap();
    assert_snapshot!(by_kind, @"**ab**");
}

#[test]
fn test_commonmark_reads_single_runs() {
    assert_eq!(
        emphasis_nodes(&export("plain bold", &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1])),
        vec![("Strong", "bold".to_string())]
    );
    assert_eq!(
        emphasis_nodes(&export("abc", &[2, 2, 2])),
        vec![("Emph", "abc".to_string())]
    );
    assert_eq!(
        emphasis_nodes(&export("ab", &[4, 4])),
        vec![("Strikethrough", "ab".to_string())]
    );
}

#[test]
fn test_commonmark_reads_bold_strikethrough() {
    assert_eq!(
        emphasis_nodes(&export("ab", &[5, 5])),
        vec![
            ("Strong", "ab".to_string()),
            ("Strikethrough", "ab".to_string())
        ]
    );
}
