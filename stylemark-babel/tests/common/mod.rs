//! Shared helpers for building styled text from legacy style codes.

use stylemark_babel::common::runs::style_runs;
use stylemark_babel::model::attributes::NEWLINE_SENTINEL;
use stylemark_babel::model::{StyleMark, StyleSpan, StyledText};

/// Parse legacy codes, panicking on anything invalid.
pub fn marks(codes: &[u8]) -> Vec<StyleMark> {
    codes
        .iter()
        .map(|&code| StyleMark::from_code(code, NEWLINE_SENTINEL).expect("valid style code"))
        .collect()
}

/// Styled text whose style array is exactly `codes`: one span per attribute per run.
pub fn styled_from_codes(text: &str, codes: &[u8]) -> StyledText {
    assert_eq!(text.chars().count(), codes.len(), "one code per character");
    let spans = style_runs(&marks(codes)).into_iter().flat_map(|run| {
        run.mark
            .styles()
            .iter()
            .map(move |attribute| StyleSpan::new(run.start, run.end, attribute))
    });
    StyledText::with_spans(text, spans)
}

/// Spans sorted by attribute, then position, for order-insensitive comparison.
pub fn sorted_spans(doc: &StyledText) -> Vec<StyleSpan> {
    let mut spans = doc.spans().to_vec();
    spans.sort_by_key(|span| (span.attribute, span.start, span.end));
    spans
}
