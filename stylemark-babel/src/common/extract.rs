//! Derives the per-character style array from a styled buffer.
//!
//! # The High-Level Concept
//!
//! The encoder does not look at spans. It wants one [`StyleMark`] per character, so the
//! spans are flattened first: every character learns which attributes cover it.
//!
//! # The Algorithm
//!
//! 1. **Coverage counting:**
//!    - One difference array per attribute, `+1` at each span start, `-1` at each span end
//!    - A running sum gives, for each index, how many spans of each kind cover it
//!
//! 2. **Classification, per character:**
//!    - `\n` becomes [`StyleMark::Newline`]
//!    - any other whitespace is plain, whatever covers it
//!    - otherwise the covering kinds are combined, see [`PairPolicy`]
//!
//! # Known Limitation
//!
//! Under [`PairPolicy::Legacy`] a character covered by exactly two typeface (bold/italic)
//! spans is classified Bold+Italic even when both spans are of the same kind. Two
//! overlapping bold spans therefore export as `***text***`. Strikethrough spans are counted
//! separately and only ever add their own bit. [`PairPolicy::ByKind`] computes the true
//! union instead.
//!
//! With three or more typeface spans on one character both policies take the union of
//! their kinds, so bold+bold+italic is Bold+Italic. Historical editors let the last span
//! in storage order decide there, which can never produce Bold+Italic; that result
//! depends on span order, which a [`StyledText`] does not carry as meaning, and is not
//! reproduced.

use crate::model::attributes::{Attribute, StyleMark, StyleSet};
use crate::model::styled_text::StyledText;
use crate::options::PairPolicy;
use tracing::debug;

/// Classify every character of `doc`. The result has exactly `doc.char_len()` entries.
pub fn extract_style_array(doc: &StyledText, policy: PairPolicy) -> Vec<StyleMark> {
    let len = doc.char_len();
    let mut deltas = [vec![0i64; len + 1], vec![0i64; len + 1], vec![0i64; len + 1]];
    for span in doc.spans() {
        let slot = slot(span.attribute);
        deltas[slot][span.start] += 1;
        deltas[slot][span.end] -= 1;
    }

    let mut coverage = [0i64; 3];
    let mut marks = Vec::with_capacity(len);
    for (index, ch) in doc.text().chars().enumerate() {
        for (slot, delta) in deltas.iter().enumerate() {
            coverage[slot] += delta[index];
        }

        let mark = if ch == '\n' {
            StyleMark::Newline
        } else if ch.is_whitespace() {
            StyleMark::PLAIN
        } else {
            StyleMark::Styled(classify(index, coverage, policy))
        };
        marks.push(mark);
    }
    marks
}

fn classify(index: usize, coverage: [i64; 3], policy: PairPolicy) -> StyleSet {
    let [bold, italic, strike] = coverage;

    let mut set = if policy == PairPolicy::Legacy && bold + italic == 2 {
        if bold != 1 {
            debug!(index, bold, italic, "two same-kind typeface spans classified as bold+italic");
        }
        StyleSet::BOLD_ITALIC
    } else {
        let mut set = StyleSet::PLAIN;
        if bold > 0 {
            set = set.with(Attribute::Bold);
        }
        if italic > 0 {
            set = set.with(Attribute::Italic);
        }
        set
    };

    if strike > 0 {
        set = set.with(Attribute::Strikethrough);
    }
    set
}

fn slot(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Bold => 0,
        Attribute::Italic => 1,
        Attribute::Strikethrough => 2,
    }
}

/// Legacy integer codes for a style array.
pub fn to_codes(marks: &[StyleMark], sentinel: u8) -> Vec<u8> {
    marks.iter().map(|mark| mark.to_code(sentinel)).collect()
}
