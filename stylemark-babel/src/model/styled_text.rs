//! In-memory styled text: a string plus attribute spans over its characters.
//!
//! All offsets are character offsets (Unicode scalar values), never byte offsets.
//! Spans are exclusive at both ends: text inserted exactly at a span boundary does not
//! inherit the span, and a span that shrinks to nothing is discarded.

use super::attributes::{Attribute, StyleMark, StyleSet};
use super::state::StyleState;
use crate::common::extract::extract_style_array;
use crate::options::PairPolicy;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One attribute applied over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub attribute: Attribute,
}

impl StyleSpan {
    pub fn new(start: usize, end: usize, attribute: Attribute) -> Self {
        Self {
            start,
            end,
            attribute,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn covers(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn intersects(&self, range: &Range<usize>) -> bool {
        self.start < range.end && range.start < self.end
    }

    /// Move the span to account for `len` characters removed at `at`.
    pub(crate) fn shift_for_deletion(&mut self, at: usize, len: usize) {
        self.start = shift_deleted(self.start, at, len);
        self.end = shift_deleted(self.end, at, len);
    }

    /// Move the span to account for `len` characters inserted at `at`.
    pub(crate) fn shift_for_insertion(&mut self, at: usize, len: usize) {
        if self.start >= at {
            self.start += len;
        }
        if self.end > at {
            self.end += len;
        }
    }
}

fn shift_deleted(position: usize, at: usize, len: usize) -> usize {
    if position >= at + len {
        position - len
    } else if position > at {
        at
    } else {
        position
    }
}

/// Text with attribute spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    len: usize,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            spans: Vec::new(),
        }
    }

    /// Build from text and spans. Spans are clamped to the text; empty ones are dropped.
    pub fn with_spans(text: impl Into<String>, spans: impl IntoIterator<Item = StyleSpan>) -> Self {
        let mut styled = Self::new(text);
        for span in spans {
            styled.push_span(span);
        }
        styled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_span(&mut self, span: StyleSpan) {
        let end = span.end.min(self.len);
        let start = span.start.min(end);
        if start < end {
            self.spans.push(StyleSpan::new(start, end, span.attribute));
        }
    }

    /// Spans covering the character at `index`.
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = &StyleSpan> {
        self.spans.iter().filter(move |span| span.covers(index))
    }

    pub fn attributes_at(&self, index: usize) -> StyleSet {
        self.spans_at(index).map(|span| span.attribute).collect()
    }

    /// Union of attributes of every span touching `range`.
    ///
    /// An empty range probes the single character at `range.start`.
    pub fn attributes_in(&self, range: Range<usize>) -> StyleSet {
        let probe = if range.is_empty() {
            range.start..range.start + 1
        } else {
            range
        };
        self.spans
            .iter()
            .filter(|span| span.intersects(&probe))
            .map(|span| span.attribute)
            .collect()
    }

    /// Insert `inserted` at character offset `at`, styling it with `state`.
    pub fn insert(&mut self, at: usize, inserted: &str, state: StyleState) {
        let at = at.min(self.len);
        let count = inserted.chars().count();
        if count == 0 {
            return;
        }
        let byte = self.byte_offset(at);
        self.text.insert_str(byte, inserted);
        self.len += count;
        for span in &mut self.spans {
            span.shift_for_insertion(at, count);
        }
        self.apply_state(at..at + count, state);
    }

    /// Remove the characters in `range`, shrinking or dropping spans over it.
    pub fn delete(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        if start == end {
            return;
        }
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, "");
        self.len -= end - start;
        for span in &mut self.spans {
            span.shift_for_deletion(start, end - start);
        }
        self.spans.retain(|span| !span.is_empty());
    }

    /// Remove every attribute from `range`, splitting spans that straddle it.
    pub fn clear_styles(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if !span.intersects(&range) {
                kept.push(span);
                continue;
            }
            if span.start < range.start {
                kept.push(StyleSpan::new(span.start, range.start, span.attribute));
            }
            if span.end > range.end {
                kept.push(StyleSpan::new(range.end, span.end, span.attribute));
            }
        }
        self.spans = kept;
    }

    /// Replace whatever styling `range` had with exactly `state`.
    pub fn restyle(&mut self, range: Range<usize>, state: StyleState) {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        self.clear_styles(start..end);
        self.apply_state(start..end, state);
    }

    /// Per-character style marks, see [`extract_style_array`].
    pub fn style_array(&self, policy: PairPolicy) -> Vec<StyleMark> {
        extract_style_array(self, policy)
    }

    fn apply_state(&mut self, range: Range<usize>, state: StyleState) {
        for attribute in state.attributes() {
            self.push_span(StyleSpan::new(range.start, range.end, attribute));
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
