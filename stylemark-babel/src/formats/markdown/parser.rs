//! Markdown parsing (Markdown → styled text import)
//!
//! Pipeline: Markdown string → delimiter stripping → StyledText
//!
//! # The High-Level Concept
//!
//! Delimiters are stripped one token kind at a time over the whole document, in the fixed
//! order `**`, `*`, `~~`. Each pass pairs the first remaining occurrence with the next one
//! and records the characters between them as a span. Because `**` is handled first, a `*`
//! pass never sees half of a bold marker, and interleaved spans of different kinds are
//! resolved against the buffer as the earlier passes left it.
//!
//! # The Algorithm
//!
//! For each token, one forward scan over the buffer:
//!
//! 1. The first occurrence opens a span at the current output position.
//! 2. The next occurrence closes it and records `[open, close)` with the pass attribute.
//!    Neither marker is copied to the output.
//! 3. An opener left at the end of the scan is unmatched. Under
//!    [`UnmatchedDelimiter::Drop`] it is deleted and no span is recorded (the marker text
//!    is lost). Under [`UnmatchedDelimiter::Keep`] it is put back as literal text and later
//!    passes skip it.
//!
//! Deleting a marker never joins the characters around it into a new marker: the
//! character before an opener cannot start the token, and the text inside a pair holds
//! no token. So the scan never has to look back.
//!
//! The deleted positions of a pass are collected in order, and the spans recorded by
//! earlier passes are remapped once at the end of it, so ranges always address the
//! buffer as it is at the end. Spans that end up empty (e.g. `****`) are discarded.

use crate::model::attributes::Attribute;
use crate::model::styled_text::{StyleSpan, StyledText};
use crate::options::{DecodeOptions, UnmatchedDelimiter};
use tracing::debug;

/// Parse Markdown into plain text plus style spans
pub fn parse_from_markdown(source: &str, options: &DecodeOptions) -> StyledText {
    let mut buffer = Buffer::new(source);
    for attribute in Attribute::ALL {
        buffer.strip(attribute, options.unmatched);
    }
    buffer.finish()
}

struct Buffer {
    chars: Vec<char>,
    /// Characters restored as literal text; no pass may match them.
    literal: Vec<bool>,
    spans: Vec<StyleSpan>,
}

impl Buffer {
    fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let literal = vec![false; chars.len()];
        Self {
            chars,
            literal,
            spans: Vec::new(),
        }
    }

    fn strip(&mut self, attribute: Attribute, unmatched: UnmatchedDelimiter) {
        let token: Vec<char> = attribute.delimiter().chars().collect();
        let width = token.len();

        let mut chars = Vec::with_capacity(self.chars.len());
        let mut literal = Vec::with_capacity(self.literal.len());
        // Input positions deleted by this pass, ascending.
        let mut removed: Vec<usize> = Vec::new();
        let mut spans = Vec::new();
        // (input position, output position) of the pending opener.
        let mut pending: Option<(usize, usize)> = None;

        let mut index = 0;
        while index < self.chars.len() {
            if !self.is_token_at(&token, index) {
                chars.push(self.chars[index]);
                literal.push(self.literal[index]);
                index += 1;
                continue;
            }
            match pending.take() {
                None => pending = Some((index, chars.len())),
                Some((open_at, open)) => {
                    removed.extend(open_at..open_at + width);
                    removed.extend(index..index + width);
                    if chars.len() > open {
                        spans.push(StyleSpan::new(open, chars.len(), attribute));
                    }
                }
            }
            index += width;
        }

        if let Some((open_at, open)) = pending {
            debug!(%attribute, position = open, "unmatched opening delimiter");
            match unmatched {
                UnmatchedDelimiter::Drop => removed.extend(open_at..open_at + width),
                UnmatchedDelimiter::Keep => {
                    for (offset, &ch) in token.iter().enumerate() {
                        chars.insert(open + offset, ch);
                        literal.insert(open + offset, true);
                    }
                }
            }
        }

        for span in &mut self.spans {
            span.start = remap(span.start, &removed);
            span.end = remap(span.end, &removed);
        }
        self.spans.retain(|span| !span.is_empty());
        self.spans.extend(spans);
        self.chars = chars;
        self.literal = literal;
    }

    fn is_token_at(&self, token: &[char], at: usize) -> bool {
        let end = at + token.len();
        end <= self.chars.len()
            && self.chars[at..end] == *token
            && !self.literal[at..end].contains(&true)
    }

    fn finish(self) -> StyledText {
        let text: String = self.chars.into_iter().collect();
        StyledText::with_spans(text, self.spans)
    }
}

/// Position after deleting `removed`; a position inside a deleted run lands on its start.
fn remap(position: usize, removed: &[usize]) -> usize {
    position - removed.partition_point(|&at| at < position)
}
