//! Markdown serialization (styled text → Markdown export)
//!
//! Pipeline: StyledText → style array → delimiter placement → Markdown string
//!
//! # The High-Level Concept
//!
//! The style array is walked once, left to right. Delimiters are only ever written at run
//! boundaries: opening tokens right before the first character of a run, closing tokens
//! right after its last character. A [`DelimiterStack`] remembers what is open so that a
//! token whose attribute continues into the next run is carried over instead of being
//! closed and immediately reopened.
//!
//! # The Algorithm
//!
//! For each index `i`:
//!
//! 1. **Open phase** (when the mark differs from the current one, which is reset after
//!    every close phase):
//!    - for Bold, Italic, Strikethrough in that order, push and write the token if the
//!      attribute is set and the token is not already open
//!    - newlines open nothing
//!
//! 2. **Character:** written verbatim.
//!
//! 3. **Close phase** (when `i` is last or the next mark differs), walking the stack from
//!    most to least recently opened:
//!    - `**` and `*` close unless the next character carries the same attribute
//!    - `~~` closes unconditionally under [`StrikethroughClose::Eager`], so two struck
//!      runs with different codes come out as `~~a~~~~b~~`; under
//!      [`StrikethroughClose::Deferred`] it follows the `**`/`*` rule
//!
//! Every push is matched by exactly one pop (at the latest on the final index), so the
//! output is balanced per token.

use crate::common::delimiters::DelimiterStack;
use crate::error::FormatError;
use crate::model::attributes::{Attribute, StyleMark};
use crate::model::styled_text::StyledText;
use crate::options::{CodecOptions, EncodeOptions, NewlineOutput, StrikethroughClose};
use tracing::trace;

/// Serialize styled text to Markdown
pub fn serialize_to_markdown(doc: &StyledText, options: &CodecOptions) -> String {
    let marks = doc.style_array(options.extract.pair_policy);
    let chars: Vec<char> = doc.text().chars().collect();
    write_markdown(&chars, &marks, &options.encode)
}

/// Encode `text` with one style mark per character.
pub fn encode(
    text: &str,
    marks: &[StyleMark],
    options: &EncodeOptions,
) -> Result<String, FormatError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != marks.len() {
        return Err(FormatError::LengthMismatch {
            text: chars.len(),
            styles: marks.len(),
        });
    }
    Ok(write_markdown(&chars, marks, options))
}

/// Encode `text` with legacy integer style codes.
///
/// Codes must be in `0..=7` or equal to `sentinel`.
pub fn encode_codes(
    text: &str,
    codes: &[u8],
    sentinel: u8,
    options: &EncodeOptions,
) -> Result<String, FormatError> {
    let marks = codes
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            StyleMark::from_code(code, sentinel)
                .ok_or(FormatError::InvalidStyleCode { index, code })
        })
        .collect::<Result<Vec<_>, _>>()?;
    encode(text, &marks, options)
}

fn write_markdown(chars: &[char], marks: &[StyleMark], options: &EncodeOptions) -> String {
    let mut output = String::with_capacity(chars.len() + 8);
    let mut stack = DelimiterStack::new();
    let mut current: Option<StyleMark> = None;

    for (index, (&ch, &mark)) in chars.iter().zip(marks).enumerate() {
        if current != Some(mark) {
            current = Some(mark);
            open_run(&mut output, &mut stack, mark, options);
        }

        output.push(ch);

        let next = marks.get(index + 1).copied();
        if next != Some(mark) {
            trace!(index, %mark, "run boundary");
            close_run(&mut output, &mut stack, next, options);
            current = None;
        }
    }

    output
}

fn open_run(
    output: &mut String,
    stack: &mut DelimiterStack,
    mark: StyleMark,
    options: &EncodeOptions,
) {
    if mark.is_newline() {
        if options.newline == NewlineOutput::Paragraph {
            output.push('\n');
        }
        return;
    }
    for attribute in mark.styles().iter() {
        if stack.push(attribute) {
            output.push_str(attribute.delimiter());
        }
    }
}

fn close_run(
    output: &mut String,
    stack: &mut DelimiterStack,
    next: Option<StyleMark>,
    options: &EncodeOptions,
) {
    let continues =
        |attribute: Attribute| next.is_some_and(|mark| mark.styles().contains(attribute));
    let open = *stack;
    for attribute in open.recent_first() {
        let close = match attribute {
            Attribute::Strikethrough if options.strikethrough == StrikethroughClose::Eager => true,
            _ => !continues(attribute),
        };
        if close {
            stack.remove(attribute);
            output.push_str(attribute.delimiter());
        }
    }
}
