//! Behaviour switches for the codec
//!
//! Each switch picks between the historical editor behaviour (the default) and a
//! corrected alternative, so callers that exchange Markdown with older producers stay
//! byte-compatible while new callers can opt out of the known quirks.

use crate::model::attributes::NEWLINE_SENTINEL;
use serde::{Deserialize, Serialize};

/// How a character covered by several typeface spans is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairPolicy {
    /// Exactly two bold/italic spans collapse to Bold+Italic, whatever their kinds.
    #[default]
    Legacy,
    /// The code is the union of the kinds actually present.
    ByKind,
}

/// When an open `~~` is closed at a run boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrikethroughClose {
    /// Always close, even when the next run is also struck through.
    #[default]
    Eager,
    /// Keep it open while the next character is struck through, like `**` and `*`.
    Deferred,
}

/// What the encoder writes for a newline character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewlineOutput {
    /// The newline itself, once.
    #[default]
    Single,
    /// An extra newline in front of it, turning line breaks into paragraph breaks.
    Paragraph,
}

/// What the decoder does with an opening delimiter that never closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedDelimiter {
    /// Delete the marker from the plain text.
    #[default]
    Drop,
    /// Keep the marker as literal text.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub pair_policy: PairPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub strikethrough: StrikethroughClose,
    pub newline: NewlineOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub unmatched: UnmatchedDelimiter,
}

/// Every codec knob in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    pub extract: ExtractOptions,
    pub encode: EncodeOptions,
    pub decode: DecodeOptions,

    /// Integer code standing for a newline in legacy style arrays
    pub newline_sentinel: u8,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            encode: EncodeOptions::default(),
            decode: DecodeOptions::default(),
            newline_sentinel: NEWLINE_SENTINEL,
        }
    }
}
