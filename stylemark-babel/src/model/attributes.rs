//! Style attributes and their per-character encoding.
//!
//!     Every character of a styled buffer carries a [`StyleMark`]: either a set of active
//!     attributes or the newline marker. The set is a three-bit mask (Bold = 1, Italic = 2,
//!     Strikethrough = 4), so the legacy integer codes 0..=7 map one-to-one onto [`StyleSet`].
//!     Newlines are a distinct variant rather than a magic integer; the integer sentinel only
//!     exists at the boundary ([`StyleMark::from_code`] / [`StyleMark::to_code`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel code used for newline characters by the integer interface.
pub const NEWLINE_SENTINEL: u8 = 20;

/// Alternate newline sentinel accepted by older producers of style arrays.
pub const ALTERNATE_NEWLINE_SENTINEL: u8 = 10;

/// Highest valid non-sentinel style code (Bold + Italic + Strikethrough).
pub const MAX_STYLE_CODE: u8 = 7;

/// A single inline styling kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Bold,
    Italic,
    Strikethrough,
}

impl Attribute {
    /// All attributes in delimiter priority order.
    pub const ALL: [Attribute; 3] = [Attribute::Bold, Attribute::Italic, Attribute::Strikethrough];

    /// Bit contributed to a style code.
    pub const fn bit(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Italic => 2,
            Attribute::Strikethrough => 4,
        }
    }

    /// Markdown delimiter token for this attribute.
    pub const fn delimiter(self) -> &'static str {
        match self {
            Attribute::Bold => "**",
            Attribute::Italic => "*",
            Attribute::Strikethrough => "~~",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Italic => "italic",
            Attribute::Strikethrough => "strikethrough",
        }
    }

    /// Bold and Italic are typeface styles; Strikethrough is a decoration.
    pub const fn is_typeface(self) -> bool {
        matches!(self, Attribute::Bold | Attribute::Italic)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of active attributes, stored as the style-code bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u8);

impl StyleSet {
    pub const PLAIN: StyleSet = StyleSet(0);
    pub const BOLD_ITALIC: StyleSet = StyleSet(3);

    /// Build a set from a style code, rejecting anything above 7.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits <= MAX_STYLE_CODE).then_some(StyleSet(bits))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn with(self, attribute: Attribute) -> Self {
        StyleSet(self.0 | attribute.bit())
    }

    pub const fn without(self, attribute: Attribute) -> Self {
        StyleSet(self.0 & !attribute.bit())
    }

    pub const fn contains(self, attribute: Attribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    pub const fn is_plain(self) -> bool {
        self.0 == 0
    }

    /// Attributes in the set, in delimiter priority order.
    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(move |attribute| self.contains(*attribute))
    }
}

impl FromIterator<Attribute> for StyleSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleSet::PLAIN, |set, attribute| set.with(attribute))
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("plain");
        }
        let names: Vec<&str> = self.iter().map(Attribute::name).collect();
        f.write_str(&names.join("+"))
    }
}

/// Style of one character: a newline marker or a set of attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleMark {
    Newline,
    Styled(StyleSet),
}

impl StyleMark {
    pub const PLAIN: StyleMark = StyleMark::Styled(StyleSet::PLAIN);

    /// Attributes carried by the character. Newlines never carry any.
    pub const fn styles(self) -> StyleSet {
        match self {
            StyleMark::Newline => StyleSet::PLAIN,
            StyleMark::Styled(set) => set,
        }
    }

    pub const fn is_newline(self) -> bool {
        matches!(self, StyleMark::Newline)
    }

    /// Decode a legacy integer style code.
    ///
    /// Returns `None` for codes that are neither 0..=7 nor `sentinel`.
    pub fn from_code(code: u8, sentinel: u8) -> Option<Self> {
        if code == sentinel {
            Some(StyleMark::Newline)
        } else {
            StyleSet::from_bits(code).map(StyleMark::Styled)
        }
    }

    /// Encode as a legacy integer style code.
    pub const fn to_code(self, sentinel: u8) -> u8 {
        match self {
            StyleMark::Newline => sentinel,
            StyleMark::Styled(set) => set.bits(),
        }
    }
}

impl Default for StyleMark {
    fn default() -> Self {
        StyleMark::PLAIN
    }
}

impl fmt::Display for StyleMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleMark::Newline => f.write_str("newline"),
            StyleMark::Styled(set) => set.fmt(f),
        }
    }
}

pub fn is_bold(code: u8) -> bool {
    matches!(code, 1 | 3 | 5 | 7)
}

pub fn is_italic(code: u8) -> bool {
    matches!(code, 2 | 3 | 6 | 7)
}

pub fn is_strikethrough(code: u8) -> bool {
    matches!(code, 4 | 5 | 6 | 7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_bitmask() {
        for code in 0..=MAX_STYLE_CODE {
            let set = StyleSet::from_bits(code).unwrap();
            assert_eq!(is_bold(code), set.contains(Attribute::Bold), "code {code}");
            assert_eq!(is_italic(code), set.contains(Attribute::Italic), "code {code}");
            assert_eq!(
                is_strikethrough(code),
                set.contains(Attribute::Strikethrough),
                "code {code}"
            );
        }
    }

    #[test]
    fn sentinels_carry_no_style() {
        for code in [NEWLINE_SENTINEL, ALTERNATE_NEWLINE_SENTINEL] {
            assert!(!is_bold(code));
            assert!(!is_italic(code));
            assert!(!is_strikethrough(code));
        }
    }

    #[test]
    fn code_conversion_respects_sentinel() {
        assert_eq!(StyleMark::from_code(20, NEWLINE_SENTINEL), Some(StyleMark::Newline));
        assert_eq!(StyleMark::from_code(10, NEWLINE_SENTINEL), None);
        assert_eq!(
            StyleMark::from_code(10, ALTERNATE_NEWLINE_SENTINEL),
            Some(StyleMark::Newline)
        );
        assert_eq!(StyleMark::from_code(8, NEWLINE_SENTINEL), None);
        assert_eq!(StyleMark::Newline.to_code(ALTERNATE_NEWLINE_SENTINEL), 10);
        assert_eq!(
            StyleMark::Styled(StyleSet::from_bits(5).unwrap()).to_code(NEWLINE_SENTINEL),
            5
        );
    }

    #[test]
    fn style_set_display() {
        assert_eq!(StyleSet::PLAIN.to_string(), "plain");
        let set: StyleSet = [Attribute::Strikethrough, Attribute::Bold].into_iter().collect();
        assert_eq!(set.bits(), 5);
        assert_eq!(set.to_string(), "bold+strikethrough");
        assert_eq!(set.without(Attribute::Bold).to_string(), "strikethrough");
    }
}
