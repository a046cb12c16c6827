//! The "current input styling" value owned by whoever drives text entry.

use super::attributes::{Attribute, StyleSet};

/// Which attributes newly typed text receives.
///
/// Immutable: toggling returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl StyleState {
    pub const PLAIN: StyleState = StyleState {
        bold: false,
        italic: false,
        strikethrough: false,
    };

    /// State with exactly the given attributes active.
    pub fn from_attributes(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        attributes.into_iter().collect::<StyleSet>().into()
    }

    pub fn is_active(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Italic => self.italic,
            Attribute::Strikethrough => self.strikethrough,
        }
    }

    #[must_use]
    pub fn toggled(self, attribute: Attribute) -> Self {
        let mut next = self;
        match attribute {
            Attribute::Bold => next.bold = !next.bold,
            Attribute::Italic => next.italic = !next.italic,
            Attribute::Strikethrough => next.strikethrough = !next.strikethrough,
        }
        next
    }

    /// Active attributes in delimiter priority order.
    pub fn attributes(self) -> impl Iterator<Item = Attribute> {
        StyleSet::from(self).iter()
    }
}

impl From<StyleSet> for StyleState {
    fn from(set: StyleSet) -> Self {
        StyleState {
            bold: set.contains(Attribute::Bold),
            italic: set.contains(Attribute::Italic),
            strikethrough: set.contains(Attribute::Strikethrough),
        }
    }
}

impl From<StyleState> for StyleSet {
    fn from(state: StyleState) -> Self {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| state.is_active(*attribute))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores() {
        let state = StyleState::PLAIN.toggled(Attribute::Italic);
        assert!(state.italic);
        assert!(!state.bold);
        assert_eq!(state.toggled(Attribute::Italic), StyleState::PLAIN);
    }

    #[test]
    fn converts_to_style_set() {
        let state = StyleState {
            bold: true,
            italic: false,
            strikethrough: true,
        };
        assert_eq!(StyleSet::from(state).bits(), 5);
        assert_eq!(
            state.attributes().collect::<Vec<_>>(),
            vec![Attribute::Bold, Attribute::Strikethrough]
        );
    }

    #[test]
    fn builds_from_attribute_list() {
        let state = StyleState::from_attributes([Attribute::Italic, Attribute::Italic]);
        assert_eq!(
            state,
            StyleState {
                bold: false,
                italic: true,
                strikethrough: false,
            }
        );
        assert_eq!(StyleState::from_attributes(Vec::new() as Vec<Attribute>), StyleState::PLAIN);
    }
}
