//! Headless editing session
//!
//! Models the editor surface the codec was built for without any UI: a styled buffer, a
//! caret or selection, and the active [`StyleState`] that newly typed text receives. Every
//! time the active state is recomputed the session reports it to its [`StyleStateListener`],
//! which is how a host keeps its bold/italic/strikethrough buttons in sync.
//!
//! State derivation follows what a user expects from a word processor:
//!
//! - caret at 0: plain
//! - caret elsewhere: whatever styles the character before the caret
//! - selection: every attribute touching any selected character
//!
//! Toggling with a selection restyles the selection to exactly the new state.

use crate::formats::markdown::{parser, serializer};
use crate::model::attributes::Attribute;
use crate::model::state::StyleState;
use crate::model::styled_text::StyledText;
use crate::options::CodecOptions;
use std::ops::Range;
use tracing::debug;

/// Receives the active style state whenever the session recomputes it.
pub trait StyleStateListener {
    fn on_style_state_change(&mut self, state: StyleState);
}

impl<F> StyleStateListener for F
where
    F: FnMut(StyleState),
{
    fn on_style_state_change(&mut self, state: StyleState) {
        self(state)
    }
}

pub struct EditorSession<L: StyleStateListener> {
    doc: StyledText,
    state: StyleState,
    selection: Range<usize>,
    options: CodecOptions,
    listener: L,
}

impl<L: StyleStateListener> EditorSession<L> {
    pub fn new(listener: L) -> Self {
        Self::with_options(listener, CodecOptions::default())
    }

    pub fn with_options(listener: L, options: CodecOptions) -> Self {
        Self {
            doc: StyledText::default(),
            state: StyleState::PLAIN,
            selection: 0..0,
            options,
            listener,
        }
    }

    pub fn document(&self) -> &StyledText {
        &self.doc
    }

    pub fn text(&self) -> &str {
        self.doc.text()
    }

    pub fn state(&self) -> StyleState {
        self.state
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Flip `attribute` in the active state.
    ///
    /// With a non-empty selection the selected text is restyled to the new state, dropping
    /// whatever else it carried.
    pub fn toggle(&mut self, attribute: Attribute) {
        self.set_state(self.state.toggled(attribute));
        if !self.selection.is_empty() {
            debug!(
                start = self.selection.start,
                end = self.selection.end,
                "restyling selection"
            );
            self.doc.restyle(self.selection.clone(), self.state);
        }
    }

    /// Insert `text` at the caret with the active state, replacing any selection.
    pub fn type_text(&mut self, text: &str) {
        let at = self.selection.start;
        if !self.selection.is_empty() {
            self.doc.delete(self.selection.clone());
        }
        self.doc.insert(at, text, self.state);
        let caret = at + text.chars().count();
        self.selection = caret..caret;
    }

    /// Collapse the selection to a caret at `position` and derive the active state.
    pub fn move_caret(&mut self, position: usize) {
        let position = position.min(self.doc.char_len());
        self.selection = position..position;
        let state = match position {
            0 => StyleState::PLAIN,
            _ => self.doc.attributes_at(position - 1).into(),
        };
        self.set_state(state);
    }

    /// Select `range` and derive the active state from every span touching it.
    ///
    /// An empty range behaves like [`Self::move_caret`].
    pub fn select(&mut self, range: Range<usize>) {
        let end = range.end.min(self.doc.char_len());
        let start = range.start.min(end);
        if start == end {
            self.move_caret(start);
            return;
        }
        self.selection = start..end;
        self.set_state(self.doc.attributes_in(start..end).into());
    }

    pub fn to_markdown(&self) -> String {
        serializer::serialize_to_markdown(&self.doc, &self.options)
    }

    /// Replace the buffer with decoded `markdown` and put the caret at the end.
    pub fn load_markdown(&mut self, markdown: &str) {
        self.doc = parser::parse_from_markdown(markdown, &self.options.decode);
        self.move_caret(self.doc.char_len());
    }

    fn set_state(&mut self, state: StyleState) {
        self.state = state;
        self.listener.on_style_state_change(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        states: Vec<StyleState>,
    }

    impl StyleStateListener for Recorder {
        fn on_style_state_change(&mut self, state: StyleState) {
            self.states.push(state);
        }
    }

    fn bold() -> StyleState {
        StyleState::PLAIN.toggled(Attribute::Bold)
    }

    #[test]
    fn toggle_notifies_listener() {
        let mut session = EditorSession::new(Recorder::default());
        session.toggle(Attribute::Bold);
        session.toggle(Attribute::Bold);
        assert_eq!(session.listener().states, vec![bold(), StyleState::PLAIN]);
    }

    #[test]
    fn typed_text_takes_active_state() {
        let mut session = EditorSession::new(Recorder::default());
        session.type_text("plain ");
        session.toggle(Attribute::Bold);
        session.type_text("bold");
        assert_eq!(session.text(), "plain bold");
        assert_eq!(session.selection(), 10..10);
        assert_eq!(session.to_markdown(), "plain **bold**");
    }

    #[test]
    fn caret_derives_state_from_previous_character() {
        let mut session = EditorSession::new(Recorder::default());
        session.load_markdown("**a**b");

        session.move_caret(1);
        assert_eq!(session.state(), bold());
        session.move_caret(2);
        assert_eq!(session.state(), StyleState::PLAIN);
        session.move_caret(0);
        assert_eq!(session.state(), StyleState::PLAIN);
    }

    #[test]
    fn selection_collects_every_touching_attribute() {
        let mut session = EditorSession::new(Recorder::default());
        session.load_markdown("**a***b*");
        session.select(0..2);
        assert_eq!(session.document().spans().len(), 2);
        assert_eq!(
            session.state(),
            StyleState {
                bold: true,
                italic: true,
                strikethrough: false,
            }
        );
    }

    #[test]
    fn toggle_restyles_selection() {
        let mut session = EditorSession::new(Recorder::default());
        session.load_markdown("**abc**");
        session.select(1..2);
        assert_eq!(session.state(), bold());

        session.toggle(Attribute::Bold);
        assert_eq!(session.to_markdown(), "**a**b**c**");

        session.toggle(Attribute::Strikethrough);
        assert_eq!(session.to_markdown(), "**a**~~b~~**c**");
    }

    #[test]
    fn typing_replaces_selection() {
        let mut session = EditorSession::new(Recorder::default());
        session.load_markdown("a**b**c");
        session.select(1..2);
        session.type_text("XY");
        assert_eq!(session.text(), "aXYc");
        assert_eq!(session.to_markdown(), "a**XY**c");
    }

    #[test]
    fn listener_is_returned_with_every_notification() {
        let mut session = EditorSession::new(Recorder::default());
        session.load_markdown("*a*");
        session.select(0..1);
        let recorder = session.into_listener();
        let italic = StyleState::PLAIN.toggled(Attribute::Italic);
        assert_eq!(recorder.states, vec![italic, italic]);
    }

    #[test]
    fn closure_listener() {
        let mut count = 0;
        {
            let mut session = EditorSession::new(|_state: StyleState| count += 1);
            session.toggle(Attribute::Italic);
            session.move_caret(0);
        }
        assert_eq!(count, 2);
    }
}
