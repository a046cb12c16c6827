//! Core data structures: attributes, style marks, styled text and input state.

pub mod attributes;
pub mod state;
pub mod styled_text;

pub use attributes::{Attribute, StyleMark, StyleSet};
pub use state::StyleState;
pub use styled_text::{StyleSpan, StyledText};
