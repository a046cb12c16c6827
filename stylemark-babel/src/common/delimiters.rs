//! The stack of currently open Markdown delimiters.
//!
//! The attribute set is closed and small, so the stack is a fixed three-slot array in
//! opening order plus a bitmask for membership. Every operation is O(1).

use crate::model::attributes::{Attribute, StyleSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterStack {
    order: [Option<Attribute>; 3],
    len: usize,
    open: StyleSet,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.open.contains(attribute)
    }

    /// Open `attribute`. Returns `false` if it was already open.
    pub fn push(&mut self, attribute: Attribute) -> bool {
        if self.contains(attribute) {
            return false;
        }
        self.order[self.len] = Some(attribute);
        self.len += 1;
        self.open = self.open.with(attribute);
        true
    }

    /// Close `attribute` wherever it sits. Returns `false` if it was not open.
    pub fn remove(&mut self, attribute: Attribute) -> bool {
        if !self.contains(attribute) {
            return false;
        }
        let Some(position) = self.order[..self.len]
            .iter()
            .position(|slot| *slot == Some(attribute))
        else {
            return false;
        };
        self.order.copy_within(position + 1..self.len, position);
        self.len -= 1;
        self.order[self.len] = None;
        self.open = self.open.without(attribute);
        true
    }

    /// Open delimiters, most recently opened first.
    pub fn recent_first(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.order[..self.len].iter().rev().flatten().copied()
    }
}
