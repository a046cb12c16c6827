//! Markdown format tests
//!
//! Tests for bidirectional styled text ↔ Markdown conversion.

mod export;
mod import;
mod properties;
