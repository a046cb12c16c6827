//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`crate::StyledText`] and various text representations.

pub mod json;
pub mod markdown;
pub mod plain;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use plain::PlainFormat;
