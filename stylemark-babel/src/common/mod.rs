//! Format-agnostic building blocks shared by the encoder and the inspection transforms.

pub mod delimiters;
pub mod extract;
pub mod runs;
