//! Library half of the `stylemark` binary, shared with its tests.

pub mod transforms;
