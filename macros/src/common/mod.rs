// Common utilities shared by the derive macros
//
// This module contains:
// - options: `#[drawable(...)]` attribute parsing
// - parse_utils: Common parsing helpers

mod options;
mod parse_utils;

pub use options::*;
pub use parse_utils::*;
