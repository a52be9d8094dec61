//! Unit tests for `#[flag(...)]` attribute parsing and type inspection.

mod input;
