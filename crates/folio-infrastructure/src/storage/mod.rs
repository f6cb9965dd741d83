//! Storage layer for atomic file operations.

mod json_file;

pub use json_file::{JsonFile, write_atomic};
