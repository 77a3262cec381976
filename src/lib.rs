//! Byte-size unit constants and human-readable size formatting.

pub mod format;

pub use format::{GB, KB, MB, TB, format_file_size};
