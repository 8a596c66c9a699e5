// Utility functions and helpers
//
// This module provides collation, file scanning and HTML escaping helpers shared by
// the loaders, the entry store and the highlight renderer.

pub mod icu_wrapper;
pub mod io_utils;
pub mod html_utils;

pub use icu_wrapper::*;
pub use io_utils::{scan_dir, string_from_file};
pub use html_utils::html_escape_text;
