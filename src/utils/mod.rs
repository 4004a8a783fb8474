// Utility functions and helpers
//
// This module provides general-purpose I/O helpers shared by the dictionary
// loader and the configuration reader.

pub mod io_utils;

pub use io_utils::{resolve_resource_path, skip_utf8_bom, string_from_file};
