//! I/O utility functions for locating and reading resource files.
//!
//! This module provides helper functions for:
//! - Resolving resource paths against the process working directory
//! - Reading text files while tolerating a leading UTF-8 BOM
//!
//! # Examples
//!
//! ```no_run
//! use wordgen::utils::io_utils::{resolve_resource_path, string_from_file};
//!
//! let path = resolve_resource_path("russian_nouns_with_definition.json").unwrap();
//! let text = string_from_file(&path).unwrap();
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::Result;

/// Strips a leading UTF-8 byte order mark, if present.
pub fn skip_utf8_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Resolves a resource path.
///
/// Absolute paths are returned unchanged; relative paths are joined onto the
/// current working directory, which is where the dictionary is expected to
/// live at startup.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn resolve_resource_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Reads a whole file as UTF-8 text, dropping a leading BOM.
pub fn string_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.starts_with('\u{FEFF}') {
        text = skip_utf8_bom(&text).to_string();
    }
    Ok(text)
}
