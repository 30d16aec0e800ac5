//! Output path naming.
//!
//! `craft.hpp.tmpl` renders to `craft.hpp`. A template without the template
//! suffix gets the output suffix appended instead, so `notes.txt` renders to
//! `notes.txt.out` and never overwrites its own input.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffixes used to derive output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    /// Stripped from input paths that end with it (default `.tmpl`).
    pub template: String,
    /// Appended to input paths that do not (default `.out`).
    pub output: String,
}

impl Suffixes {
    /// Derive the output path for a template path.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let raw = input.as_os_str();

        // Suffixes are matched on the UTF-8 form of the path; non-UTF-8 paths
        // always take the appended suffix.
        if let Some(text) = raw.to_str()
            && let Some(stem) = text.strip_suffix(self.template.as_str())
            && !stem.is_empty()
            && !stem.ends_with(std::path::is_separator)
        {
            return PathBuf::from(stem);
        }

        let mut out = OsString::from(raw);
        out.push(&self.output);
        PathBuf::from(out)
    }
}
