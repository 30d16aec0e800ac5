//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "tmplgen.yaml";

/// Configuration for a tmplgen run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix stripped from template paths to name their output.
    #[serde(default = "default_template_suffix")]
    pub template_suffix: String,

    /// Suffix appended to paths that do not end with `template_suffix`.
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Bindings applied before any `-D` on the command line.
    ///
    /// Command-line bindings to the same name win.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// NDJSON event log appended to when `--events` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_suffix: default_template_suffix(),
            output_suffix: default_output_suffix(),
            variables: BTreeMap::new(),
            events_log: None,
        }
    }
}

pub(super) fn default_template_suffix() -> String {
    ".tmpl".to_string()
}

pub(super) fn default_output_suffix() -> String {
    ".out".to_string()
}
