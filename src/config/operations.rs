//! Config loading, validation, and utility operations.

use super::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, TmplError};
use crate::output::Suffixes;
use crate::vars::VariableTable;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TmplError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TmplError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `tmplgen.yaml` from `dir` if present, otherwise return defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            debug!(path = %path.display(), "loading discovered config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TmplError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - both suffixes must be non-empty and differ from each other
    /// - variable names must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.template_suffix.is_empty() {
            return Err(TmplError::UserError(
                "config validation failed: template_suffix must not be empty".to_string(),
            ));
        }

        if self.output_suffix.is_empty() {
            return Err(TmplError::UserError(
                "config validation failed: output_suffix must not be empty".to_string(),
            ));
        }

        if self.template_suffix == self.output_suffix {
            return Err(TmplError::UserError(format!(
                "config validation failed: template_suffix and output_suffix are both '{}'",
                self.template_suffix
            )));
        }

        if self.variables.keys().any(|name| name.is_empty()) {
            return Err(TmplError::UserError(
                "config validation failed: variable names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The suffixes used for output naming.
    pub fn suffixes(&self) -> Suffixes {
        Suffixes {
            template: self.template_suffix.clone(),
            output: self.output_suffix.clone(),
        }
    }

    /// A variable table seeded with the configured bindings.
    pub fn variable_table(&self) -> VariableTable {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}
