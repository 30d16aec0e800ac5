//! Run event log.
//!
//! When enabled, every processed template appends one JSON object per line
//! (NDJSON) to the configured log file, so generated files can be traced back
//! to the run that produced them and the variable names bound at the time.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `render` or `fail`
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `file`: the template path
//! - `details`: freeform object with action-specific details

use crate::error::{Result, TmplError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A template was rendered and its output written.
    Render,
    /// A template could not be rendered; the run stops here.
    Fail,
}

/// An event record for the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// Who ran the tool (e.g., `user@HOST`).
    pub actor: String,

    /// The template path.
    pub file: String,

    /// Action-specific details.
    pub details: Value,
}

impl Event {
    /// Create a new event for `file`, stamped now.
    pub fn new(action: EventAction, file: &Path) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            file: file.display().to_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TmplError::IoError(format!("failed to serialize event to JSON: {}", e)))
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`, creating the file and its directory as needed.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            TmplError::IoError(format!(
                "failed to create event log directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            TmplError::IoError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        TmplError::IoError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Render, Path::new("craft.hpp.tmpl"));

        assert_eq!(event.action, EventAction::Render);
        assert_eq!(event.file, "craft.hpp.tmpl");
        assert!(!event.actor.is_empty());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_with_details() {
        let event = Event::new(EventAction::Render, Path::new("a.tmpl"))
            .with_details(json!({"output": "a", "lines_out": 3}));

        assert_eq!(event.details["output"], "a");
        assert_eq!(event.details["lines_out"], 3);
    }

    #[test]
    fn test_event_serialization_is_single_line() {
        let event = Event::new(EventAction::Fail, Path::new("a.tmpl"))
            .with_details(json!({"error": "line 1: unbalanced END IF\nmore"}));

        let json_line = event.to_ndjson_line().unwrap();
        assert!(!json_line.contains('\n'));

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.action, EventAction::Fail);
        assert!(json_line.contains("\"fail\""));
    }

    #[test]
    fn test_append_event_creates_file_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("logs").join("events.ndjson");

        append_event(&log, &Event::new(EventAction::Render, Path::new("a.tmpl"))).unwrap();
        append_event(&log, &Event::new(EventAction::Fail, Path::new("b.tmpl"))).unwrap();

        let content = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Event = serde_json::from_str(lines[0]).unwrap();
        let second: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.file, "a.tmpl");
        assert_eq!(second.action, EventAction::Fail);
    }
}
