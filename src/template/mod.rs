//! Template rendering.
//!
//! A template is plain text with three kinds of whole-line markers and one
//! inline placeholder:
//!
//! ```text
//! [% IF MODEL_STRUCT %]
//! struct [% MODEL_STRUCT %];
//! [% END IF %]
//! [% IF NOT MODEL_STRUCT %]
//! // no model
//! [% END IF %]
//! ```
//!
//! Blocks test only whether a variable is bound, never its value. Blocks of
//! either kind nest freely; a closer always belongs to the most recently
//! opened block that is still open. Placeholders are replaced on every line
//! that survives block resolution. There is no escaping.

mod marker;
mod resolve;
mod substitute;


pub use resolve::{RenderStats, ResolveError};

use crate::vars::VariableTable;

/// The output of rendering one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub stats: RenderStats,
}

impl Rendered {
    /// The output file contents: every line followed by a newline.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Render a sequence of template lines.
pub fn render_lines<S: AsRef<str>>(
    lines: &[S],
    vars: &VariableTable,
) -> Result<Rendered, ResolveError> {
    let tree = resolve::parse(lines)?;
    let mut stats = RenderStats {
        lines_in: lines.len(),
        ..RenderStats::default()
    };
    let lines = resolve::evaluate(&tree, vars, &mut stats);
    Ok(Rendered { lines, stats })
}

/// Render template text.
///
/// Lines are split on `\n` (a trailing `\r` is dropped with the rest of the
/// line's trailing whitespace).
pub fn render(text: &str, vars: &VariableTable) -> Result<Rendered, ResolveError> {
    let lines: Vec<&str> = text.lines().collect();
    render_lines(&lines, vars)
}
