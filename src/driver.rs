//! Run orchestration.
//!
//! [`execute`] turns parsed CLI arguments into a run: it loads the config,
//! applies command-line overrides, and hands the positional stream to [`run`].
//! [`run`] walks the steps in order, growing the variable table on each
//! binding and rendering each template with the table as it stands at that
//! point. The first failure ends the run; outputs already written stay.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TmplError};
use crate::events::{Event, EventAction, append_event};
use crate::fs::atomic_write_file;
use crate::invocation::{Step, parse_steps};
use crate::output::Suffixes;
use crate::template::{self, RenderStats};
use crate::vars::VariableTable;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How rendered templates are delivered.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub suffixes: Suffixes,
    /// Print rendered text instead of writing output files.
    pub to_stdout: bool,
    /// NDJSON event log, if enabled.
    pub events_log: Option<PathBuf>,
}

/// One successfully rendered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// `None` when the output went to stdout.
    pub output: Option<PathBuf>,
    pub stats: RenderStats,
}

/// Entry point for the CLI.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                TmplError::UserError(format!("failed to determine current directory: {}", e))
            })?;
            Config::discover(cwd)?
        }
    };

    if let Some(suffix) = cli.template_suffix {
        config.template_suffix = suffix;
    }
    if let Some(suffix) = cli.output_suffix {
        config.output_suffix = suffix;
    }
    config.validate()?;

    let options = RunOptions {
        suffixes: config.suffixes(),
        to_stdout: cli.stdout,
        events_log: cli
            .events
            .or_else(|| config.events_log.as_ref().map(PathBuf::from)),
    };

    let steps = parse_steps(cli.args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rendered = run(&steps, config.variable_table(), &options, &mut out)?;

    info!(templates = rendered.len(), "run complete");
    Ok(())
}

/// Execute `steps` in order, starting from the bindings in `vars`.
///
/// Rendered text goes to `out` when `options.to_stdout` is set, otherwise to
/// each template's derived output path.
pub fn run<W: Write>(
    steps: &[Step],
    mut vars: VariableTable,
    options: &RunOptions,
    out: &mut W,
) -> Result<Vec<RenderedFile>> {
    if !vars.is_empty() {
        debug!(count = vars.len(), "starting with configured bindings");
    }

    let mut rendered = Vec::new();
    for step in steps {
        match step {
            Step::Bind { name, value } => {
                match vars.get(name) {
                    Some(previous) => debug!(%name, %value, %previous, "rebind"),
                    None => debug!(%name, %value, "bind"),
                }
                vars.set(name.as_str(), value.as_str());
            }
            Step::Render(path) => {
                let result = render_file(path, &vars, options, out);
                log_event(path, &result, &vars, options)?;
                rendered.push(result?);
            }
        }
    }

    Ok(rendered)
}

/// Render one template and deliver its output.
fn render_file<W: Write>(
    input: &Path,
    vars: &VariableTable,
    options: &RunOptions,
    out: &mut W,
) -> Result<RenderedFile> {
    let text = std::fs::read_to_string(input).map_err(|e| {
        TmplError::IoError(format!(
            "failed to read template '{}': {}",
            input.display(),
            e
        ))
    })?;

    let rendered = template::render(&text, vars).map_err(|source| TmplError::Template {
        file: input.to_path_buf(),
        source,
    })?;
    let content = rendered.to_text();

    let output = if options.to_stdout {
        out.write_all(content.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| TmplError::IoError(format!("failed to write to stdout: {}", e)))?;
        None
    } else {
        let path = options.suffixes.output_path(input);
        atomic_write_file(&path, &content)?;
        Some(path)
    };

    info!(
        input = %input.display(),
        output = %display_output(output.as_deref()),
        lines_in = rendered.stats.lines_in,
        lines_out = rendered.stats.lines_out,
        blocks_kept = rendered.stats.blocks_kept,
        blocks_dropped = rendered.stats.blocks_dropped,
        "rendered template"
    );

    Ok(RenderedFile {
        output,
        stats: rendered.stats,
    })
}

/// An output path for logs; `-` stands for stdout.
fn display_output(output: Option<&Path>) -> String {
    output.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

/// Record the outcome of one template in the event log, if enabled.
///
/// Render records list the names bound at that point, not their values.
/// When the template itself failed, a log write failure is only warned about
/// so the template's error is the one reported.
fn log_event(
    input: &Path,
    result: &Result<RenderedFile>,
    vars: &VariableTable,
    options: &RunOptions,
) -> Result<()> {
    let Some(log) = &options.events_log else {
        return Ok(());
    };

    match result {
        Ok(file) => {
            let names: Vec<&str> = vars.iter().map(|(name, _)| name).collect();
            let event = Event::new(EventAction::Render, input).with_details(json!({
                "output": display_output(file.output.as_deref()),
                "variables": names,
                "lines_in": file.stats.lines_in,
                "lines_out": file.stats.lines_out,
                "blocks_kept": file.stats.blocks_kept,
                "blocks_dropped": file.stats.blocks_dropped,
            }));
            append_event(log, &event)
        }
        Err(err) => {
            let event = Event::new(EventAction::Fail, input).with_details(json!({
                "error": err.to_string(),
                "exit_code": err.exit_code(),
            }));
            if let Err(log_err) = append_event(log, &event) {
                warn!(error = %log_err, "failed to record failure in event log");
            }
            Ok(())
        }
    }
}
