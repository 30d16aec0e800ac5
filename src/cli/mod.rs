//! CLI argument parsing for tmplgen.
//!
//! Uses clap derive macros for declarative argument definitions. Options must
//! come first: from the first binding or template path onward every argument
//! belongs to the positional stream handled by [`crate::invocation`].

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// tmplgen: generate source files from line-oriented templates.
///
/// Templates use `[% NAME %]` placeholders and whole-line
/// `[% IF NAME %]` / `[% IF NOT NAME %]` ... `[% END IF %]` blocks.
/// `-DNAME value` binds a variable for every template named after it;
/// `craft.hpp.tmpl` renders to `craft.hpp`.
#[derive(Parser, Debug)]
#[command(name = "tmplgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (default: ./tmplgen.yaml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suffix stripped from template paths to name outputs.
    #[arg(long, value_name = "SUFFIX")]
    pub template_suffix: Option<String>,

    /// Suffix appended to paths without the template suffix.
    #[arg(long, value_name = "SUFFIX")]
    pub output_suffix: Option<String>,

    /// Print rendered templates to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Append one NDJSON record per processed template to this file.
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Bindings (`-DNAME value`) and template paths, processed left to right.
    #[arg(
        value_name = "ARGS",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
