//! The positional argument stream.
//!
//! Arguments are consumed left to right:
//!
//! - `-D<name>` binds `<name>` to the next argument, whatever it looks like.
//! - Any other argument is a template path, rendered with the bindings seen so far.
//!
//! Bindings accumulate over the whole run, so
//! `-DCLASS craft a.hpp.tmpl -DMODEL m b.cpp.tmpl` renders `a.hpp.tmpl` with
//! `CLASS` bound and `b.cpp.tmpl` with both `CLASS` and `MODEL` bound.

use crate::error::{Result, TmplError};
use std::path::PathBuf;
use tracing::warn;

/// Prefix that marks a binding.
const BIND_PREFIX: &str = "-D";

/// One step of a run, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Bind `name` to `value` for every later template.
    Bind { name: String, value: String },
    /// Render the template at this path.
    Render(PathBuf),
}

/// Turn the positional arguments into steps.
///
/// A bare `-D` is ignored. A `-D<name>` with nothing after it, or an argument
/// list without any template path, is a usage error.
pub fn parse_steps<I, S>(args: I) -> Result<Vec<Step>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut steps = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let Some(name) = arg.strip_prefix(BIND_PREFIX) else {
            steps.push(Step::Render(PathBuf::from(arg)));
            continue;
        };

        if name.is_empty() {
            warn!("ignoring '-D' with no variable name");
            continue;
        }

        let value = args.next().ok_or_else(|| {
            TmplError::UserError(format!("missing value for binding '-D{}'", name))
        })?;
        steps.push(Step::Bind {
            name: name.to_string(),
            value,
        });
    }

    if !steps.iter().any(|s| matches!(s, Step::Render(_))) {
        return Err(TmplError::UserError("no template files given".to_string()));
    }

    Ok(steps)
}
