//! Error types for the tmplgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tmplgen operations.
///
/// Each variant maps to a specific exit code. Every error is fatal to the run.
#[derive(Error, Debug)]
pub enum TmplError {
    /// User provided invalid arguments or an invalid config file.
    #[error("{0}")]
    UserError(String),

    /// A template could not be read, or an output could not be written.
    #[error("{0}")]
    IoError(String),

    /// A template's conditional blocks could not be resolved.
    #[error("{}: {source}", file.display())]
    Template {
        /// The template file being processed.
        file: PathBuf,
        /// What went wrong while resolving its blocks.
        source: ResolveError,
    },
}

impl TmplError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TmplError::UserError(_) => exit_codes::USER_ERROR,
            TmplError::IoError(_) => exit_codes::IO_FAILURE,
            TmplError::Template { source, .. } => match source {
                ResolveError::UnmatchedCloser { .. } => exit_codes::UNMATCHED_CLOSER,
                ResolveError::UnterminatedBlock { .. } => exit_codes::UNTERMINATED_BLOCK,
            },
        }
    }
}

/// Result type alias for tmplgen operations.
pub type Result<T> = std::result::Result<T, TmplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = TmplError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = TmplError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn unmatched_closer_has_correct_exit_code() {
        let err = TmplError::Template {
            file: PathBuf::from("a.hpp.tmpl"),
            source: ResolveError::UnmatchedCloser { line: 1 },
        };
        assert_eq!(err.exit_code(), exit_codes::UNMATCHED_CLOSER);
    }

    #[test]
    fn unterminated_block_has_correct_exit_code() {
        let err = TmplError::Template {
            file: PathBuf::from("a.hpp.tmpl"),
            source: ResolveError::UnterminatedBlock {
                if_lines: vec![1],
                if_not_lines: vec![],
            },
        };
        assert_eq!(err.exit_code(), exit_codes::UNTERMINATED_BLOCK);
    }

    #[test]
    fn error_messages_name_the_file() {
        let err = TmplError::Template {
            file: PathBuf::from("craft.hpp.tmpl"),
            source: ResolveError::UnmatchedCloser { line: 7 },
        };
        assert_eq!(err.to_string(), "craft.hpp.tmpl: line 7: unbalanced END IF");
    }
}
