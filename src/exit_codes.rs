//! Exit code constants for the tmplgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: I/O failure (reading a template, writing an output or event log)
//! - 3: Unmatched `[% END IF %]` with no open block
//! - 4: Unterminated block (an opener never closed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a template could not be read or an output could not be written.
pub const IO_FAILURE: i32 = 2;

/// A closer appeared while no block was open.
pub const UNMATCHED_CLOSER: i32 = 3;

/// End of input was reached with one or more blocks still open.
pub const UNTERMINATED_BLOCK: i32 = 4;
