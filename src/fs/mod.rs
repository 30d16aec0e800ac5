//! Filesystem utilities for tmplgen.
//!
//! Rendered outputs are written atomically so an interrupted or failed run
//! never leaves a half-written generated file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
