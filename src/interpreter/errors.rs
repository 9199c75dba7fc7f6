//! Runtime error types for the Grass machine
//!
//! This module defines [`RuntimeError`], which represents all errors that can
//! occur while driving a [`Machine`](super::engine::Machine) (as opposed to
//! parse errors, which never survive past [`parse`](crate::parser::parse)).
//!
//! All runtime errors are fatal: there is no in-language recovery, the run
//! halts, and output already accumulated stays valid and readable.

use super::engine::Status;
use std::fmt;

/// Runtime errors that can occur while loading or stepping a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Stepped a machine that has no program loaded yet
    NotStarted,

    /// Loaded a program into a machine that already left the ready state
    AlreadyLoaded { status: Status },

    /// An application required a Char argument and got something else
    NotAChar {
        operation: &'static str,
        got: &'static str,
    },

    /// Environment lookup past the current bounds (malformed instruction
    /// stream; cannot happen for parser-produced programs)
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NotStarted => {
                write!(f, "Cannot step a machine with no program loaded")
            }
            RuntimeError::AlreadyLoaded { status } => {
                write!(
                    f,
                    "Cannot load a program into a {} machine",
                    status
                )
            }
            RuntimeError::NotAChar { operation, got } => {
                write!(
                    f,
                    "Type fault: {} requires a Char argument, got {}",
                    operation, got
                )
            }
            RuntimeError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Environment index {} out of range (length {})",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
