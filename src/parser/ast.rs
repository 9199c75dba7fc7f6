//! Instruction definitions
//!
//! A parsed Grass program is a flat sequence of [`Insn`] values. There are
//! only two instruction forms:
//! - [`Insn::App`]: apply one environment slot to another, both named by
//!   1-based indices counted from the top of the environment.
//! - [`Insn::Abs`]: build a closure over a body of further instructions,
//!   capturing a snapshot of the environment at evaluation time.
//!
//! Instructions carry no behaviour themselves; the engine pattern-matches on
//! them during stepping.

use std::fmt;

/// A single machine instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insn {
    /// Apply the value at index `func` to the value at index `arg`.
    ///
    /// Both indices are resolved against the environment before the
    /// application mutates anything.
    App { func: usize, arg: usize },

    /// Push a closure of the given arity over `body`, capturing a copy of
    /// the current environment. Does not transfer control.
    Abs { arity: usize, body: Vec<Insn> },
}

/// A parsed top-level program.
pub type Program = Vec<Insn>;

impl fmt::Display for Insn {
    /// Renders the instruction in Grass notation: `W…w…` for an
    /// application, `w…` followed by the body for an abstraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insn::App { func, arg } => {
                write!(f, "{}{}", "W".repeat(*func), "w".repeat(*arg))
            }
            Insn::Abs { arity, body } => {
                write!(f, "{}", "w".repeat(*arity))?;
                for insn in body {
                    write!(f, "{}", insn)?;
                }
                Ok(())
            }
        }
    }
}

/// Render a whole program back to Grass source.
///
/// Top-level instructions are joined with the `v` separator. Splitting a run
/// of arity-0 applications into separate segments is harmless: the parser
/// concatenates segment instructions back in order.
pub fn render_program(program: &[Insn]) -> String {
    program
        .iter()
        .map(|insn| insn.to_string())
        .collect::<Vec<_>>()
        .join("v")
}
