//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the closed set of runtime values
//! the machine manipulates. Every value supports exactly one operation,
//! application, which the engine dispatches by pattern matching:
//!
//! - [`Value::Closure`]: a function pairing an arity, an instruction body,
//!   and a captured environment snapshot
//! - [`Value::Char`]: a single byte; applying it compares bytes for equality
//! - [`Value::In`] / [`Value::Out`] / [`Value::Succ`]: the three built-in
//!   primitives (read a byte, write a byte, increment a byte)
//!
//! # Boolean Combinators
//!
//! Grass has no boolean type; byte comparison yields one of two fixed
//! arity-2 closures. `True` selects its first argument, `False` its second.
//! Both are built over an empty captured environment by [`Value::truth`].

use super::env::Env;
use crate::parser::ast::Insn;
use std::fmt;

/// Runtime values in the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A function value. `arity` is always at least 1.
    Closure {
        arity: usize,
        body: Vec<Insn>,
        env: Env,
    },
    /// A single byte.
    Char(u8),
    /// Built-in: read one byte from the input queue.
    In,
    /// Built-in: append one byte to the output buffer.
    Out,
    /// Built-in: increment a byte, wrapping at 256.
    Succ,
}

impl Value {
    /// The boolean combinators: `truth(true)` selects its first argument,
    /// `truth(false)` its second, once applied to two further values.
    pub fn truth(selects_first: bool) -> Value {
        let body = if selects_first {
            // λx y. x  encoded as: push an identity closure, apply it to x
            vec![
                Insn::Abs { arity: 1, body: vec![] },
                Insn::App { func: 1, arg: 3 },
            ]
        } else {
            // λx y. y  falls out of an empty body: the topmost binding wins
            vec![]
        };
        Value::Closure {
            arity: 2,
            body,
            env: Env::new(),
        }
    }

    /// Get the byte value, returns None if not a Char.
    pub fn as_char(&self) -> Option<u8> {
        match self {
            Value::Char(byte) => Some(*byte),
            _ => None,
        }
    }

    /// Short variant name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Closure { .. } => "Closure",
            Value::Char(_) => "Char",
            Value::In => "In",
            Value::Out => "Out",
            Value::Succ => "Succ",
        }
    }

    /// Whether a byte is printable ASCII.
    pub fn is_print(byte: u8) -> bool {
        (0x20..=0x7e).contains(&byte)
    }
}

impl fmt::Display for Value {
    /// Renders the value the way the playground shows environment slots:
    /// closures in Grass notation, chars quoted when printable and as hex
    /// otherwise, primitives by name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Closure { arity, body, .. } => {
                write!(f, "{}", "w".repeat(*arity))?;
                for insn in body {
                    write!(f, "{}", insn)?;
                }
                Ok(())
            }
            Value::Char(byte) if Value::is_print(*byte) => {
                write!(f, "Char('{}')", *byte as char)
            }
            Value::Char(byte) => write!(f, "Char(0x{:02x})", byte),
            Value::In => write!(f, "In"),
            Value::Out => write!(f, "Out"),
            Value::Succ => write!(f, "Succ"),
        }
    }
}
