//! Grass source parser
//!
//! This module transforms Grass source text into an instruction sequence:
//! - [`parse`]: lexical filter and run-length parser (source text → instructions)
//! - [`ast`]: instruction definitions and Grass-notation rendering
//!
//! # Grass Grammar
//!
//! The entire grammar fits in a sentence: a program is `v`-separated
//! segments, each segment an optional leading `w`-run (the arity of an
//! abstraction) followed by alternating `W`/`w` run pairs (applications
//! naming function and argument by environment index). Every other
//! character is a comment.
//!
//! # Parser Implementation
//!
//! Hand-written run-length scanner; there is nothing to tokenize beyond
//! grouping identical adjacent letters. No external parser dependencies.

pub mod ast;
pub mod parse;

pub use ast::{Insn, Program};
pub use parse::{parse, ParseError};
