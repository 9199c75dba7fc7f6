//! # Introduction
//!
//! Grust parses and executes [Grass], an esoteric language whose entire
//! surface syntax is the three characters `w`, `W` and `v`. Programs compile
//! to a tiny de-Bruijn-indexed combinator machine which is then advanced one
//! instruction at a time, so a host (CLI, playground, visualizer) can
//! inspect queue length, dump depth, environment contents and output bytes
//! between any two steps.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → parse → Instructions → Machine.load → step… → output bytes
//! ```
//!
//! 1. [`parser`] — filters the source down to its meaningful symbols and
//!    builds the instruction sequence.
//! 2. [`memory`] — the runtime data model: tagged
//!    [`memory::value::Value`] variants bound in a top-addressed
//!    [`memory::env::Env`].
//! 3. [`interpreter`] — the [`interpreter::engine::Machine`]: bootstrap
//!    state, single-step evaluation, byte I/O buffers, runtime errors.
//!
//! ## Language surface
//!
//! Values: closures, single bytes, and the primitives `In`, `Out`, `Succ`.
//! Byte comparison yields Church-style True/False combinators. A program is
//! started by applying its top-level result to itself; this entry convention
//! is part of the machine bootstrap.
//!
//! [Grass]: http://www.blue.sky.or.jp/grass/

pub mod interpreter;
pub mod memory;
pub mod parser;
