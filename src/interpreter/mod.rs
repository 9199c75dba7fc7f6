//! Grass machine execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`Machine`](engine::Machine) with its step-wise evaluator
//! - [`errors`]: runtime error types
//! - [`io`]: the input byte queue and append-only output buffer
//!
//! # Execution Model
//!
//! The machine holds a queue of pending instructions, a de-Bruijn
//! environment, and a dump (continuation stack) of saved callers. Each
//! `step` call evaluates exactly one instruction, or, when the current
//! scope's queue is empty, returns the scope's result to the topmost saved
//! caller. The machine never loops on its own; callers decide the stepping
//! cadence.
//!
//! # Bootstrap Convention
//!
//! A fresh machine is seeded with the four global bindings (`In`,
//! `Char('w')`, `Succ`, `Out`) and a two-frame dump whose upper frame
//! applies the finished program to itself. Getting this wrong changes the
//! meaning of every program, so the seeding is fixed in
//! [`engine::Machine::new`] and covered by tests.

pub mod engine;
pub mod errors;
pub mod io;
