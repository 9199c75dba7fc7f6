//! Runtime data model for the Grass machine
//!
//! This module provides the core data abstractions:
//! - [`value`]: tagged runtime values (closures, chars, the three primitives)
//! - [`env`]: the top-addressed, de-Bruijn-indexed binding stack
//!
//! # Index Convention
//!
//! Every instruction names its operands by 1-based index from the top of the
//! environment:
//! ```text
//! get(1)  →  most recently pushed value
//! get(k)  →  value k - 1 positions below the top
//! ```
//!
//! Lookups past the bottom are a fatal fault, never a default value: an
//! out-of-range index means the instruction stream is malformed.

pub mod env;
pub mod value;
