//! De-Bruijn environment
//!
//! This module provides [`Env`], the machine's binding store: a growable
//! stack of values addressed from the top, de-Bruijn style. Index 1 is the
//! most recently pushed value, index `k` the value `k - 1` positions below
//! it.
//!
//! # Capture Semantics
//!
//! Closures capture an environment by value at creation time while the
//! enclosing scope keeps growing, so `Env` is `Clone` and a clone is a
//! value-wise snapshot: pushes onto either copy never show through to the
//! other.

use super::value::Value;

/// Top-addressed stack of bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    stack: Vec<Value>,
}

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Env { stack: Vec::new() }
    }

    /// Create an environment from values ordered bottom-to-top.
    pub fn from_values(values: Vec<Value>) -> Self {
        Env { stack: values }
    }

    /// Push a value, making it the new index 1.
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Look up a value by 1-based index from the top.
    ///
    /// Returns `None` for index 0 or past the bottom; the engine turns that
    /// into a fatal fault rather than defaulting silently.
    pub fn get(&self, index: usize) -> Option<&Value> {
        if index == 0 {
            return None;
        }
        self.stack.len().checked_sub(index).map(|i| &self.stack[i])
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if no values are bound.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// All bound values, ordered bottom-to-top (for display).
    pub fn values(&self) -> &[Value] {
        &self.stack
    }
}
