//! Byte I/O buffers
//!
//! The machine performs no blocking I/O: input is an in-memory byte queue
//! populated before the run begins, and output is an append-only byte
//! buffer readable at any time, including mid-run. End of input is a
//! sentinel condition (the `In` primitive returns its caller-supplied
//! fallback), never a suspension point.

use std::collections::VecDeque;

/// Byte queue consumed by the `In` primitive.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    bytes: VecDeque<u8>,
}

impl InputQueue {
    /// Create a queue over the given bytes, consumed front to back.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        InputQueue {
            bytes: VecDeque::from(bytes),
        }
    }

    /// Read one byte, or `None` once the queue is exhausted.
    pub fn read(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

/// Append-only output byte buffer produced by the `Out` primitive.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer { bytes: Vec::new() }
    }

    /// Append one byte.
    pub fn put(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
