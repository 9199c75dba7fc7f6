//! Source-to-instruction parser
//!
//! Grass source is mostly noise: only `w`, `W` and `v` carry meaning, and
//! programs published on the web often use the full-width forms `ｗ`, `Ｗ`
//! and `ｖ`. Parsing is therefore a lexical filter followed by run-length
//! extraction:
//!
//! 1. Normalize full-width look-alikes to ASCII, drop everything before the
//!    first `w` (a program must open with an arity declaration), then drop
//!    every remaining character that is not `w`, `W` or `v`.
//! 2. Split on `v` into segments and take the maximal `w`/`W` runs of each
//!    segment as a list of run lengths.
//! 3. A leading lowercase run is the arity of an enclosing abstraction; the
//!    remaining runs must pair up as (function index, argument index)
//!    applications, or the segment is malformed.

use super::ast::{Insn, Program};
use std::fmt;

/// Parser error type.
///
/// Only ever produced by [`parse`]; a loaded program can no longer fail
/// lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Zero-based index of the `v`-separated segment that failed.
    pub segment: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error in segment {}: {}",
            self.segment, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse Grass source text into a top-level instruction sequence.
///
/// Empty input (or input containing no meaningful characters) parses to an
/// empty program.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let filtered = filter_source(source);

    let mut program = Vec::new();
    for (index, segment) in filtered.split('v').enumerate() {
        parse_segment(segment, index, &mut program)?;
    }
    Ok(program)
}

/// Reduce raw source to its meaningful symbols.
///
/// Full-width `ｗ`/`Ｗ`/`ｖ` are accepted as aliases for the ASCII forms.
/// Everything before the first `w` is discarded, which conventionally lets a
/// program start with a free-text comment.
fn filter_source(source: &str) -> String {
    let normalized: String = source
        .chars()
        .map(|c| match c {
            'ｗ' => 'w',
            'Ｗ' => 'W',
            'ｖ' => 'v',
            other => other,
        })
        .collect();

    let body = match normalized.find('w') {
        Some(start) => &normalized[start..],
        None => "",
    };

    body.chars().filter(|c| matches!(c, 'w' | 'W' | 'v')).collect()
}

/// Maximal same-letter runs of a filtered segment, as (lowercase, length).
fn letter_runs(segment: &str) -> Vec<(bool, usize)> {
    let mut runs: Vec<(bool, usize)> = Vec::new();
    for c in segment.chars() {
        let lowercase = c == 'w';
        match runs.last_mut() {
            Some((last, len)) if *last == lowercase => *len += 1,
            _ => runs.push((lowercase, 1)),
        }
    }
    runs
}

/// Parse one `v`-separated segment, appending its instructions to `program`.
fn parse_segment(
    segment: &str,
    index: usize,
    program: &mut Vec<Insn>,
) -> Result<(), ParseError> {
    let runs = letter_runs(segment);

    let (arity, apps) = match runs.split_first() {
        Some(((true, arity), rest)) => (*arity, rest),
        Some(((false, _), _)) => (0, runs.as_slice()),
        None => return Ok(()), // empty segment contributes nothing
    };

    if apps.len() % 2 != 0 {
        return Err(ParseError {
            message: format!(
                "applications must pair a W-run with a w-run, but an unpaired run remains ({} runs after arity)",
                apps.len()
            ),
            segment: index,
        });
    }

    let mut body = Vec::with_capacity(apps.len() / 2);
    for pair in apps.chunks_exact(2) {
        body.push(Insn::App {
            func: pair[0].1,
            arg: pair[1].1,
        });
    }

    if arity == 0 {
        program.extend(body);
    } else {
        program.push(Insn::Abs { arity, body });
    }
    Ok(())
}
