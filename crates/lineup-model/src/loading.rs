// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Candidate list loader.
//!
//! Turns a line-oriented text stream into a validated `CandidatePool`. Each
//! non-empty line describes one candidate, in enumeration order:
//!
//! ```raw
//! # value  cost  label (optional, rest of the line)
//! 1.27     190   s1mple
//! 1.21     185   ZywOo
//! 0.98     120
//! ```
//!
//! Text after `#` is a comment. The label keeps its inner whitespace and is
//! trimmed at both ends. Errors carry the 1-based line number of the
//! offending input so broken files can be fixed quickly.

use crate::{
    pool::{CandidatePool, CandidatePoolBuilder, PoolError},
    selection::SELECTION_SIZE,
};
use num_traits::{PrimInt, Signed};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The error type for loading candidate lists.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A token could not be parsed into the expected numeric type.
    #[error("line {line}: could not parse token '{token}' as {expected}")]
    Parse {
        line: usize,
        token: String,
        expected: &'static str,
    },
    /// A line ended before all required fields were read.
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    /// Fewer candidates than a selection needs, with `require_full_selection` set.
    #[error("only {found} candidates loaded, at least {} are required", SELECTION_SIZE)]
    TooFewCandidates { found: usize },
    /// The parsed candidates do not form a valid pool.
    #[error("invalid candidate list: {0}")]
    InvalidPool(#[from] PoolError),
}

/// A configurable loader for candidate lists.
///
/// # Configuration
/// * `require_full_selection`: if true, inputs with fewer than
///   `SELECTION_SIZE` candidates are rejected instead of producing a pool on
///   which no selection can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateLoader<T> {
    require_full_selection: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T> CandidateLoader<T>
where
    T: PrimInt + Signed + FromStr,
{
    /// Creates a new `CandidateLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self {
            require_full_selection: false,
            _marker: std::marker::PhantomData,
        }
    }

    /// Configures whether to fail on inputs too small for a selection.
    #[inline]
    pub fn require_full_selection(mut self, yes: bool) -> Self {
        self.require_full_selection = yes;
        self
    }

    /// Loads candidates from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<CandidatePool<T>, LoadError> {
        let mut builder = CandidatePoolBuilder::new();

        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let content = match line.split_once('#') {
                Some((before, _)) => before,
                None => line.as_str(),
            }
            .trim();

            if content.is_empty() {
                continue;
            }

            let (value_token, rest) = split_token(content);
            let (cost_token, rest) = split_token(rest);

            let value: f64 = parse_token(value_token, line_no, "value", "f64")?;
            let cost: T = parse_token(cost_token, line_no, "cost", std::any::type_name::<T>())?;

            let label = rest.trim();
            if label.is_empty() {
                builder.add_candidate(value, cost);
            } else {
                builder.add_labeled_candidate(value, cost, label);
            }
        }

        if self.require_full_selection && builder.num_candidates() < SELECTION_SIZE {
            return Err(LoadError::TooFewCandidates {
                found: builder.num_candidates(),
            });
        }

        Ok(builder.build()?)
    }

    /// Loads candidates from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<CandidatePool<T>, LoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads candidates from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<CandidatePool<T>, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads candidates from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<CandidatePool<T>, LoadError> {
        self.from_bufread(s.as_bytes())
    }
}

/// Splits off the first whitespace-delimited token; the token is empty when
/// `s` holds only whitespace.
#[inline]
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

#[inline]
fn parse_token<V: FromStr>(
    token: &str,
    line: usize,
    field: &'static str,
    expected: &'static str,
) -> Result<V, LoadError> {
    if token.is_empty() {
        return Err(LoadError::MissingField { line, field });
    }
    token.parse::<V>().map_err(|_| LoadError::Parse {
        line,
        token: token.to_string(),
        expected,
    })
}
