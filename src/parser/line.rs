//! Read raw text and unfold it into logical lines.
//!
//! The line-break convention is detected once per buffer, then every physical
//! line starting with a space or a tab is appended (minus that first
//! character) to the line before it, as described in RFC 5545 3.1.
//!
//! # Examples
//!
//! ```rust
//! let reader = lenient_ical::LineReader::from_str("SUMMARY:Long\r\n  text\r\nUID:1\r\n");
//! let lines: Vec<_> = reader.map(|line| line.inner).collect();
//! assert_eq!(lines, vec!["SUMMARY:Long text", "UID:1", ""]);
//! ```

use std::fmt;
use std::iter::Peekable;
use std::str::Split;

/// Line-break convention of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`, tolerating lone `\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineEnding {
    /// Look at the first line feed that is not the very first character.
    pub fn detect(input: &str) -> Self {
        let bytes = input.as_bytes();
        match bytes.iter().skip(1).position(|b| *b == b'\n') {
            // `pos` is relative to the second byte, so it indexes the byte before the LF
            Some(pos) if bytes[pos] == b'\r' => Self::CrLf,
            Some(_) => Self::Lf,
            None if input.contains('\r') => Self::Cr,
            None => Self::Lf,
        }
    }

    fn separator(self) -> char {
        match self {
            Self::Lf | Self::CrLf => '\n',
            Self::Cr => '\r',
        }
    }
}

/// An unfolded line along with the number of its first physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub inner: String,
    number: usize,
}

impl Line {
    pub fn new(inner: String, number: usize) -> Self {
        Self { inner, number }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line {}: {}", self.number, self.inner)
    }
}

/// Lazy iterator over the logical lines of a buffer.
///
/// Cloning the reader restarts nothing: the clone continues from the same
/// position. Build a new reader from the buffer to scan it again.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    physical: Peekable<Split<'a, char>>,
    ending: LineEnding,
    number: usize,
}

impl<'a> LineReader<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        let ending = LineEnding::detect(input);
        LineReader {
            physical: input.split(ending.separator()).peekable(),
            ending,
            number: 0,
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    fn next_physical(&mut self) -> Option<&'a str> {
        let line = self.physical.next()?;
        self.number += 1;
        Some(strip(self.ending, line))
    }
}

fn strip(ending: LineEnding, line: &str) -> &str {
    match ending {
        LineEnding::CrLf => line.strip_suffix('\r').unwrap_or(line),
        LineEnding::Lf | LineEnding::Cr => line,
    }
}

impl Iterator for LineReader<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.next_physical()?;
        let number = self.number;
        let mut inner = first.to_owned();

        while let Some(&next) = self.physical.peek()
            && next.starts_with([' ', '\t'])
        {
            // Folding whitespace is always a single ASCII byte
            inner.push_str(strip(self.ending, &next[1..]));
            self.physical.next();
            self.number += 1;
        }

        Some(Line::new(inner, number))
    }
}
