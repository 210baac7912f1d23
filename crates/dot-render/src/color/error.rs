//! Hex color parse failures.

use std::fmt;

/// What was wrong with a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorErrorKind {
    /// Number of digits after the optional `#` (expected 3 or 6)
    DigitCount(usize),
    /// First character that is not `0-9`, `a-f` or `A-F`
    NotHexDigit(char),
}

/// A string that is not a `#rgb` or `#rrggbb` color.
///
/// Keeps the rejected input so callers can report it as given.
///
/// ```
/// use dot_render::{ColorErrorKind, Rgb};
///
/// let err = "#12345".parse::<Rgb>().unwrap_err();
/// assert_eq!(err.kind(), ColorErrorKind::DigitCount(5));
/// assert_eq!(
///     err.to_string(),
///     "\"#12345\" is not a hex color: expected 3 or 6 digits, found 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
    kind: ColorErrorKind,
}

impl ParseColorError {
    pub(crate) fn new(input: &str, kind: ColorErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The string that failed to parse, with surrounding whitespace removed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> ColorErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a hex color: ", self.input)?;
        match self.kind {
            ColorErrorKind::DigitCount(found) => {
                write!(f, "expected 3 or 6 digits, found {}", found)
            }
            ColorErrorKind::NotHexDigit(c) => write!(f, "{:?} is not a hex digit", c),
        }
    }
}

impl std::error::Error for ParseColorError {}
