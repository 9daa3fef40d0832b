//! Error handling for the quantity literal parser.

use std::{error, fmt};

use nom::error::{ErrorKind, ParseError};

use crate::util::InputSpan;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    /// The byte offset in the input where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    pub(crate) fn new(input: InputSpan<'_>, reason: ParserErrorReason) -> Self {
        Self {
            error_offset: input.location_offset(),
            reason,
        }
    }
}

/// The reason a quantity literal failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// The input does not start with a number
    ExpectNumber,
    /// A decimal point with no digits after it
    InvalidDecimalPart,
    /// An exponent marker with no digits after it
    InvalidExponentPart,
    /// Input remained after the quantity literal
    TrailingInput,
    /// The unit symbol is not a key in the conversion table
    UnknownUnit(String),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.error_offset;
        match &self.reason {
            ParserErrorReason::ExpectNumber => {
                write!(f, "expected a number at offset {offset}")
            }
            ParserErrorReason::InvalidDecimalPart => {
                write!(f, "expected digits after the decimal point at offset {offset}")
            }
            ParserErrorReason::InvalidExponentPart => {
                write!(f, "expected digits after the exponent marker at offset {offset}")
            }
            ParserErrorReason::TrailingInput => {
                write!(f, "unexpected trailing input at offset {offset}")
            }
            ParserErrorReason::UnknownUnit(symbol) => {
                write!(f, "unknown unit '{symbol}' at offset {offset}")
            }
        }
    }
}

impl error::Error for ParserError {}

impl<'a> ParseError<InputSpan<'a>> for ParserError {
    /// The only parsers that fail through nom's own error plumbing are the
    /// ones at the start of a number, so the generic conversion reports an
    /// expected number. Everything past that point raises a specific
    /// reason explicitly.
    fn from_error_kind(input: InputSpan<'a>, _kind: ErrorKind) -> Self {
        Self::new(input, ParserErrorReason::ExpectNumber)
    }

    fn append(_input: InputSpan<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
