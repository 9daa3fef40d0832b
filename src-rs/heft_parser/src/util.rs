use nom::IResult;
use nom_locate::LocatedSpan;

use crate::error::ParserError;

/// A span of text in the input string.
///
/// The span tracks the byte offset into the original input, which is used
/// to report error positions.
pub(crate) type InputSpan<'a> = LocatedSpan<&'a str>;

/// A result type for parser operations.
pub(crate) type Result<'a, O> = IResult<InputSpan<'a>, O, ParserError>;
