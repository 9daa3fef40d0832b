//! Parser for quantity literals like `20 kg` or `-3.5lb`.

use heft_quantity::Quantity;

pub mod error;
mod quantity;
mod token;
mod util;

use error::{ParserError, ParserErrorReason};
use util::InputSpan;

/// Parses a quantity literal from source text.
///
/// A literal is a number with an optional unit symbol (`20 kg`, `-3.5lb`,
/// `44`); a bare number is read in the canonical unit. Whitespace is
/// allowed around the number and the symbol.
///
/// This function **fails if the complete input is not consumed**.
///
/// # Errors
///
/// Returns an error if the input is not a valid quantity literal, names a
/// unit that is not in the conversion table, or has trailing input.
pub fn parse_quantity(input: &str) -> Result<Quantity, ParserError> {
    let span = InputSpan::new(input);

    let (rest, quantity) = quantity::parse(span).map_err(|error| match error {
        nom::Err::Error(error) | nom::Err::Failure(error) => error,
        // complete parsers do not produce Incomplete
        nom::Err::Incomplete(_) => ParserError::new(span, ParserErrorReason::ExpectNumber),
    })?;

    if !rest.fragment().is_empty() {
        return Err(ParserError::new(rest, ParserErrorReason::TrailingInput));
    }

    Ok(quantity)
}
