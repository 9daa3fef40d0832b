//! Parsing of quantity literals into [`Quantity`] values.

use nom::{Parser as _, character::complete::multispace0, combinator::opt};

use heft_quantity::Quantity;
use heft_unit::ConversionTable;

use crate::{
    error::{ParserError, ParserErrorReason},
    token::{number, unit_symbol},
    util::{InputSpan, Result},
};

/// Parses a quantity literal: a number followed by an optional unit symbol,
/// with whitespace allowed around both.
///
/// A bare number is read in the canonical unit.
///
/// This function **may not consume the complete input**.
#[expect(
    clippy::panic_in_result_fn,
    reason = "the number grammar is a subset of the f64 grammar, so the lexeme conversion cannot fail"
)]
pub(crate) fn parse(input: InputSpan<'_>) -> Result<'_, Quantity> {
    let (rest, _) = multispace0.parse(input)?;
    let (rest, lexeme) = number(rest)?;

    let magnitude = lexeme
        .parse::<f64>()
        .expect("all parsed number lexemes should convert to f64");

    let (rest, _) = multispace0.parse(rest)?;
    let (rest, symbol) = opt(unit_symbol).parse(rest)?;
    let (rest, _) = multispace0.parse(rest)?;

    let quantity = match symbol {
        Some(symbol_span) => {
            let unit = ConversionTable::global()
                .resolve(symbol_span.fragment())
                .map_err(|_| {
                    nom::Err::Failure(ParserError::new(
                        symbol_span,
                        ParserErrorReason::UnknownUnit(symbol_span.fragment().to_string()),
                    ))
                })?;
            Quantity::new(magnitude, unit)
        }
        None => Quantity::canonical(magnitude),
    };

    Ok((rest, quantity))
}
