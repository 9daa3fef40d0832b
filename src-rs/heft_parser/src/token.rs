//! Token-level parsers for quantity literals.

use nom::{
    Parser as _,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, digit1, one_of},
    combinator::opt,
};

use crate::{
    error::{ParserError, ParserErrorReason},
    util::{InputSpan, Result},
};

/// Parses a number literal, supporting optional sign, decimal, and exponent.
///
/// The accepted grammar is a subset of the grammar documented for
/// `f64::from_str`, so the returned lexeme can always be converted with
/// `parse::<f64>()`.
///
/// The parser handles the following number formats:
/// - Integers: `42`, `-17`, `+123`
/// - Decimals: `3.1415`, `-2.5`, `+0.1`
/// - Exponents: `2.5e10`, `-1.2E-3`, `1e+5`
pub(crate) fn number(input: InputSpan<'_>) -> Result<'_, &str> {
    let start = input;

    // Optional sign (+ or -) at the beginning
    let (rest, _) = opt(one_of("+-")).parse(input)?;

    // Required sequence of digits
    let (rest, _) = digit1(rest)?;

    // Optional decimal part (e.g. ".1415")
    let (rest, decimal_point) = opt(tag(".")).parse(rest)?;
    let rest = match decimal_point {
        Some(decimal_point_span) => {
            let (rest, _) = digit1(rest).map_err(|_: nom::Err<ParserError>| {
                nom::Err::Failure(ParserError::new(
                    decimal_point_span,
                    ParserErrorReason::InvalidDecimalPart,
                ))
            })?;
            rest
        }
        None => rest,
    };

    // Optional exponent part (e.g. "e10", "E-3")
    let (rest, exponent_marker) = opt(alt((tag("e"), tag("E")))).parse(rest)?;
    let rest = match exponent_marker {
        Some(marker_span) => {
            let (rest, _) = opt(one_of("+-")).parse(rest)?;
            let (rest, _) = digit1(rest).map_err(|_: nom::Err<ParserError>| {
                nom::Err::Failure(ParserError::new(
                    marker_span,
                    ParserErrorReason::InvalidExponentPart,
                ))
            })?;
            rest
        }
        None => rest,
    };

    let consumed = rest.location_offset() - start.location_offset();
    let lexeme = &start.fragment()[..consumed];

    Ok((rest, lexeme))
}

/// Parses a unit symbol: a run of alphabetic characters.
///
/// The symbol is not checked against the conversion table here; resolution
/// (and the unknown-unit error) happens in the quantity parser, which has
/// the span needed for error reporting.
pub(crate) fn unit_symbol(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    alpha1(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        // Success cases
        #[test]
        fn test_integer() {
            let input = InputSpan::new("42 rest");
            let (rest, lexeme) = number(input).expect("should parse integer");
            assert_eq!(lexeme, "42");
            assert_eq!(rest.fragment(), &" rest");
        }

        #[test]
        fn test_negative_integer() {
            let input = InputSpan::new("-17");
            let (_, lexeme) = number(input).expect("should parse negative integer");
            assert_eq!(lexeme, "-17");
        }

        #[test]
        fn test_decimal() {
            let input = InputSpan::new("3.1415");
            let (_, lexeme) = number(input).expect("should parse decimal");
            assert_eq!(lexeme, "3.1415");
        }

        #[test]
        fn test_exponent() {
            let input = InputSpan::new("2.5e10");
            let (_, lexeme) = number(input).expect("should parse exponent");
            assert_eq!(lexeme, "2.5e10");
        }

        #[test]
        fn test_negative_exponent() {
            let input = InputSpan::new("-1.2E-3");
            let (_, lexeme) = number(input).expect("should parse negative exponent");
            assert_eq!(lexeme, "-1.2E-3");
        }

        #[test]
        fn test_stops_at_letters() {
            let input = InputSpan::new("123kg");
            let (rest, lexeme) = number(input).expect("should parse digits only");
            assert_eq!(lexeme, "123");
            assert_eq!(rest.fragment(), &"kg");
        }

        #[test]
        fn test_second_decimal_point_is_not_consumed() {
            let input = InputSpan::new("123.456.789");
            let (rest, lexeme) = number(input).expect("should parse first decimal part");
            assert_eq!(lexeme, "123.456");
            assert_eq!(rest.fragment(), &".789");
        }

        #[test]
        fn test_lexeme_converts_to_f64() {
            let input = InputSpan::new("-1.25e2");
            let (_, lexeme) = number(input).expect("should parse number");
            let value = lexeme.parse::<f64>().expect("lexeme should be a valid f64");
            assert!((value + 125.0).abs() < f64::EPSILON);
        }

        // Error cases
        #[test]
        fn test_empty_input() {
            let input = InputSpan::new("");
            let res = number(input);
            match res {
                Err(nom::Err::Error(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::ExpectNumber);
                }
                _ => panic!("expected ExpectNumber, got {res:?}"),
            }
        }

        #[test]
        fn test_letters_only() {
            let input = InputSpan::new("abc");
            let res = number(input);
            match res {
                Err(nom::Err::Error(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::ExpectNumber);
                    assert_eq!(error.error_offset, 0);
                }
                _ => panic!("expected ExpectNumber, got {res:?}"),
            }
        }

        #[test]
        fn test_sign_only() {
            let input = InputSpan::new("+-");
            let res = number(input);
            match res {
                Err(nom::Err::Error(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::ExpectNumber);
                }
                _ => panic!("expected ExpectNumber, got {res:?}"),
            }
        }

        #[test]
        fn test_decimal_without_digits() {
            let input = InputSpan::new("123.");
            let res = number(input);
            match res {
                Err(nom::Err::Failure(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::InvalidDecimalPart);
                    assert_eq!(error.error_offset, 3);
                }
                _ => panic!("expected InvalidDecimalPart, got {res:?}"),
            }
        }

        #[test]
        fn test_exponent_without_digits() {
            let input = InputSpan::new("123e");
            let res = number(input);
            match res {
                Err(nom::Err::Failure(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::InvalidExponentPart);
                    assert_eq!(error.error_offset, 3);
                }
                _ => panic!("expected InvalidExponentPart, got {res:?}"),
            }
        }

        #[test]
        fn test_exponent_with_sign_only() {
            let input = InputSpan::new("123e+");
            let res = number(input);
            match res {
                Err(nom::Err::Failure(error)) => {
                    assert_eq!(error.reason, ParserErrorReason::InvalidExponentPart);
                }
                _ => panic!("expected InvalidExponentPart, got {res:?}"),
            }
        }
    }

    mod unit_symbol_tests {
        use super::*;

        #[test]
        fn test_symbol() {
            let input = InputSpan::new("kg rest");
            let (rest, symbol) = unit_symbol(input).expect("should parse symbol");
            assert_eq!(symbol.fragment(), &"kg");
            assert_eq!(rest.fragment(), &" rest");
        }

        #[test]
        fn test_stops_at_digits() {
            let input = InputSpan::new("lb2");
            let (rest, symbol) = unit_symbol(input).expect("should parse symbol");
            assert_eq!(symbol.fragment(), &"lb");
            assert_eq!(rest.fragment(), &"2");
        }

        #[test]
        fn test_empty_input() {
            let input = InputSpan::new("");
            assert!(unit_symbol(input).is_err(), "should fail on empty input");
        }
    }
}
