//! Literal quantity parser: `"100 kPa"`, `"1m"`, `"-2.5e3 Nm3/h"`

use pest::error::{ErrorVariant, LineColLocation};
use pest::Parser;
use pest_derive::Parser;
use zunits_core::UnitError;

#[derive(Parser)]
#[grammar = "quantity.pest"]
struct QuantityParser;

/// Split a literal into its number and optional unit symbol
///
/// The unit is returned as written; resolving it against a dimension is the
/// caller's job.
pub fn parse_quantity(input: &str) -> Result<(f64, Option<&str>), UnitError> {
    let text = input.trim();
    let pair = QuantityParser::parse(Rule::quantity, text)
        .map_err(|e| UnitError::parse(input, describe(&e)))?
        .next()
        .ok_or_else(|| UnitError::parse(input, "empty input"))?;

    let mut value = None;
    let mut unit = None;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::number => {
                let number = part.as_str().parse::<f64>()
                    .map_err(|e| UnitError::parse(input, e.to_string()))?;
                if !number.is_finite() {
                    return Err(UnitError::parse(input, "number is out of range"));
                }
                value = Some(number);
            }
            Rule::unit => unit = Some(part.as_str()),
            _ => {}
        }
    }

    let value = value.ok_or_else(|| UnitError::parse(input, "expected a number"))?;
    Ok((value, unit))
}

fn describe(error: &pest::error::Error<Rule>) -> String {
    let column = match error.line_col {
        LineColLocation::Pos((_, col)) => col,
        LineColLocation::Span((_, col), _) => col,
    };
    match &error.variant {
        ErrorVariant::ParsingError { positives, .. } if positives.contains(&Rule::number) => {
            format!("expected a number at column {}", column)
        }
        _ => format!("unexpected character at column {}", column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_unit() {
        assert_eq!(parse_quantity("100 kPa").unwrap(), (100.0, Some("kPa")));
        assert_eq!(parse_quantity("1m").unwrap(), (1.0, Some("m")));
        assert_eq!(parse_quantity("100C").unwrap(), (100.0, Some("C")));
        assert_eq!(parse_quantity("  15\tpsi ").unwrap(), (15.0, Some("psi")));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_quantity("-3.5 C").unwrap(), (-3.5, Some("C")));
        assert_eq!(parse_quantity("+2").unwrap(), (2.0, None));
        assert_eq!(parse_quantity(".5 bar").unwrap(), (0.5, Some("bar")));
        assert_eq!(parse_quantity("2.5e-3 kmol").unwrap(), (2.5e-3, Some("kmol")));
        assert_eq!(parse_quantity("1E3m").unwrap(), (1e3, Some("m")));
    }

    #[test]
    fn test_exponent_marker_without_digits_starts_the_unit() {
        assert_eq!(parse_quantity("5em").unwrap(), (5.0, Some("em")));
    }

    #[test]
    fn test_compound_symbols() {
        assert_eq!(parse_quantity("100 kJ/(kmol*C)").unwrap(), (100.0, Some("kJ/(kmol*C)")));
        assert_eq!(parse_quantity("3 Nm³/h").unwrap(), (3.0, Some("Nm³/h")));
        assert_eq!(parse_quantity("12%").unwrap(), (12.0, Some("%")));
        assert_eq!(parse_quantity("20 °C").unwrap(), (20.0, Some("°C")));
        assert_eq!(parse_quantity("7 kgf/cm2_g").unwrap(), (7.0, Some("kgf/cm2_g")));
    }

    #[test]
    fn test_missing_number() {
        for input in ["", "kPa", "abc", "- 5"] {
            assert!(matches!(parse_quantity(input), Err(UnitError::Parse { .. })), "{:?}", input);
        }
    }

    #[test]
    fn test_out_of_range_number() {
        for input in ["1e400 m", "-1e400", "1e309Pa"] {
            match parse_quantity(input) {
                Err(UnitError::Parse { reason, .. }) => assert_eq!(reason, "number is out of range"),
                other => panic!("unexpected {:?} for {:?}", other, input),
            }
        }
        assert_eq!(parse_quantity("1e300 m").unwrap(), (1e300, Some("m")));
    }

    #[test]
    fn test_trailing_garbage() {
        let err = parse_quantity("100 k$Pa").unwrap_err();
        assert!(matches!(err, UnitError::Parse { .. }));
        assert!(parse_quantity("1 m m").is_err());
    }

    #[test]
    fn test_error_keeps_input() {
        match parse_quantity("kPa") {
            Err(UnitError::Parse { input, .. }) => assert_eq!(input, "kPa"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
