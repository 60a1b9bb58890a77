//! Text rendering of quantities
//!
//! A format token is `[.N][u|uq|up]`:
//! - empty: value only
//! - `u` or `uq`: value and quick unit (`100 kJ/kmol-C`)
//! - `up`: value and defining expression (`100 kJ/(kmol*C)`)
//!
//! `.N` fixes N decimals; without it the value uses default float rendering.

use std::str::FromStr;
use zunits_core::UnitError;
use crate::unit::{Unit, UnitStyle};

/// A parsed format token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub precision: Option<usize>,
    /// `None` renders the value only
    pub style: Option<UnitStyle>,
}

impl FormatSpec {
    pub fn value_only() -> Self {
        Self::default()
    }

    pub fn quick() -> Self {
        FormatSpec { precision: None, style: Some(UnitStyle::Quick) }
    }

    pub fn expression() -> Self {
        FormatSpec { precision: None, style: Some(UnitStyle::Expression) }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Render `value` in `unit`
    pub fn render(&self, value: f64, unit: &Unit) -> String {
        let number = match self.precision {
            Some(p) => format!("{:.*}", p, value),
            None => format!("{}", value),
        };
        match self.style {
            Some(style) if !unit.symbol.is_empty() => format!("{} {}", number, unit.styled(style)),
            _ => number,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = UnitError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || UnitError::InvalidFormat(token.to_string());

        let (precision, rest) = match token.strip_prefix('.') {
            Some(tail) => {
                let digits = tail.chars().take_while(|c| c.is_ascii_digit()).count();
                if digits == 0 {
                    return Err(invalid());
                }
                let precision = tail[..digits].parse::<usize>().map_err(|_| invalid())?;
                (Some(precision), &tail[digits..])
            }
            None => (None, token),
        };

        let style = match rest {
            "" => None,
            "u" | "uq" => Some(UnitStyle::Quick),
            "up" => Some(UnitStyle::Expression),
            _ => return Err(invalid()),
        };
        Ok(FormatSpec { precision, style })
    }
}
