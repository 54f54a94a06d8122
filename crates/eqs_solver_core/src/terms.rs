//! Term extraction: decompose one side of an equation into signed terms and
//! accumulate their coefficients per power of `x`.
//!
//! A side is split before every `+`/`-` (a leading term has an implicit `+`).
//! Each chunk must then match
//!
//! ```text
//! term   := sign? number? ( '*'? marker )?
//! marker := "x^2" | "x²" | "x"
//! ```
//!
//! with a number required when no marker is present. A chunk that does not
//! match is reported as [`SolveError::MalformedTerm`]; nothing is dropped
//! silently.

use std::ops::{Add, Sub};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize, value},
    sequence::{pair, tuple},
    IResult,
};

use crate::error::SolveError;

/// Power of the variable a term is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Power {
    Constant = 0,
    Linear = 1,
    Quadratic = 2,
}

/// One signed term of a side: `coefficient · x^power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub power: Power,
}

/// Accumulated `(a, b, c)` of `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients {
    pub quadratic: f64,
    pub linear: f64,
    pub constant: f64,
}

impl Coefficients {
    pub fn get(&self, power: Power) -> f64 {
        match power {
            Power::Constant => self.constant,
            Power::Linear => self.linear,
            Power::Quadratic => self.quadratic,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.quadratic.is_finite() && self.linear.is_finite() && self.constant.is_finite()
    }

    fn accumulate(&mut self, term: Term) {
        match term.power {
            Power::Constant => self.constant += term.coefficient,
            Power::Linear => self.linear += term.coefficient,
            Power::Quadratic => self.quadratic += term.coefficient,
        }
    }
}

impl Add for Coefficients {
    type Output = Coefficients;

    fn add(self, rhs: Coefficients) -> Coefficients {
        Coefficients {
            quadratic: self.quadratic + rhs.quadratic,
            linear: self.linear + rhs.linear,
            constant: self.constant + rhs.constant,
        }
    }
}

impl Sub for Coefficients {
    type Output = Coefficients;

    fn sub(self, rhs: Coefficients) -> Coefficients {
        Coefficients {
            quadratic: self.quadratic - rhs.quadratic,
            linear: self.linear - rhs.linear,
            constant: self.constant - rhs.constant,
        }
    }
}

/// Split a side into chunks, each starting at a sign character or at 0.
pub fn split_terms(side: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (idx, ch) in side.char_indices() {
        if (ch == '+' || ch == '-') && idx > start {
            chunks.push(&side[start..idx]);
            start = idx;
        }
    }
    if start < side.len() {
        chunks.push(&side[start..]);
    }
    chunks
}

/// Unsigned decimal literal: `12`, `1.5`, `2.`, `.5`.
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    )))(input)
}

fn power_marker(input: &str) -> IResult<&str, Power> {
    alt((
        value(Power::Quadratic, alt((tag("x^2"), tag("x²")))),
        value(Power::Linear, tag("x")),
    ))(input)
}

type TermParts<'a> = (Option<char>, Option<&'a str>, Option<(Option<char>, Power)>);

fn term_parts(input: &str) -> IResult<&str, TermParts<'_>> {
    all_consuming(tuple((
        opt(one_of("+-")),
        opt(decimal),
        opt(pair(opt(char('*')), power_marker)),
    )))(input)
}

/// Parse a single chunk produced by [`split_terms`].
pub fn parse_term(chunk: &str) -> Result<Term, SolveError> {
    let malformed = || SolveError::MalformedTerm(chunk.to_string());

    let (_, (sign, digits, marker)) = term_parts(chunk).map_err(|_| malformed())?;

    let (power, magnitude) = match (digits, marker) {
        (Some(digits), None) => (Power::Constant, digits),
        (None, None) => return Err(malformed()),
        // `*x` needs something to multiply.
        (None, Some((Some(_), _))) => return Err(malformed()),
        (None, Some((None, power))) => (power, "1"),
        (Some(digits), Some((_, power))) => (power, digits),
    };

    let magnitude: f64 = magnitude.parse().map_err(|_| malformed())?;
    if !magnitude.is_finite() {
        return Err(malformed());
    }
    let coefficient = if sign == Some('-') {
        -magnitude
    } else {
        magnitude
    };

    Ok(Term { coefficient, power })
}

/// Accumulate the coefficients of every term of one side.
pub fn extract_side(side: &str) -> Result<Coefficients, SolveError> {
    let mut coeffs = Coefficients::default();
    for chunk in split_terms(side) {
        let term = parse_term(chunk)?;
        tracing::trace!(chunk, coefficient = term.coefficient, power = ?term.power, "term");
        coeffs.accumulate(term);
    }
    Ok(coeffs)
}

/// Coefficient of a single power on one side.
pub fn extract_power(side: &str, power: Power) -> Result<f64, SolveError> {
    Ok(extract_side(side)?.get(power))
}

/// Move everything to the left: coefficients of `left - right = 0`.
///
/// Sums that overflow `f64` are rejected as a format error.
pub fn extract_standard_form(left: &str, right: &str) -> Result<Coefficients, SolveError> {
    let coeffs = extract_side(left)? - extract_side(right)?;
    if !coeffs.is_finite() {
        return Err(SolveError::Format("coefficient out of range".to_string()));
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_before_signs() {
        assert_eq!(split_terms("2x+5-3"), vec!["2x", "+5", "-3"]);
        assert_eq!(split_terms("-x^2+x"), vec!["-x^2", "+x"]);
        assert_eq!(split_terms("7"), vec!["7"]);
    }

    #[test]
    fn implicit_unit_coefficients() {
        assert_eq!(parse_term("x").unwrap().coefficient, 1.0);
        assert_eq!(parse_term("+x").unwrap().coefficient, 1.0);
        assert_eq!(parse_term("-x").unwrap().coefficient, -1.0);
        let t = parse_term("-x^2").unwrap();
        assert_eq!(t.power, Power::Quadratic);
        assert_eq!(t.coefficient, -1.0);
    }

    #[test]
    fn parses_decimals_and_explicit_product() {
        let t = parse_term("-2.5x").unwrap();
        assert_eq!((t.coefficient, t.power), (-2.5, Power::Linear));
        let t = parse_term("3*x^2").unwrap();
        assert_eq!((t.coefficient, t.power), (3.0, Power::Quadratic));
        let t = parse_term("4x²").unwrap();
        assert_eq!((t.coefficient, t.power), (4.0, Power::Quadratic));
        let t = parse_term(".5").unwrap();
        assert_eq!((t.coefficient, t.power), (0.5, Power::Constant));
    }

    #[test]
    fn rejects_unparsable_chunks() {
        for chunk in ["x^3", "-", "+", "2y", "*x", "x2", "2..5", "(x+1)"] {
            assert_eq!(
                parse_term(chunk),
                Err(SolveError::MalformedTerm(chunk.to_string())),
                "chunk {chunk}"
            );
        }
    }

    #[test]
    fn rejects_magnitudes_beyond_f64() {
        let big = "9".repeat(400);
        for chunk in [big.clone(), format!("-{big}x"), format!("{big}x^2")] {
            assert_eq!(
                parse_term(&chunk),
                Err(SolveError::MalformedTerm(chunk.clone()))
            );
        }
    }

    #[test]
    fn overflowing_sums_are_out_of_range() {
        let near_max = "1".to_string() + &"0".repeat(308);
        let left = format!("{near_max}x+{near_max}x");
        assert_eq!(
            extract_standard_form(&left, "1"),
            Err(SolveError::Format("coefficient out of range".to_string()))
        );
    }

    #[test]
    fn accumulates_equal_powers() {
        let c = extract_side("x^2+2x-3x+4-1").unwrap();
        assert_eq!(c.quadratic, 1.0);
        assert_eq!(c.linear, -1.0);
        assert_eq!(c.constant, 3.0);
        assert_eq!(extract_power("x^2+2x-3x+4-1", Power::Linear).unwrap(), -1.0);
    }

    #[test]
    fn standard_form_subtracts_right_side() {
        let c = extract_standard_form("2x+5", "13").unwrap();
        assert_eq!(c.linear, 2.0);
        assert_eq!(c.constant, -8.0);

        let c = extract_standard_form("x^2", "-3x+2").unwrap();
        assert_eq!((c.quadratic, c.linear, c.constant), (1.0, 3.0, -2.0));
    }
}
