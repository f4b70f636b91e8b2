//! Text Input Parsing
//!
//! The page keeps rate and hours as raw text. These helpers turn that text
//! into whole numbers and say why when they can't.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a whole number")]
    NotAnInteger,
    #[error("value is too large")]
    Overflow,
}

/// Parse a base-10 non-negative whole number.
///
/// Surrounding whitespace and a leading `+` are accepted. Anything else that
/// is not an ASCII digit (decimal separators, exponents, trailing text) is
/// rejected instead of being truncated.
pub fn parse_whole_number(input: &str) -> Result<u32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return if is_digits(rest) {
            Err(ParseError::Negative)
        } else {
            Err(ParseError::NotAnInteger)
        };
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !is_digits(digits) {
        return Err(ParseError::NotAnInteger);
    }

    digits.parse::<u32>().map_err(|_| ParseError::Overflow)
}

/// Hours typed for a pending feature
pub fn parse_hours(input: &str) -> Result<u32, ParseError> {
    parse_whole_number(input)
}

/// Hourly rate typed in the header
pub fn parse_rate(input: &str) -> Result<u32, ParseError> {
    parse_whole_number(input)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
