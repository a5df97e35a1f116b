//! Parsing of the free-text amount field.

use serde::{Deserialize, Serialize};

/// How the amount field is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountParsing {
    /// Integer-prefix semantics: leading whitespace and an optional sign,
    /// then as many digits as are present. `"100.9"` reads as `100`,
    /// `"25 rub"` as `25`. A `0x` prefix switches to hexadecimal, so `"0x10"`
    /// reads as `16`.
    #[default]
    Lenient,
    /// The whole trimmed field must be a decimal integer.
    Strict,
}

/// Parse the raw amount text. Positivity is checked by the caller.
///
/// Returns `None` when no integer can be read or it does not fit in `i64`.
pub fn parse_amount(input: &str, mode: AmountParsing) -> Option<i64> {
    match mode {
        AmountParsing::Strict => input.trim().parse().ok(),
        AmountParsing::Lenient => parse_integer_prefix(input),
    }
}

fn parse_integer_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
