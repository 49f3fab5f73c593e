//! Lenient number parsing with browser semantics.
//!
//! Control values arrive as strings from input widgets. They are parsed the
//! way a browser's `parseInt` / `parseFloat` would parse them: the longest
//! valid prefix wins and an input with no valid prefix becomes `NaN` instead
//! of an error. `NaN` is carried through to the generated CSS text unchanged.

use std::fmt;

/// Result of a lenient integer parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedInt {
    Int(i64),
    NaN,
}

impl From<i64> for ParsedInt {
    fn from(value: i64) -> Self {
        ParsedInt::Int(value)
    }
}

impl From<i32> for ParsedInt {
    fn from(value: i32) -> Self {
        ParsedInt::Int(value.into())
    }
}

impl fmt::Display for ParsedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedInt::Int(value) => write!(f, "{value}"),
            ParsedInt::NaN => f.write_str("NaN"),
        }
    }
}

fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn strip_hex_prefix(digits: &str) -> Option<&str> {
    digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
}

/// `parseInt(input)`: base 10, or base 16 when the digits start with `0x`.
pub fn parse_int(input: &str) -> ParsedInt {
    parse_int_radix(input, 0)
}

/// `parseInt(input, radix)`.
///
/// A radix of `0` selects base 10 unless the digits carry a `0x` prefix.
/// Radixes outside `2..=36` yield `NaN`. Values past the `i64` range
/// saturate.
pub fn parse_int_radix(input: &str, radix: u32) -> ParsedInt {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let (radix, digits) = match (radix, strip_hex_prefix(unsigned)) {
        (0 | 16, Some(rest)) => (16, rest),
        (0, None) => (10, unsigned),
        (radix, _) if (2..=36).contains(&radix) => (radix, unsigned),
        _ => return ParsedInt::NaN,
    };

    let mut value: i64 = 0;
    let mut digit_count = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
        digit_count += 1;
    }

    match (digit_count, negative) {
        (0, _) => ParsedInt::NaN,
        (_, true) => ParsedInt::Int(value.saturating_neg()),
        (_, false) => ParsedInt::Int(value),
    }
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}

/// `parseFloat(input)`.
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(bytes, end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(bytes, end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits(bytes, end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// `value.toFixed(1)`.
///
/// Exact ties round away from zero (`0.25` → `0.3`). Everything else is the
/// correctly rounded one-decimal form of the stored binary value, so `0.35`
/// (stored just below the tie) becomes `0.3`.
pub fn to_fixed_one(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{value:e}").replacen('e', "e+", 1);
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // Ties at the first decimal are exactly the odd multiples of 0.25.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        let tenths = (value.abs() * 10.0).ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }

    format!("{value:.1}")
}
