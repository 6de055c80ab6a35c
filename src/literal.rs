//! Scalar and key literal rendering.
//!
//! Every literal is exactly one line. Text scalars escape line breaks and
//! other control characters so the line structure of the surrounding block
//! can never be corrupted by string contents, and indentation can never
//! leak into string values.

use crate::types::CompositeKey;

/// The null literal, lowercase regardless of any internal spelling.
pub fn null() -> String {
    "null".to_string()
}

/// Boolean literal.
pub fn bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Integer literal in decimal.
pub fn int(value: i64) -> String {
    value.to_string()
}

/// Float literal.
///
/// Finite floats use Rust's shortest round-trip formatting, which always
/// keeps a `.` or exponent (`1.0`, `0.5`, `1e300`) so the value stays a
/// float when re-evaluated. Non-finite values render as `NAN`, `INF`,
/// `-INF`.
pub fn float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        format!("{:?}", value)
    }
}

/// Single-quoted text literal.
///
/// Escapes the quote, the backslash, and control characters with a line or
/// column effect (`\n`, `\r`, `\t`, `\0`). All other characters pass
/// through verbatim.
pub fn text(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Key literal: integer keys bare, text keys quoted.
pub fn key(key: &CompositeKey) -> String {
    match key {
        CompositeKey::Int(i) => int(*i),
        CompositeKey::Text(s) => text(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_lowercase() {
        assert_eq!(null(), "null");
    }

    #[test]
    fn test_bool_literals() {
        assert_eq!(bool(true), "true");
        assert_eq!(bool(false), "false");
    }

    #[test]
    fn test_int_literals() {
        assert_eq!(int(0), "0");
        assert_eq!(int(-42), "-42");
        assert_eq!(int(i64::MAX), "9223372036854775807");
    }

    #[test]
    fn test_float_keeps_floatness() {
        assert_eq!(float(1.0), "1.0");
        assert_eq!(float(-0.5), "-0.5");
        assert_eq!(float(0.1), "0.1");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(float(f64::NAN), "NAN");
        assert_eq!(float(f64::INFINITY), "INF");
        assert_eq!(float(f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn test_text_plain() {
        assert_eq!(text("abc"), "'abc'");
        assert_eq!(text(""), "''");
    }

    #[test]
    fn test_text_escapes() {
        assert_eq!(text("a'b"), "'a\\'b'");
        assert_eq!(text("a\\b"), "'a\\\\b'");
        assert_eq!(text("a\nb"), "'a\\nb'");
        assert_eq!(text("a\tb"), "'a\\tb'");
    }

    #[test]
    fn test_text_is_single_line() {
        assert!(!text("line1\nline2").contains('\n'));
    }

    #[test]
    fn test_key_literals() {
        assert_eq!(key(&CompositeKey::Int(3)), "3");
        assert_eq!(key(&CompositeKey::Text("a".to_string())), "'a'");
    }
}
