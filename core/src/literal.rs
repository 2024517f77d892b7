//! Typing of Symbol text.
//!
//! A symbol becomes the first literal kind that accepts it, tried in the order
//! date, integer, float, boolean. Anything else is an identifier, resolved
//! later against a scope.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::interner::Name;
use crate::variant::Variant;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{4}-\d{1,2}-\d{1,2}(?:T.+)?|\d{1,2}/\d{1,2}/\d{4}|\d{4}/\d{1,2}/\d{1,2})$")
        .expect("date shape pattern is valid")
});

static INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[+-]?(?:0[xX](?:_?[0-9a-fA-F])+|0[bB](?:_?[01])+|0[oO](?:_?[0-7])+|0(?:_?[0-7])*|[1-9](?:_?[0-9])*)$",
    )
    .expect("integer pattern is valid")
});

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

// Slashed dates are month-first.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

const TRUE_WORDS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_WORDS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Classify symbol text into a literal variant or an identifier.
pub fn classify(text: &str) -> Variant {
    if let Some(d) = parse_date(text) {
        Variant::Date(d)
    } else if let Some(n) = parse_integer(text) {
        Variant::Int(n)
    } else if let Some(x) = parse_float(text) {
        Variant::Float(x)
    } else if let Some(b) = parse_bool(text) {
        Variant::Bool(b)
    } else {
        Variant::Identifier(Name::new(text))
    }
}

/// Calendar dates and timestamps. Naive timestamps are taken as UTC.
pub fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    if !DATE_SHAPE.is_match(text) {
        return None;
    }

    if let Ok(d) = DateTime::parse_from_rfc3339(text) {
        return Some(d);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// Integers with optional sign, `0x`/`0o`/`0b` prefixes, legacy leading-zero
/// octal and `_` digit separators. Values outside i64 are rejected.
pub fn parse_integer(text: &str) -> Option<i64> {
    if !INTEGER.is_match(text) {
        return None;
    }

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Some(0);
    }

    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// `1 t T TRUE true True` and `0 f F FALSE false False`
pub fn parse_bool(text: &str) -> Option<bool> {
    if TRUE_WORDS.contains(&text) {
        Some(true)
    } else if FALSE_WORDS.contains(&text) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_order() {
        assert!(matches!(classify("11/11/1974"), Variant::Date(_)));
        assert_eq!(classify("1"), Variant::Int(1));
        assert_eq!(classify("2.0"), Variant::Float(2.0));
        assert_eq!(classify("t"), Variant::Bool(true));
        assert_eq!(classify("today"), Variant::Identifier(Name::new("today")));
        assert_eq!(classify("+"), Variant::Identifier(Name::new("+")));
    }

    #[test]
    fn test_dates() {
        let rendered = |text: &str| parse_date(text).map(|d| Variant::Date(d).to_string());
        assert_eq!(rendered("11/11/1974"), Some("1974-11-11T00:00:00Z".to_string()));
        assert_eq!(rendered("1974-11-11"), Some("1974-11-11T00:00:00Z".to_string()));
        assert_eq!(rendered("2020/02/29"), Some("2020-02-29T00:00:00Z".to_string()));
        assert_eq!(
            rendered("2021-06-01T12:30:00"),
            Some("2021-06-01T12:30:00Z".to_string())
        );
        assert_eq!(
            rendered("2021-06-01T12:30:00+02:00"),
            Some("2021-06-01T12:30:00+02:00".to_string())
        );
    }

    #[test]
    fn test_non_dates() {
        assert_eq!(parse_date("1974"), None);
        assert_eq!(parse_date("20140601"), None);
        assert_eq!(parse_date("13/45/2020"), None);
        assert_eq!(parse_date("1-2-3"), None);
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-17"), Some(-17));
        assert_eq!(parse_integer("+5"), Some(5));
        assert_eq!(parse_integer("0x1F"), Some(31));
        assert_eq!(parse_integer("0b101"), Some(5));
        assert_eq!(parse_integer("0o17"), Some(15));
        assert_eq!(parse_integer("017"), Some(15));
        assert_eq!(parse_integer("1_000_000"), Some(1_000_000));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_rejected_integers() {
        assert_eq!(parse_integer("9223372036854775808"), None);
        assert_eq!(parse_integer("08"), None);
        assert_eq!(parse_integer("1__0"), None);
        assert_eq!(parse_integer("123x"), None);
        assert_eq!(parse_integer("2.0"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_overflowing_integer_becomes_float() {
        assert_eq!(
            classify("9223372036854775808"),
            Variant::Float(9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_float("3.1415"), Some(3.1415));
        assert_eq!(parse_float("1e-3"), Some(0.001));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("pi"), None);
    }

    #[test]
    fn test_bools() {
        for word in ["t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(word), Some(true), "{word}");
        }
        for word in ["f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(word), Some(false), "{word}");
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
    }
}
