//! Lenient attribute value parsing.
//!
//! Attribute values are strings. Numeric attributes are read by their leading
//! integer: leading whitespace and a sign are accepted, anything after the
//! digits is ignored (`"12px"` reads as 12). A value with no leading digits is
//! treated as absent. None of these functions can fail; callers always get a
//! usable value back.

/// Read the leading integer of an attribute value.
///
/// Returns None when there are no leading digits or the number overflows.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Strictly positive integer, or `default`.
///
/// Zero, negatives, non-numeric and out-of-range values all fall back.
pub fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(leading_int)
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(default)
}

/// Non-negative integer, or `default`.
pub fn non_negative_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(leading_int)
        .filter(|&n| n >= 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(default)
}

/// Non-empty string, or `default`.
pub fn text_or<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    match raw {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

/// Parse with `parse`, falling back to `T::default()` when absent or unknown.
pub fn enum_or_default<T: Default>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> T {
    raw.and_then(parse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42"), Some(42));
        assert_eq!(leading_int("  7"), Some(7));
        assert_eq!(leading_int("12px"), Some(12));
        assert_eq!(leading_int("-3"), Some(-3));
        assert_eq!(leading_int("+8"), Some(8));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn test_positive_or() {
        assert_eq!(positive_or(Some("64"), 32), 64);
        assert_eq!(positive_or(Some("abc"), 32), 32);
        assert_eq!(positive_or(Some("0"), 32), 32);
        assert_eq!(positive_or(Some("-16"), 32), 32);
        assert_eq!(positive_or(Some("5000000000"), 32), 32);
        assert_eq!(positive_or(None, 1), 1);
    }

    #[test]
    fn test_non_negative_or() {
        assert_eq!(non_negative_or(Some("0"), 0), 0);
        assert_eq!(non_negative_or(Some("12"), 0), 12);
        assert_eq!(non_negative_or(Some("-1"), 0), 0);
        assert_eq!(non_negative_or(Some("fast"), 0), 0);
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or(Some("Start"), "Click Me"), "Start");
        assert_eq!(text_or(Some(""), "Click Me"), "Click Me");
        assert_eq!(text_or(None, "Click Me"), "Click Me");
    }
}
