//! Number parsing and display helpers.

/// Render `value` with `,` thousands separators and at most
/// `max_fraction_digits` fraction digits (trailing zeros dropped).
pub fn group_thousands(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 + frac_part.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Parse a decimal string as sent by the backend (`"1180000.00"`).
/// Blank or non-finite input is not a number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the leading integer of `raw`, ignoring anything after it
/// (`" 3600.9s"` → 3600). Returns `None` when no digits lead the string.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part() {
        assert_eq!(group_thousands(1_180_000.0, 0), "1,180,000");
        assert_eq!(group_thousands(100_000.0, 3), "100,000");
        assert_eq!(group_thousands(999.0, 3), "999");
        assert_eq!(group_thousands(0.0, 3), "0");
    }

    #[test]
    fn keeps_significant_fraction_digits() {
        assert_eq!(group_thousands(1234.5678, 3), "1,234.568");
        assert_eq!(group_thousands(1234.5, 3), "1,234.5");
        assert_eq!(group_thousands(-1234.25, 3), "-1,234.25");
    }

    #[test]
    fn decimal_parsing_rejects_blank_and_garbage() {
        assert_eq!(parse_decimal(" 990000.00 "), Some(990_000.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("free"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn int_prefix_behaves_like_a_lenient_parser() {
        assert_eq!(parse_int_prefix("3600"), Some(3600));
        assert_eq!(parse_int_prefix("  3600.9"), Some(3600));
        assert_eq!(parse_int_prefix("-15s"), Some(-15));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }
}
