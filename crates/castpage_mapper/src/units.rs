//! CSS unit stripping for numeric fields
//!
//! Stored themes often keep lengths as CSS strings (`"3px"`, `"1.5rem"`).
//! Numeric fields want plain numbers back, and must never surface NaN.

/// Unit suffixes recognized when parsing, longest first so `rem` wins over
/// `em` and `ms` over `s`.
const UNITS: [&str; 22] = [
    "vmin", "vmax", "turn", "dpcm", "dppx", "rem", "deg", "rad", "kHz", "dpi", "px", "em", "pt",
    "pc", "ex", "ch", "vw", "vh", "ms", "Hz", "%", "s",
];

/// Keywords that mean "no numeric value"
const RESERVED: [&str; 6] = ["none", "medium", "auto", "inherit", "initial", "unset"];

/// Remove a trailing CSS unit, if any
pub fn strip_unit(value: &str) -> &str {
    let value = value.trim();
    UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .map(str::trim_end)
        .unwrap_or(value)
}

/// Whether a value is a reserved CSS keyword rather than a number
pub fn is_reserved_keyword(value: &str) -> bool {
    let value = value.trim();
    RESERVED.iter().any(|k| k.eq_ignore_ascii_case(value))
}

/// Parse a CSS numeric string.
///
/// Tries the unit-stripped value first, then the longest numeric prefix of
/// the whole string. Reserved keywords and unparseable input give `None`.
pub fn parse_css_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_reserved_keyword(trimmed) {
        return None;
    }
    parse_finite(strip_unit(trimmed)).or_else(|| leading_number(trimmed))
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Longest prefix that parses as a finite number (`"12abc"` -> 12)
fn leading_number(value: &str) -> Option<f64> {
    (1..=value.len())
        .rev()
        .filter(|&end| value.is_char_boundary(end))
        .find_map(|end| parse_finite(&value[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_units() {
        assert_eq!(parse_css_number("3px"), Some(3.0));
        assert_eq!(parse_css_number(" 1.5rem "), Some(1.5));
        assert_eq!(parse_css_number("50%"), Some(50.0));
        assert_eq!(parse_css_number("250ms"), Some(250.0));
        assert_eq!(parse_css_number("2s"), Some(2.0));
        assert_eq!(parse_css_number("2dppx"), Some(2.0));
        assert_eq!(parse_css_number("12vmin"), Some(12.0));
        assert_eq!(parse_css_number("44kHz"), Some(44.0));
        assert_eq!(parse_css_number("-4px"), Some(-4.0));
        assert_eq!(parse_css_number("7"), Some(7.0));
    }

    #[test]
    fn reserved_keywords_have_no_number() {
        for keyword in ["none", "medium", "auto", "inherit", "initial", "unset", "AUTO"] {
            assert_eq!(parse_css_number(keyword), None, "{keyword}");
        }
    }

    #[test]
    fn falls_back_to_leading_number() {
        assert_eq!(parse_css_number("12 px wide"), Some(12.0));
        assert_eq!(parse_css_number("4.5abc"), Some(4.5));
        assert_eq!(parse_css_number("thick"), None);
        assert_eq!(parse_css_number(""), None);
        assert_eq!(parse_css_number("NaNpx"), None);
    }

    #[test]
    fn strip_unit_keeps_unknown_suffixes() {
        assert_eq!(strip_unit("10px"), "10");
        assert_eq!(strip_unit("10 rem"), "10");
        assert_eq!(strip_unit("10fr"), "10fr");
    }
}
