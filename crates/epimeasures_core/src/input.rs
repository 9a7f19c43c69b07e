//! Parsing of free-text numeric fields.
//!
//! Text fields hold whatever the user typed. Anything that does not parse to a
//! finite number suppresses computation and the widget shows [`PLACEHOLDER`].

/// Shown in place of a derived value when an input is not a number.
pub const PLACEHOLDER: &str = "...";

/// Parse a numeric text field.
///
/// Returns `None` for empty, malformed, NaN or infinite input. Thousands
/// separators (`,` and `_`) are accepted so `500,000` reads as `500000`.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("50"), Some(50.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
    }

    #[test]
    fn test_parse_with_separators() {
        assert_eq!(parse_number("500,000"), Some(500_000.0));
        assert_eq!(parse_number("1_000"), Some(1_000.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
