use epimeasures_core::PLACEHOLDER;

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a value with a fixed number of decimals and thousands separators.
///
/// NaN renders as the placeholder, infinities as `∞`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return PLACEHOLDER.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    // -0.00 shows as 0.00
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a whole count (e.g. `100,000`)
pub fn format_count(value: f64) -> String {
    format_fixed(value, 0)
}

/// Format a proportion as a percentage (`0.0476` -> `4.76%`)
pub fn format_percent(proportion: f64, decimals: usize) -> String {
    if proportion.is_nan() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", format_fixed(proportion * 100.0, decimals))
}

/// Format a rate "per k" (`10.0 per 100,000`)
pub fn format_per(value: f64, decimals: usize, per: f64) -> String {
    format!("{} per {}", format_fixed(value, decimals), format_count(per))
}
