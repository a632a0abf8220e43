/// Marker rendered in place of any value that is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a number rounded to the nearest integer with thousands separators.
///
/// # Arguments
/// * `value`: The value to format, if present
///
/// # Returns
/// * The display string, or `"N/A"` when the value is absent or not finite
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => group_thousands(value.round()),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a fraction (0.0 - 1.0) as a percentage with one decimal place.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => {
            let percent = format!("{:.1}", value * 100.0);
            // -0.04% rounds to "-0.0"
            match percent.strip_prefix('-') {
                Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
                    format!("{}%", magnitude)
                }
                _ => format!("{}%", percent),
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(rounded: f64) -> String {
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    // -0 after rounding renders as plain 0
    if rounded < 0.0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(999.4)), "999");
        assert_eq!(format_number(Some(999.5)), "1,000");
        assert_eq!(format_number(Some(1_234_567.0)), "1,234,567");
        assert_eq!(format_number(Some(-12_345.6)), "-12,346");
        assert_eq!(format_number(Some(-0.2)), "0");
    }

    #[test]
    fn test_format_number_absent() {
        assert_eq!(format_number(None), NOT_AVAILABLE);
        assert_eq!(format_number(Some(f64::NAN)), NOT_AVAILABLE);
        assert_eq!(format_number(Some(f64::INFINITY)), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(0.5)), "50.0%");
        assert_eq!(format_percent(Some(0.1234)), "12.3%");
        assert_eq!(format_percent(Some(1.0)), "100.0%");
        assert_eq!(format_percent(Some(-0.0001)), "0.0%");
        assert_eq!(format_percent(Some(-0.0)), "0.0%");
        assert_eq!(format_percent(Some(-0.25)), "-25.0%");
        assert_eq!(format_percent(None), NOT_AVAILABLE);
    }
}
