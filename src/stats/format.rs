//! Number formatting for metric displays.

/// Truncate to a whole number and group thousands with commas: `38652.7` -> `"38,652"`.
pub fn format_count(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
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

/// Two decimal places: `50.4` -> `"50.40"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(38652.0), "38,652");
        assert_eq!(format_count(1_562_000.0), "1,562,000");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn counts_truncate_fractions() {
        assert_eq!(format_count(1421.9), "1,421");
        assert_eq!(format_count(-1234.5), "-1,234");
    }

    #[test]
    fn percents_have_two_decimals() {
        assert_eq!(format_percent(50.42), "50.42");
        assert_eq!(format_percent(0.5), "0.50");
        assert_eq!(format_percent(73.456), "73.46");
    }
}
