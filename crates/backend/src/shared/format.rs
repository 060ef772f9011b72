/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Rounds an amount to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hover label for an amount: value in thousands with 2 decimals
///
/// ```
/// use backend::shared::format::format_thousands;
/// assert_eq!(format_thousands(12340.0), "12.34k");
/// ```
pub fn format_thousands(value: f64) -> String {
    format!("{:.2}k", value / 1e3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234), "1.234");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(10.126), 10.13);
        assert_eq!(round2(-3.333), -3.33);
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(100.0), "0.10k");
        assert_eq!(format_thousands(2500.0), "2.50k");
        assert_eq!(format_thousands(1234567.0), "1234.57k");
    }
}
