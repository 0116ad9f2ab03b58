//! Display formatting for calculated values.
//!
//! ```rust
//! use duct_core::format::format_calculation_result;
//!
//! assert_eq!(format_calculation_result(1432.5, "fpm", 0), "1,433 fpm");
//! assert_eq!(format_calculation_result(0.0, "in", 2), "0.00 in");
//! ```

/// Round to `decimals` places, halves away from zero.
///
/// For the non-negative quantities the engine produces this is round-half-up.
/// When the scaled value does not fit in an `f64` the input is already exact
/// at that many places and is returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render `value` with thousands separators, exactly `precision` fractional
/// digits, and a trailing unit.
///
/// A value that rounds to zero never carries a minus sign.
pub fn format_calculation_result(value: f64, unit: &str, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{} {}", value, unit);
    }

    let rounded = u32::try_from(precision).map_or(value, |places| round_to(value, places));
    let digits = format!("{:.*}", precision, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + unit.len() + 4);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out.push(' ');
    out.push_str(unit);
    out
}

/// `format_calculation_result` at precision 0.
pub fn format_whole(value: f64, unit: &str) -> String {
    format_calculation_result(value, unit, 0)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1432.4, 0), 1432.0);
        assert_eq!(round_to(1432.5, 0), 1433.0);
        assert_eq!(round_to(0.06234, 4), 0.0623);
        assert_eq!(round_to(0.135, 1), 0.1);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_calculation_result(1432.5, "fpm", 0), "1,433 fpm");
        assert_eq!(format_calculation_result(1_234_567.0, "CFM", 0), "1,234,567 CFM");
        assert_eq!(format_calculation_result(999.0, "fpm", 0), "999 fpm");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_calculation_result(0.0, "fpm", 0), "0 fpm");
        assert_eq!(format_calculation_result(0.0, "in", 2), "0.00 in");
        assert_eq!(format_calculation_result(-0.001, "in", 2), "0.00 in");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_calculation_result(-100.0, "fpm", 0), "-100 fpm");
        assert_eq!(format_calculation_result(-12345.678, "in.wc", 2), "-12,345.68 in.wc");
    }

    #[test]
    fn test_format_trailing_zeros() {
        assert_eq!(format_calculation_result(0.1, "in.wc", 4), "0.1000 in.wc");
        assert_eq!(format_calculation_result(1500.0, "fpm", 1), "1,500.0 fpm");
    }

    #[test]
    fn test_round_to_large_places() {
        assert_eq!(round_to(1.5, 400), 1.5);
        assert_eq!(round_to(1.0e10, 300), 1.0e10);
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_format_large_precision() {
        let text = format_calculation_result(1.5, "in", 400);
        assert!(text.starts_with("1.5000"));
        assert!(text.ends_with(" in"));
        assert_eq!(text.len(), "1.".len() + 400 + " in".len());

        let text = format_calculation_result(1.0e10, "in", 300);
        assert!(text.starts_with("10,000,000,000.000"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(format_whole(1432.4, "fpm"), "1,432 fpm");
    }
}
