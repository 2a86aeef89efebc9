// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Display Formatting

//! en-US number rendering for explanations and the savings total.
//!
//! Matches what a browser prints for `n.toLocaleString()` and for a bare
//! `${n}` template interpolation, so figures read the same whether the
//! engine runs in-page or behind the CLI.

const FRACTION_DIGITS: u32 = 3;

/// 2^53: every double at or above this magnitude is an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Magnitudes a template literal switches to exponent form for.
const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Group thousands with commas and keep at most three fraction digits.
///
/// The third digit rounds half away from zero and trailing zeros are trimmed:
/// `1234567.0 -> "1,234,567"`, `0.12345 -> "0.123"`, `-2.5 -> "-2.5"`.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    if value.abs() >= EXACT_INTEGER_LIMIT {
        // Display prints the shortest round-trip digits, zero-padded, never
        // in exponent form.
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}", sign, group_digits(&format!("{}", value.abs())));
    }

    let scale = 10u128.pow(FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round() as u128;
    let whole = scaled / scale;
    let frac = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_digits(&whole.to_string()));
    if frac != 0 {
        let digits = format!("{:0width$}", frac, width = FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Dollar amount with grouping, e.g. `$1,234`.
pub fn format_usd(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", group_digits(&amount.unsigned_abs().to_string()))
    } else {
        format!("${}", group_digits(&amount.to_string()))
    }
}

/// Ungrouped shortest form, as a template literal prints a number.
///
/// Magnitudes of 1e21 and above, or below 1e-6, use exponent form with an
/// explicit sign on the exponent: `1e+21`, `1.5e-7`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    format!("{}", value)
}

fn group_digits(digits: &str) -> String {
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
    fn groups_thousands() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
        assert_eq!(format_grouped(100000.0), "100,000");
    }

    #[test]
    fn keeps_three_fraction_digits() {
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(2.5), "2.5");
        assert_eq!(format_grouped(1234.5678), "1,234.568");
        assert_eq!(format_grouped(0.0625), "0.063");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_grouped(-2500.0), "-2,500");
        assert_eq!(format_grouped(-0.0001), "0");
    }

    #[test]
    fn huge_values_keep_their_digits() {
        assert_eq!(format_grouped(1e40), format!("10{}", ",000".repeat(13)));
        assert_eq!(format_grouped(-1e40), format!("-10{}", ",000".repeat(13)));
        assert_eq!(format_grouped(1e36), format!("1{}", ",000".repeat(12)));
        assert_eq!(format_grouped(9_007_199_254_740_992.0), "9,007,199,254,740,992");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
        assert_eq!(format_grouped(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn usd_amounts() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(70000), "$70,000");
        assert_eq!(format_usd(-1234), "-$1,234");
        assert_eq!(format_usd(i64::MIN), "-$9,223,372,036,854,775,808");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(format_plain(100.0), "100");
        assert_eq!(format_plain(99.5), "99.5");
        assert_eq!(format_plain(-0.0), "0");
        assert_eq!(format_plain(-12.0), "-12");
    }

    #[test]
    fn plain_numbers_switch_to_exponent_form() {
        assert_eq!(format_plain(1e21), "1e+21");
        assert_eq!(format_plain(1.5e21), "1.5e+21");
        assert_eq!(format_plain(-2e30), "-2e+30");
        assert_eq!(format_plain(1e-7), "1e-7");
        assert_eq!(format_plain(1e20), "100000000000000000000");
        assert_eq!(format_plain(0.000001), "0.000001");
    }
}
