//! pt-BR Number Formatting
//!
//! Two fixed formatters: Brazilian real with two decimals, and a plain
//! decimal padded to at least two integer digits. Output mirrors the
//! browser's `Intl.NumberFormat("pt-BR", ...)` for finite input.

/// Currency symbol followed by a no-break space
const CURRENCY_PREFIX: &str = "R$\u{a0}";
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
/// Fraction digits kept by the decimal formatter before dropping zeros
const DECIMAL_MAX_FRACTION_DIGITS: u32 = 3;

/// Format as BRL, always two fraction digits: `600` -> `"R$ 600,00"`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}{}", sign(amount), CURRENCY_PREFIX, non_finite(amount));
    }

    let cents = scaled(amount, 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}{}{:02}",
        sign,
        CURRENCY_PREFIX,
        group_thousands(&(cents / 100).to_string()),
        DECIMAL_SEPARATOR,
        cents % 100
    )
}

/// Format as a plain decimal with at least two integer digits: `5` -> `"05"`
pub fn format_decimal(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", sign(amount), non_finite(amount));
    }

    let unit = 10u128.pow(DECIMAL_MAX_FRACTION_DIGITS);
    let value = scaled(amount, unit);
    let sign = if amount < 0.0 && value > 0 { "-" } else { "" };
    let integer = group_thousands(&format!("{:02}", value / unit));

    let fraction = value % unit;
    if fraction == 0 {
        return format!("{}{}", sign, integer);
    }
    let digits = format!("{:0width$}", fraction, width = DECIMAL_MAX_FRACTION_DIGITS as usize);
    format!(
        "{}{}{}{}",
        sign,
        integer,
        DECIMAL_SEPARATOR,
        digits.trim_end_matches('0')
    )
}

/// Hour total as shown in the footer: `12` -> `"12:00"`
pub fn format_hours_clock(hours: u64) -> String {
    format!("{}:00", format_decimal(hours as f64))
}

/// `|amount| * unit`, ties rounded away from zero
fn scaled(amount: f64, unit: u128) -> u128 {
    (amount.abs() * unit as f64).round() as u128
}

fn sign(amount: f64) -> &'static str {
    if amount == f64::NEG_INFINITY {
        "-"
    } else {
        ""
    }
}

fn non_finite(amount: f64) -> &'static str {
    if amount.is_nan() {
        "NaN"
    } else {
        "∞"
    }
}

/// Insert group separators every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_zero() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
    }

    #[test]
    fn test_currency_whole_amounts() {
        assert_eq!(format_currency(600.0), "R$\u{a0}600,00");
        assert_eq!(format_currency(1_234.0), "R$\u{a0}1.234,00");
        assert_eq!(format_currency(1_234_567.0), "R$\u{a0}1.234.567,00");
    }

    #[test]
    fn test_currency_fractions() {
        assert_eq!(format_currency(2.5), "R$\u{a0}2,50");
        assert_eq!(format_currency(0.07), "R$\u{a0}0,07");
        // ties round away from zero
        assert_eq!(format_currency(0.125), "R$\u{a0}0,13");
        assert_eq!(format_currency(0.375), "R$\u{a0}0,38");
        assert_eq!(format_currency(-0.125), "-R$\u{a0}0,13");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-5.0), "-R$\u{a0}5,00");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}NaN");
        assert_eq!(format_currency(f64::INFINITY), "R$\u{a0}∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-R$\u{a0}∞");
    }

    #[test]
    fn test_decimal_pads_to_two_digits() {
        assert_eq!(format_decimal(0.0), "00");
        assert_eq!(format_decimal(5.0), "05");
        assert_eq!(format_decimal(12.0), "12");
        assert_eq!(format_decimal(120.0), "120");
    }

    #[test]
    fn test_decimal_grouping() {
        assert_eq!(format_decimal(999.0), "999");
        assert_eq!(format_decimal(1_234.0), "1.234");
        assert_eq!(format_decimal(10_000_000.0), "10.000.000");
    }

    #[test]
    fn test_decimal_fraction_digits() {
        assert_eq!(format_decimal(1.5), "01,5");
        assert_eq!(format_decimal(2.25), "02,25");
        assert_eq!(format_decimal(0.0004), "00");
        assert_eq!(format_decimal(0.0625), "00,063");
        assert_eq!(format_decimal(-3.0), "-03");
    }

    #[test]
    fn test_hours_clock() {
        assert_eq!(format_hours_clock(0), "00:00");
        assert_eq!(format_hours_clock(12), "12:00");
        assert_eq!(format_hours_clock(1_500), "1.500:00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
    }
}
