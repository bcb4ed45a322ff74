use rust_decimal::Decimal;

/// Fixed-point rendering with exactly 2 fractional digits, no
/// thousands separator.
pub fn format_fee(fee: &Decimal) -> String {
    format!("{:.2}", fee)
}

pub fn write(fee: &Decimal) {
    println!("{}", format_fee(fee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_pads_zero() {
        assert_eq!(format_fee(&dec!(0)), "0.00");
    }

    #[test]
    fn test_format_pads_integral_fee() {
        assert_eq!(format_fee(&dec!(5)), "5.00");
    }

    #[test]
    fn test_format_keeps_two_digits() {
        assert_eq!(format_fee(&dec!(1.50)), "1.50");
        assert_eq!(format_fee(&dec!(0.30)), "0.30");
        assert_eq!(format_fee(&dec!(1234.56)), "1234.56");
    }
}
