use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{CommissionError, Result};

// CurrencyConverter converts amounts between currency codes using a
// table of exchange rates expressed relative to EUR.
pub struct CurrencyConverter {
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// The table must map the base currency to exactly 1 and carry an
    /// entry for every code that can appear in an operation.
    pub fn new(rates: HashMap<String, Decimal>) -> Self {
        Self { rates }
    }

    /// Converts an amount from one currency to another.
    ///
    /// Identical source and target codes are an exact passthrough with
    /// no rate lookup, so no round-trip error is introduced.
    pub fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(amount);
        }

        let amount_in_base = amount / self.rate(from_currency)?;
        Ok(amount_in_base * self.rate(to_currency)?)
    }

    fn rate(&self, currency: &str) -> Result<Decimal> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| CommissionError::UnknownCurrency(currency.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    fn converter() -> CurrencyConverter {
        CurrencyConverter::new(HashMap::from([
            (String::from("EUR"), dec!(1)),
            (String::from("USD"), dec!(1.1497)),
            (String::from("JPY"), dec!(129.53)),
        ]))
    }

    #[test]
    fn test_same_currency_is_passthrough() {
        let c = converter();
        assert_eq!(c.convert(dec!(123.45), "USD", "USD").unwrap(), dec!(123.45));
    }

    #[test]
    fn test_same_currency_needs_no_rate() {
        // Passthrough short-circuits before any table lookup.
        let c = converter();
        assert_eq!(c.convert(dec!(9.99), "GBP", "GBP").unwrap(), dec!(9.99));
    }

    #[test]
    fn test_converts_through_base() {
        let c = converter();
        assert_eq!(c.convert(dec!(100), "EUR", "USD").unwrap(), dec!(114.97));
        assert_eq!(c.convert(dec!(114.97), "USD", "EUR").unwrap(), dec!(100));
    }

    #[test]
    fn test_round_trip_tolerance() {
        let c = converter();
        let there = c.convert(dec!(100), "USD", "JPY").unwrap();
        let back = c.convert(there, "JPY", "USD").unwrap();
        assert_eq!(back.round_dp(10), dec!(100));
    }

    #[test]
    fn test_unknown_source_currency() {
        let c = converter();
        match c.convert(dec!(10), "GBP", "EUR") {
            Err(CommissionError::UnknownCurrency(code)) => assert_eq!(code, "GBP"),
            other => panic!("expected UnknownCurrency, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_target_currency() {
        let c = converter();
        match c.convert(dec!(10), "EUR", "CHF") {
            Err(CommissionError::UnknownCurrency(code)) => assert_eq!(code, "CHF"),
            other => panic!("expected UnknownCurrency, got {:?}", other.map(|_| ())),
        }
    }
}
