pub mod domain;
pub mod error;
pub mod reader;
pub mod writer;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use domain::{CommissionCalculator, CurrencyConverter};
use error::Result;
use reader::{get_content, get_reader};
use writer::write;

/// Application runner
///
/// Receives a String representing the filename of a CSV containing
/// a series of deposit and withdrawal operations, and prints the
/// commission fee charged for each one, one fee per line, preserving
/// input order.
///
/// ```
/// let result = commission_handler::run(String::from("tests/operations.csv"));
/// assert!(result.is_ok());
/// ```
pub fn run(filename: String) -> Result<()> {
    let mut rdr = get_reader(filename)?;
    let operations = get_content(&mut rdr)?;

    let converter = CurrencyConverter::new(exchange_rates());
    let mut calculator = CommissionCalculator::new(converter);

    for operation in &operations {
        let fee = calculator.calculate(operation)?;
        write(&fee);
    }
    Ok(())
}

/// Exchange rates relative to EUR, supplied once at startup.
pub fn exchange_rates() -> HashMap<String, Decimal> {
    HashMap::from([
        (String::from("EUR"), dec!(1)),
        (String::from("USD"), dec!(1.1497)),
        (String::from("JPY"), dec!(129.53)),
    ])
}
