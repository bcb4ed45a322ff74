use chrono::NaiveDate;
use csv::Reader;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs::File, io};

use crate::domain::{Operation, OperationType, UserType};
use crate::error::{CommissionError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationRow {
    date: String,
    user_id: u32,
    user_type: UserType,
    operation_type: OperationType,
    amount: Decimal,
    currency: String,
}

pub fn get_reader(filename: String) -> Result<Reader<File>> {
    Ok(ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(filename)?)
}

/// Reads the whole batch into operations, preserving file order.
pub fn get_content<R>(rdr: &mut Reader<R>) -> Result<Vec<Operation>>
where
    R: io::Read,
{
    let mut operations = Vec::new();
    for result in rdr.deserialize() {
        let row: OperationRow = result?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|_| CommissionError::MalformedDate(row.date.clone()))?;

        // The calculator assumes non-negative amounts.
        if row.amount < Decimal::ZERO {
            return Err(CommissionError::NegativeAmount(row.amount));
        }

        operations.push(Operation::new(
            date,
            row.user_id,
            row.user_type,
            row.operation_type,
            row.amount,
            row.currency,
        ));
    }
    Ok(operations)
}

pub fn get_filename(arguments: Vec<String>) -> Result<String> {
    if arguments.len() != 2 {
        return Err(CommissionError::Usage("Wrong number of arguments"));
    }
    Ok(arguments.get(1).unwrap().to_owned())
}
