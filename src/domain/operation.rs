use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Category a client belongs to for fee purposes.
///
/// `Unknown` absorbs any unrecognized token from the input; operations
/// carrying it are priced at zero instead of failing the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Private,
    Business,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Withdraw,
    Deposit,
    #[serde(other)]
    Unknown,
}

// Operation is a single financial operation as read from the input
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub user_id: u32,
    pub user_type: UserType,
    pub operation_type: OperationType,
    pub amount: Decimal,
    pub currency: String,
}

impl Operation {
    pub fn new(
        date: NaiveDate,
        user_id: u32,
        user_type: UserType,
        operation_type: OperationType,
        amount: Decimal,
        currency: String,
    ) -> Self {
        Self {
            date,
            user_id,
            user_type,
            operation_type,
            amount,
            currency,
        }
    }
}
