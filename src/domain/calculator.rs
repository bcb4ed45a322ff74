use chrono::{NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::domain::converter::CurrencyConverter;
use crate::domain::operation::{Operation, OperationType, UserType};
use crate::error::Result;

const BASE_CURRENCY: &str = "EUR";

const FREE_WEEKLY_AMOUNT: Decimal = dec!(1000);
const FREE_WEEKLY_OPERATIONS: u32 = 3;

const PRIVATE_WITHDRAW_FEE: Decimal = dec!(0.003);
const BUSINESS_WITHDRAW_FEE: Decimal = dec!(0.005);
const DEPOSIT_FEE: Decimal = dec!(0.0003);

// Per-user accumulator for the rolling weekly free-withdrawal
// allowance. week_start anchors the window to a Monday; the window is
// reset in place whenever an operation falls outside it.
#[derive(Debug)]
struct WeeklyWithdrawals {
    total_amount: Decimal,
    operation_count: u32,
    week_start: NaiveDate,
}

impl WeeklyWithdrawals {
    fn new(week_start: NaiveDate) -> Self {
        Self {
            total_amount: dec!(0),
            operation_count: 0,
            week_start,
        }
    }

    fn reset(&mut self, week_start: NaiveDate) {
        self.total_amount = dec!(0);
        self.operation_count = 0;
        self.week_start = week_start;
    }
}

/// Computes the commission fee charged for each operation.
///
/// Deposits and business withdrawals are flat-rate. Private
/// withdrawals get a weekly allowance of 1000 EUR across at most three
/// operations; only the part exceeding the allowance is charged, at
/// 0.3%. The allowance is tracked per user in EUR, so amounts in other
/// currencies are normalized before the limit check and the charged
/// part is converted back before the fee is taken.
pub struct CommissionCalculator {
    currency_converter: CurrencyConverter,
    private_withdrawals: HashMap<u32, WeeklyWithdrawals>,
}

impl CommissionCalculator {
    pub fn new(currency_converter: CurrencyConverter) -> Self {
        Self {
            currency_converter,
            private_withdrawals: HashMap::new(),
        }
    }

    /// Returns the fee for one operation, rounded to 2 fractional
    /// digits, in the operation's own currency.
    pub fn calculate(&mut self, operation: &Operation) -> Result<Decimal> {
        match (operation.user_type, operation.operation_type) {
            (UserType::Private, OperationType::Withdraw) => self.private_withdraw(operation),
            (UserType::Business, OperationType::Withdraw) => Ok(Self::business_withdraw(operation)),
            (UserType::Private | UserType::Business, OperationType::Deposit) => {
                Ok(Self::deposit(operation))
            }
            // Unrecognized user or operation types are not charged.
            _ => Ok(dec!(0)),
        }
    }

    fn private_withdraw(&mut self, operation: &Operation) -> Result<Decimal> {
        let mut amount = operation.amount;
        if operation.currency != BASE_CURRENCY {
            amount = self
                .currency_converter
                .convert(amount, &operation.currency, BASE_CURRENCY)?;
        }

        let week_start = week_start(operation.date);
        let state = self
            .private_withdrawals
            .entry(operation.user_id)
            .or_insert_with(|| WeeklyWithdrawals::new(week_start));

        // Any mismatch starts a fresh window, whichever way the dates run.
        if state.week_start != week_start {
            state.reset(week_start);
        }

        let mut commissionable_amount = dec!(0);
        if state.operation_count < FREE_WEEKLY_OPERATIONS
            && state.total_amount + amount <= FREE_WEEKLY_AMOUNT
        {
            // Fully covered by the allowance. The count deliberately
            // stays put: only charged operations advance it.
            state.total_amount += amount;
        } else {
            let headroom = (FREE_WEEKLY_AMOUNT - state.total_amount).max(dec!(0));
            if amount > headroom {
                commissionable_amount = amount - headroom;
            }
            state.total_amount += amount;
            state.operation_count += 1;
        }

        // The fee is charged in the operation's currency, so the excess
        // goes back through the same rate table it came in by.
        if operation.currency != BASE_CURRENCY {
            commissionable_amount = self.currency_converter.convert(
                commissionable_amount,
                BASE_CURRENCY,
                &operation.currency,
            )?;
        }

        Ok(round_fee(commissionable_amount * PRIVATE_WITHDRAW_FEE))
    }

    fn business_withdraw(operation: &Operation) -> Decimal {
        round_fee(operation.amount * BUSINESS_WITHDRAW_FEE)
    }

    fn deposit(operation: &Operation) -> Decimal {
        round_fee(operation.amount * DEPOSIT_FEE)
    }
}

// Monday of the week containing the given date.
fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

fn round_fee(fee: Decimal) -> Decimal {
    fee.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
