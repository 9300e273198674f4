use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::PeriodKey;

/// One validated ledger row. Lives only until it has been accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, description: String, amount: Decimal) -> Self {
        Self {
            date,
            description,
            amount,
        }
    }

    pub(crate) fn period(&self) -> PeriodKey {
        PeriodKey::from_date(self.date)
    }
}
