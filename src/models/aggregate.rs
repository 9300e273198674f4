use rust_decimal::Decimal;
use std::collections::HashMap;

use super::PeriodKey;

/// Running totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PeriodAggregate {
    /// Sum of the negative transactions only.
    pub(crate) total: Decimal,
    pub(crate) by_description: HashMap<String, Decimal>,
}

impl PeriodAggregate {
    pub(crate) fn record(&mut self, description: &str, amount: Decimal) {
        *self
            .by_description
            .entry(description.to_string())
            .or_default() += amount;
        if amount < Decimal::ZERO {
            self.total += amount;
        }
    }

    /// Income minus spending across every description in the month.
    pub(crate) fn net(&self) -> Decimal {
        self.by_description.values().copied().sum()
    }
}

/// Running totals for one description across every month it appears in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DescriptionAggregate {
    pub(crate) total: Decimal,
    pub(crate) by_period: HashMap<PeriodKey, Decimal>,
}

impl DescriptionAggregate {
    pub(crate) fn record(&mut self, period: PeriodKey, amount: Decimal) {
        *self.by_period.entry(period).or_default() += amount;
        self.total += amount;
    }
}
