mod aggregate;
mod period;
mod transaction;

pub(crate) use aggregate::{DescriptionAggregate, PeriodAggregate};
pub(crate) use period::PeriodKey;
pub(crate) use transaction::Transaction;

#[cfg(test)]
mod tests;
