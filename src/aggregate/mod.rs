use std::collections::HashMap;

use crate::error::{LedgerError, RecordError};
use crate::import::RawRecord;
use crate::models::{DescriptionAggregate, PeriodAggregate, PeriodKey, Transaction};

/// What to do with a ledger row that fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum ErrorPolicy {
    /// Stop at the first bad row and discard everything accumulated so far.
    #[default]
    Abort,
    /// Log the bad row, leave it out of the totals and keep going.
    Skip,
}

/// A row left out of the totals under [`ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub(crate) position: usize,
    pub(crate) raw: String,
    pub(crate) error: RecordError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IngestReport {
    pub(crate) accepted: usize,
    pub(crate) rejected: Vec<Rejection>,
}

/// Month and description totals over one ledger, kept as two views of the
/// same accumulation.
///
/// For every period `P` and description `D` the amount under
/// `periods[P].by_description[D]` always equals `descriptions[D].by_period[P]`.
#[derive(Debug, Clone, Default)]
pub(crate) struct DualAggregator {
    periods: HashMap<PeriodKey, PeriodAggregate>,
    descriptions: HashMap<String, DescriptionAggregate>,
    transactions: usize,
}

impl DualAggregator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold every raw record into a fresh aggregator, in input order.
    ///
    /// Under [`ErrorPolicy::Abort`] the first rejected row is returned as
    /// [`LedgerError::Rejected`] and the partial totals are dropped.
    pub(crate) fn ingest<I>(
        records: I,
        policy: ErrorPolicy,
    ) -> Result<(Self, IngestReport), LedgerError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut aggregator = Self::new();
        let mut report = IngestReport::default();

        for record in records {
            match record.normalize() {
                Ok(txn) => {
                    aggregator.accumulate(&txn);
                    report.accepted += 1;
                }
                Err(source) => match policy {
                    ErrorPolicy::Abort => {
                        return Err(LedgerError::Rejected {
                            position: record.position,
                            raw: record.to_string(),
                            source,
                        });
                    }
                    ErrorPolicy::Skip => {
                        tracing::warn!(
                            position = record.position,
                            raw = %record,
                            "skipping row: {source}"
                        );
                        report.rejected.push(Rejection {
                            position: record.position,
                            raw: record.to_string(),
                            error: source,
                        });
                    }
                },
            }
        }

        tracing::info!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            periods = aggregator.periods.len(),
            descriptions = aggregator.descriptions.len(),
            "ledger aggregated"
        );
        Ok((aggregator, report))
    }

    /// Add one transaction to both views. Never fails.
    pub(crate) fn accumulate(&mut self, txn: &Transaction) {
        let period = txn.period();

        let by_period = self.periods.entry(period).or_insert_with(|| {
            tracing::debug!(%period, "new period");
            PeriodAggregate::default()
        });
        let by_description = self
            .descriptions
            .entry(txn.description.clone())
            .or_insert_with(|| {
                tracing::debug!(description = %txn.description, "new description");
                DescriptionAggregate::default()
            });

        by_period.record(&txn.description, txn.amount);
        by_description.record(period, txn.amount);
        self.transactions += 1;
    }

    pub(crate) fn periods(&self) -> &HashMap<PeriodKey, PeriodAggregate> {
        &self.periods
    }

    pub(crate) fn descriptions(&self) -> &HashMap<String, DescriptionAggregate> {
        &self.descriptions
    }

    pub(crate) fn period(&self, key: &PeriodKey) -> Option<&PeriodAggregate> {
        self.periods.get(key)
    }

    pub(crate) fn description(&self, description: &str) -> Option<&DescriptionAggregate> {
        self.descriptions.get(description)
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions
    }
}
