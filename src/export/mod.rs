use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::aggregate::DualAggregator;
use crate::error::ExportError;
use crate::models::{DescriptionAggregate, PeriodAggregate, PeriodKey};

/// Field holding the aggregate's own total inside each object.
pub(crate) const TOTAL_KEY: &str = "total";

/// `{ "<key>": { "total": n, "<breakdown key>": n, ... }, ... }`, keys sorted.
pub(crate) type Document = BTreeMap<String, BTreeMap<String, Decimal>>;

pub(crate) struct AggregateExporter;

impl AggregateExporter {
    /// Period key → `total` (spending) plus one entry per description.
    pub(crate) fn periods_document(agg: &DualAggregator) -> Result<Document, ExportError> {
        agg.periods()
            .iter()
            .map(|(period, p)| -> Result<_, ExportError> {
                let parent = period.to_string();
                let object = object(&parent, p.total, &p.by_description)?;
                Ok((parent, object))
            })
            .collect()
    }

    /// Description → `total` plus one entry per period key.
    pub(crate) fn descriptions_document(agg: &DualAggregator) -> Result<Document, ExportError> {
        agg.descriptions()
            .iter()
            .map(|(description, d)| -> Result<_, ExportError> {
                let by_period: BTreeMap<String, Decimal> = d
                    .by_period
                    .iter()
                    .map(|(period, amount)| (period.to_string(), *amount))
                    .collect();
                let object = object(description, d.total, &by_period)?;
                Ok((description.clone(), object))
            })
            .collect()
    }

    pub(crate) fn write_json<W: Write>(doc: &Document, writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, doc)?;
        Ok(())
    }

    pub(crate) fn write_file(doc: &Document, path: &Path) -> Result<(), ExportError> {
        let write_err = |source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        Self::write_json(doc, &mut writer)?;
        writer.flush().map_err(write_err)?;
        tracing::debug!(path = %path.display(), entries = doc.len(), "document written");
        Ok(())
    }

    pub(crate) fn read_periods<R: Read>(
        reader: R,
    ) -> Result<HashMap<PeriodKey, PeriodAggregate>, ExportError> {
        read_document(reader)?
            .into_iter()
            .map(|(key, mut object)| -> Result<_, ExportError> {
                let total = take_total(&key, &mut object)?;
                let period = key.parse::<PeriodKey>()?;
                let by_description = object.into_iter().collect();
                Ok((
                    period,
                    PeriodAggregate {
                        total,
                        by_description,
                    },
                ))
            })
            .collect()
    }

    pub(crate) fn read_descriptions<R: Read>(
        reader: R,
    ) -> Result<HashMap<String, DescriptionAggregate>, ExportError> {
        read_document(reader)?
            .into_iter()
            .map(|(description, mut object)| -> Result<_, ExportError> {
                let total = take_total(&description, &mut object)?;
                let by_period = object
                    .into_iter()
                    .map(|(period, amount)| -> Result<_, ExportError> {
                        Ok((period.parse::<PeriodKey>()?, amount))
                    })
                    .collect::<Result<HashMap<_, _>, _>>()?;
                Ok((description, DescriptionAggregate { total, by_period }))
            })
            .collect()
    }
}

fn object<'a, I>(
    parent: &str,
    total: Decimal,
    breakdown: I,
) -> Result<BTreeMap<String, Decimal>, ExportError>
where
    I: IntoIterator<Item = (&'a String, &'a Decimal)>,
{
    let mut object = BTreeMap::new();
    object.insert(TOTAL_KEY.to_string(), total);
    for (key, amount) in breakdown {
        if key == TOTAL_KEY {
            return Err(ExportError::ReservedKey {
                parent: parent.to_string(),
                key: key.clone(),
            });
        }
        object.insert(key.clone(), *amount);
    }
    Ok(object)
}

fn read_document<R: Read>(reader: R) -> Result<Document, ExportError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

fn take_total(key: &str, object: &mut BTreeMap<String, Decimal>) -> Result<Decimal, ExportError> {
    object
        .remove(TOTAL_KEY)
        .ok_or_else(|| ExportError::MissingTotal(key.to_string()))
}
