use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LedgerError, RecordError};
use crate::models::Transaction;

/// One row exactly as it appeared in the ledger file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord {
    /// 1-based row number within the ledger.
    pub(crate) position: usize,
    pub(crate) fields: Vec<String>,
    /// 1-based index of the first field that was not valid UTF-8.
    /// Such fields are held lossily decoded.
    pub(crate) invalid_utf8: Option<usize>,
}

impl RawRecord {
    pub(crate) fn new(position: usize, fields: Vec<String>) -> Self {
        Self {
            position,
            fields,
            invalid_utf8: None,
        }
    }

    fn from_bytes(position: usize, record: &csv::ByteRecord) -> Self {
        let mut invalid_utf8 = None;
        let fields = record
            .iter()
            .enumerate()
            .map(|(i, bytes)| match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    invalid_utf8.get_or_insert(i + 1);
                    String::from_utf8_lossy(bytes).into_owned()
                }
            })
            .collect();
        Self {
            position,
            fields,
            invalid_utf8,
        }
    }

    /// Validate the first three fields as date, description and amount.
    /// Extra trailing fields are ignored.
    pub(crate) fn normalize(&self) -> Result<Transaction, RecordError> {
        if let Some(field) = self.invalid_utf8 {
            return Err(RecordError::MalformedEncoding { field });
        }
        match self.fields.as_slice() {
            [date, description, amount, ..] => super::normalize(date, description, amount),
            fields => Err(RecordError::MalformedRecord {
                fields: fields.len(),
            }),
        }
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(","))
    }
}

/// Reads a headerless `date,description,amount` CSV ledger.
pub(crate) struct LedgerReader;

impl LedgerReader {
    pub(crate) fn from_path(path: &Path) -> Result<Vec<RawRecord>, LedgerError> {
        let file = File::open(path).map_err(|source| LedgerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, LedgerError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let mut records = Vec::new();
        // Bytes, not strings: a badly encoded row is a record error that
        // goes through the error policy instead of ending the read.
        for (i, result) in rdr.byte_records().enumerate() {
            let position = i + 1;
            let record = result.map_err(|source| LedgerError::Read { position, source })?;
            records.push(RawRecord::from_bytes(position, &record));
        }
        tracing::debug!(rows = records.len(), "ledger read");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
