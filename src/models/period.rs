use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::ParsePeriodKeyError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month bucket, rendered as `"<year>-<MonthName>"` (e.g. `2023-March`).
///
/// Ordering is chronological. Only the rendered string is part of the
/// exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct PeriodKey {
    year: i32,
    month0: u32,
}

impl PeriodKey {
    pub(crate) fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub(crate) fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize % 12]
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month_name())
    }
}

impl FromStr for PeriodKey {
    type Err = ParsePeriodKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePeriodKeyError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month0 = MONTH_NAMES
            .iter()
            .position(|name| *name == month)
            .ok_or_else(invalid)?;
        Ok(Self {
            year,
            month0: month0 as u32,
        })
    }
}
