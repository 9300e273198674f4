use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::RecordError;
use crate::models::Transaction;

/// Turn the three raw text fields of a ledger row into a [`Transaction`].
///
/// The description is kept verbatim, including surrounding whitespace and
/// the empty string.
pub(crate) fn normalize(
    date: &str,
    description: &str,
    amount: &str,
) -> Result<Transaction, RecordError> {
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;
    Ok(Transaction::new(date, description.to_string(), amount))
}

#[allow(clippy::expect_used)]
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("date pattern is valid")
    })
}

/// Parse `DD/MM/YYYY` (single-digit day or month allowed).
fn parse_date(s: &str) -> Result<NaiveDate, RecordError> {
    let malformed = || RecordError::MalformedDate {
        text: s.to_string(),
    };
    let caps = date_shape().captures(s).ok_or_else(malformed)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let (Some(day), Some(month), Some(year)) = (field(1), field(2), field(3)) else {
        return Err(malformed());
    };
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(malformed)
}

/// Largest accepted amount magnitude (10^15). Summing accepted amounts cannot
/// overflow `Decimal` before roughly 7.9e13 rows.
const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Most fractional digits an amount may carry, so every accepted amount is
/// held exactly.
const MAX_FRACTION_DIGITS: usize = 10;

#[allow(clippy::expect_used)]
fn amount_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        let pattern = format!(
            r"^[+-]?(?:[0-9]+(?:\.[0-9]{{0,{MAX_FRACTION_DIGITS}}})?|\.[0-9]{{1,{MAX_FRACTION_DIGITS}}})$"
        );
        Regex::new(&pattern).expect("amount pattern is valid")
    })
}

/// Parse a signed decimal, ignoring thousands-separator commas.
///
/// Only plain digits with an optional sign and decimal point are accepted,
/// at most [`MAX_FRACTION_DIGITS`] after the point and no larger in
/// magnitude than [`MAX_AMOUNT`].
fn parse_amount(s: &str) -> Result<Decimal, RecordError> {
    let malformed = || RecordError::MalformedAmount {
        text: s.to_string(),
    };
    let cleaned = s.replace(',', "");
    let cleaned = cleaned.trim();
    if !amount_shape().is_match(cleaned) {
        return Err(malformed());
    }
    let amount = Decimal::from_str(cleaned).map_err(|_| malformed())?;
    if amount.abs() > MAX_AMOUNT {
        return Err(malformed());
    }
    Ok(amount)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
