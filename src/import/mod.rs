mod ledger;
mod normalize;

pub(crate) use ledger::{LedgerReader, RawRecord};
pub(crate) use normalize::normalize;
