use crate::schema::JournalEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_debit: f64,
    pub total_credit: f64,
}

/// Grand totals over already-filtered entries. Empty input yields zeros.
pub fn totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries
        .into_iter()
        .fold(Totals::default(), |acc, entry| Totals {
            total_debit: acc.total_debit + entry.debit,
            total_credit: acc.total_credit + entry.credit,
        })
}
