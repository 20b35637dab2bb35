use crate::labels::LabelResolver;
use crate::range::in_range;
use crate::schema::{Account, AccountNumber, FilterCriteria, JournalEntry};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One trial-balance line: everything posted to a single account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub account: AccountNumber,
    /// `None` when the account is missing from the chart of accounts
    pub description: Option<String>,
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

// A filtered entry with its label and own balance attached
#[derive(Debug, Clone)]
struct AnnotatedEntry<'a> {
    entry: &'a JournalEntry,
    description: Option<&'a str>,
    balance: f64,
}

/// Keeps entries inside both the account range and the period range.
pub fn filter_entries<'a>(
    entries: &'a [JournalEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a JournalEntry> {
    entries
        .iter()
        .filter(|e| matches_criteria(e, criteria))
        .collect()
}

pub fn matches_criteria(entry: &JournalEntry, criteria: &FilterCriteria) -> bool {
    in_range(
        criteria.start_account.as_ref(),
        criteria.end_account.as_ref(),
        &entry.account,
    ) && in_range(
        criteria.start_period.as_ref(),
        criteria.end_period.as_ref(),
        &entry.period,
    )
}

pub struct BalanceAggregator<'a> {
    resolver: &'a LabelResolver,
}

impl<'a> BalanceAggregator<'a> {
    pub fn new(resolver: &'a LabelResolver) -> Self {
        Self { resolver }
    }

    /// Merges already-filtered entries into one row per account, ascending by account.
    pub fn merge(&self, filtered: &[&'a JournalEntry]) -> Vec<AggregatedRow> {
        let mut annotated = self.annotate(filtered);

        // Stable: same-account entries keep their input order
        annotated.sort_by_key(|a| a.entry.account);

        // Insertion-ordered map; first-seen order is ascending after the sort
        let mut rows: Vec<AggregatedRow> = Vec::new();
        let mut index: HashMap<AccountNumber, usize> = HashMap::new();

        for item in annotated {
            match index.get(&item.entry.account).copied() {
                Some(i) => {
                    let row = &mut rows[i];
                    row.debit += item.entry.debit;
                    row.credit += item.entry.credit;
                    row.balance = row.debit - row.credit;
                }
                None => {
                    index.insert(item.entry.account, rows.len());
                    rows.push(AggregatedRow {
                        account: item.entry.account,
                        description: item.description.map(str::to_string),
                        debit: item.entry.debit,
                        credit: item.entry.credit,
                        balance: item.balance,
                    });
                }
            }
        }

        let unlabeled = rows.iter().filter(|r| r.description.is_none()).count();
        if unlabeled > 0 {
            debug!("{} aggregated account(s) have no label", unlabeled);
        }

        rows
    }

    fn annotate(&self, filtered: &[&'a JournalEntry]) -> Vec<AnnotatedEntry<'a>> {
        let resolver: &'a LabelResolver = self.resolver;
        filtered
            .iter()
            .map(|&entry| AnnotatedEntry {
                entry,
                description: resolver.resolve(entry.account),
                balance: entry.debit - entry.credit,
            })
            .collect()
    }
}

/// Filters, labels and merges `entries` into ascending, per-account rows.
pub fn aggregate(
    entries: &[JournalEntry],
    accounts: &[Account],
    criteria: &FilterCriteria,
) -> Vec<AggregatedRow> {
    let resolver = LabelResolver::new(accounts);
    let filtered = filter_entries(entries, criteria);
    BalanceAggregator::new(&resolver).merge(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(account: AccountNumber, period: NaiveDate, debit: f64, credit: f64) -> JournalEntry {
        JournalEntry {
            account,
            period,
            debit,
            credit,
        }
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account {
                number: 1,
                label: "Cash".to_string(),
            },
            Account {
                number: 2,
                label: "Sales".to_string(),
            },
        ]
    }

    #[test]
    fn test_merges_same_account_entries() {
        let entries = vec![
            entry(1, date(2016, 1, 1), 100.0, 0.0),
            entry(2, date(2016, 1, 1), 0.0, 50.0),
            entry(1, date(2016, 2, 1), 0.0, 30.0),
        ];

        let rows = aggregate(&entries, &accounts(), &FilterCriteria::unbounded());

        assert_eq!(
            rows,
            vec![
                AggregatedRow {
                    account: 1,
                    description: Some("Cash".to_string()),
                    debit: 100.0,
                    credit: 30.0,
                    balance: 70.0,
                },
                AggregatedRow {
                    account: 2,
                    description: Some("Sales".to_string()),
                    debit: 0.0,
                    credit: 50.0,
                    balance: -50.0,
                },
            ]
        );
    }

    #[test]
    fn test_rows_are_sorted_regardless_of_input_order() {
        let entries = vec![
            entry(30, date(2016, 1, 1), 1.0, 0.0),
            entry(10, date(2016, 1, 1), 2.0, 0.0),
            entry(20, date(2016, 1, 1), 3.0, 0.0),
            entry(10, date(2016, 1, 2), 4.0, 0.0),
        ];

        let rows = aggregate(&entries, &[], &FilterCriteria::unbounded());
        let numbers: Vec<AccountNumber> = rows.iter().map(|r| r.account).collect();

        assert_eq!(numbers, vec![10, 20, 30]);
        assert_eq!(rows[0].debit, 6.0);
    }

    #[test]
    fn test_both_filters_must_hold() {
        let entries = vec![
            entry(1, date(2016, 1, 1), 10.0, 0.0),
            entry(2, date(2016, 1, 1), 20.0, 0.0),
            entry(2, date(2016, 6, 1), 40.0, 0.0),
        ];
        let criteria = FilterCriteria {
            start_account: Some(2),
            end_account: None,
            start_period: None,
            end_period: Some(date(2016, 3, 31)),
        };

        let filtered = filter_entries(&entries, &criteria);
        assert_eq!(filtered.len(), 1);

        let rows = aggregate(&entries, &accounts(), &criteria);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account, 2);
        assert_eq!(rows[0].debit, 20.0);
    }

    #[test]
    fn test_unknown_account_keeps_row_without_label() {
        let entries = vec![entry(3, date(2016, 1, 1), 5.0, 1.0)];
        let rows = aggregate(&entries, &accounts(), &FilterCriteria::unbounded());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, None);
        assert_eq!(rows[0].balance, 4.0);
    }

    #[test]
    fn test_no_surviving_entries_gives_no_rows() {
        let entries = vec![entry(1, date(2016, 1, 1), 5.0, 1.0)];
        let criteria = FilterCriteria::periods(Some(date(2017, 1, 1)), None);

        assert!(aggregate(&entries, &accounts(), &criteria).is_empty());
        assert!(aggregate(&[], &accounts(), &FilterCriteria::unbounded()).is_empty());
    }

    #[test]
    fn test_negative_amounts_are_not_special_cased() {
        let entries = vec![
            entry(1, date(2016, 1, 1), -10.0, 0.0),
            entry(1, date(2016, 1, 2), 0.0, -25.0),
        ];
        let rows = aggregate(&entries, &accounts(), &FilterCriteria::unbounded());

        assert_eq!(rows[0].debit, -10.0);
        assert_eq!(rows[0].credit, -25.0);
        assert_eq!(rows[0].balance, 15.0);
    }
}
