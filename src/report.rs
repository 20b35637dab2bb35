use crate::aggregator::AggregatedRow;
use crate::error::{Result, TrialBalanceError};
use crate::totals::Totals;
use serde::{Deserialize, Serialize};

/// Output of one pipeline run, in the shape the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalance {
    pub rows: Vec<AggregatedRow>,
    pub total_debit: f64,
    pub total_credit: f64,
    /// Entries that passed both the account and the period filter
    pub matched_entry_count: usize,
}

impl TrialBalance {
    pub fn new(rows: Vec<AggregatedRow>, totals: Totals, matched_entry_count: usize) -> Self {
        Self {
            rows,
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            matched_entry_count,
        }
    }

    pub fn totals(&self) -> Totals {
        Totals {
            total_debit: self.total_debit,
            total_credit: self.total_credit,
        }
    }

    /// True when no entry matched; callers render nothing in that case.
    pub fn is_empty(&self) -> bool {
        self.matched_entry_count == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the report's internal consistency.
    ///
    /// Rows must be strictly ascending by account (which also rules out duplicates),
    /// each row's balance must equal debit - credit, and the grand totals must match
    /// the row sums within `tolerance`.
    pub fn verify(&self, tolerance: f64) -> Result<()> {
        for pair in self.rows.windows(2) {
            if pair[0].account >= pair[1].account {
                return Err(TrialBalanceError::OrderingViolation {
                    previous: pair[0].account,
                    next: pair[1].account,
                });
            }
        }

        for row in &self.rows {
            if ((row.debit - row.credit) - row.balance).abs() > tolerance {
                return Err(TrialBalanceError::BalanceMismatch {
                    account: row.account,
                    debit: row.debit,
                    credit: row.credit,
                    balance: row.balance,
                });
            }
        }

        let rows_debit: f64 = self.rows.iter().map(|r| r.debit).sum();
        let rows_credit: f64 = self.rows.iter().map(|r| r.credit).sum();

        check_column("debit", self.total_debit, rows_debit, tolerance)?;
        check_column("credit", self.total_credit, rows_credit, tolerance)?;

        Ok(())
    }
}

fn check_column(
    column: &'static str,
    entries_total: f64,
    rows_total: f64,
    tolerance: f64,
) -> Result<()> {
    let difference = (entries_total - rows_total).abs();
    if difference > tolerance {
        return Err(TrialBalanceError::TotalsMismatch {
            column,
            entries_total,
            rows_total,
            difference,
        });
    }
    Ok(())
}
