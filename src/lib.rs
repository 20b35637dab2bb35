//! # Trial Balance Builder
//!
//! A library for turning a ledger of journal entries into a trial-balance report.
//!
//! ## Core Concepts
//!
//! - **Range Filter**: Keeps entries whose account number and period fall inside the
//!   user's bounds. Any bound may be left open (`None`).
//! - **Label Resolver**: Maps account numbers to their human readable labels
//! - **Balance Aggregator**: Merges the surviving entries into one row per account,
//!   ascending by account number, with `balance = debit - credit`
//! - **Totals**: Grand debit and credit sums over every matched entry
//!
//! Every run is a pure function of its inputs. Nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use trial_balance_builder::*;
//! use chrono::NaiveDate;
//!
//! let accounts = vec![
//!     Account { number: 1, label: "Cash".to_string() },
//!     Account { number: 2, label: "Sales".to_string() },
//! ];
//! let entries = vec![
//!     JournalEntry {
//!         account: 1,
//!         period: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
//!         debit: 100.0,
//!         credit: 0.0,
//!     },
//!     JournalEntry {
//!         account: 2,
//!         period: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
//!         debit: 0.0,
//!         credit: 100.0,
//!     },
//! ];
//!
//! let report = compute_trial_balance(&entries, &accounts, &FilterCriteria::unbounded());
//! assert_eq!(report.rows.len(), 2);
//! assert_eq!(report.total_debit, 100.0);
//! ```

pub mod aggregator;
pub mod error;
pub mod labels;
pub mod range;
pub mod report;
pub mod schema;
pub mod totals;
pub mod utils;

pub use aggregator::{aggregate, filter_entries, matches_criteria, AggregatedRow, BalanceAggregator};
pub use error::{Result, TrialBalanceError};
pub use labels::LabelResolver;
pub use range::in_range;
pub use report::TrialBalance;
pub use schema::*;
pub use totals::{totals, Totals};
pub use utils::*;

use log::{debug, info};

pub struct TrialBalanceProcessor;

impl TrialBalanceProcessor {
    pub fn process(
        entries: &[JournalEntry],
        accounts: &[Account],
        criteria: &FilterCriteria,
    ) -> TrialBalance {
        debug!("{}", criteria);
        debug!(
            "Ledger contains {} journal entries and {} accounts",
            entries.len(),
            accounts.len()
        );

        let resolver = LabelResolver::new(accounts);
        let filtered = filter_entries(entries, criteria);
        debug!("{} entries passed the account and period filters", filtered.len());

        let rows = BalanceAggregator::new(&resolver).merge(&filtered);
        let grand_totals = totals(filtered.iter().copied());

        info!(
            "Trial balance computed: {} matched entries across {} accounts",
            filtered.len(),
            rows.len()
        );

        TrialBalance::new(rows, grand_totals, filtered.len())
    }

    pub fn process_request(request: &TrialBalanceRequest) -> TrialBalance {
        Self::process(&request.entries, &request.accounts, &request.criteria)
    }

    /// Like `process`, but checks the report's consistency before returning it.
    pub fn process_with_verification(
        entries: &[JournalEntry],
        accounts: &[Account],
        criteria: &FilterCriteria,
        tolerance: f64,
    ) -> Result<TrialBalance> {
        let report = Self::process(entries, accounts, criteria);

        report.verify(tolerance)?;

        Ok(report)
    }
}

pub fn compute_trial_balance(
    entries: &[JournalEntry],
    accounts: &[Account],
    criteria: &FilterCriteria,
) -> TrialBalance {
    TrialBalanceProcessor::process(entries, accounts, criteria)
}

pub fn process_with_verification(
    entries: &[JournalEntry],
    accounts: &[Account],
    criteria: &FilterCriteria,
    tolerance: f64,
) -> Result<TrialBalance> {
    TrialBalanceProcessor::process_with_verification(entries, accounts, criteria, tolerance)
}
