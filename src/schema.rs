use crate::error::{Result, TrialBalanceError};
use crate::utils::{parse_account_bound, parse_period_bound, BoundSide};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub type AccountNumber = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Account {
    #[schemars(description = "Account number, unique within the chart of accounts (e.g., 1000 for Cash)")]
    pub number: AccountNumber,

    #[schemars(description = "Human readable account label shown in the DESCRIPTION column")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct JournalEntry {
    #[schemars(description = "Account number this entry is posted to. Need not exist in the account list.")]
    pub account: AccountNumber,

    #[schemars(description = "Period date in YYYY-MM-DD format")]
    pub period: NaiveDate,

    #[schemars(description = "Debit amount. Negative values are accepted as-is.")]
    pub debit: f64,

    #[schemars(description = "Credit amount. Negative values are accepted as-is.")]
    pub credit: f64,
}

/// User-selected filter. Every bound is optional; `None` leaves that side unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FilterCriteria {
    #[serde(default)]
    #[schemars(description = "Lowest account number to include (inclusive). Omit for no lower bound.")]
    pub start_account: Option<AccountNumber>,

    #[serde(default)]
    #[schemars(description = "Highest account number to include (inclusive). Omit for no upper bound.")]
    pub end_account: Option<AccountNumber>,

    #[serde(default)]
    #[schemars(description = "Earliest period to include (inclusive, YYYY-MM-DD). Omit for no lower bound.")]
    pub start_period: Option<NaiveDate>,

    #[serde(default)]
    #[schemars(description = "Latest period to include (inclusive, YYYY-MM-DD). Omit for no upper bound.")]
    pub end_period: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn accounts(start: Option<AccountNumber>, end: Option<AccountNumber>) -> Self {
        Self {
            start_account: start,
            end_account: end,
            ..Self::default()
        }
    }

    pub fn periods(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start_period: start,
            end_period: end,
            ..Self::default()
        }
    }

    /// Builds criteria from form text. Empty strings and `*` mean unbounded.
    ///
    /// Periods accept `YYYY-MM-DD` or `YYYY-MM`. A month-only start resolves to the
    /// first day of that month, a month-only end to the last day.
    pub fn parse(
        start_account: &str,
        end_account: &str,
        start_period: &str,
        end_period: &str,
    ) -> Result<Self> {
        Ok(Self {
            start_account: parse_account_bound(start_account)?,
            end_account: parse_account_bound(end_account)?,
            start_period: parse_period_bound(start_period, BoundSide::Start)?,
            end_period: parse_period_bound(end_period, BoundSide::End)?,
        })
    }

    /// Returns the criteria unchanged if neither range is inverted.
    ///
    /// The pipeline itself accepts inverted ranges and simply matches nothing;
    /// this is for callers that want to reject them up front.
    pub fn validated(self) -> Result<Self> {
        if let (Some(start), Some(end)) = (self.start_account, self.end_account) {
            if start > end {
                return Err(TrialBalanceError::InvalidRange {
                    field: "account",
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }

        if let (Some(start), Some(end)) = (self.start_period, self.end_period) {
            if start > end {
                return Err(TrialBalanceError::InvalidRange {
                    field: "period",
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }

        Ok(self)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_account.is_none()
            && self.end_account.is_none()
            && self.start_period.is_none()
            && self.end_period.is_none()
    }
}

fn bound_or_star<T: fmt::Display>(bound: Option<T>) -> String {
    bound.map_or_else(|| "*".to_string(), |b| b.to_string())
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Balance from account {} to {} from period {} to {}",
            bound_or_star(self.start_account),
            bound_or_star(self.end_account),
            bound_or_star(self.start_period),
            bound_or_star(self.end_period),
        )
    }
}

/// Everything one pipeline run needs: the pre-loaded collections plus the filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TrialBalanceRequest {
    #[serde(default)]
    #[schemars(description = "Chart of accounts used to resolve labels. Later duplicates win.")]
    pub accounts: Vec<Account>,

    #[serde(default)]
    #[schemars(description = "All journal entries of the ledger, in any order")]
    pub entries: Vec<JournalEntry>,

    #[serde(default)]
    #[schemars(description = "Account and period bounds. Omitted fields are unbounded.")]
    pub criteria: FilterCriteria,
}

impl TrialBalanceRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(TrialBalanceRequest)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
