use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrialBalanceError {
    #[error("Invalid account bound '{0}': expected an account number or '*'")]
    InvalidAccountBound(String),

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("Invalid {field} range: start {start} is after end {end}")]
    InvalidRange {
        field: &'static str,
        start: String,
        end: String,
    },

    #[error("Totals mismatch on {column}: entries sum to {entries_total}, rows sum to {rows_total} (difference {difference})")]
    TotalsMismatch {
        column: &'static str,
        entries_total: f64,
        rows_total: f64,
        difference: f64,
    },

    #[error("Balance mismatch on account {account}: debit ({debit}) - credit ({credit}) != balance ({balance})")]
    BalanceMismatch {
        account: u32,
        debit: f64,
        credit: f64,
        balance: f64,
    },

    #[error("Rows out of order: account {previous} is followed by account {next}")]
    OrderingViolation { previous: u32, next: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrialBalanceError>;
