use crate::schema::{Account, AccountNumber};
use log::debug;
use std::collections::HashMap;

/// Lookup from account number to display label.
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    labels: HashMap<AccountNumber, String>,
}

impl LabelResolver {
    /// Later accounts overwrite earlier ones with the same number.
    pub fn new(accounts: &[Account]) -> Self {
        let mut labels = HashMap::with_capacity(accounts.len());

        for account in accounts {
            if let Some(previous) = labels.insert(account.number, account.label.clone()) {
                debug!(
                    "Duplicate account {}: label '{}' replaced by '{}'",
                    account.number, previous, account.label
                );
            }
        }

        Self { labels }
    }

    pub fn resolve(&self, account: AccountNumber) -> Option<&str> {
        self.labels.get(&account).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
