use chrono::NaiveDate;
use trial_balance_builder::{
    process_with_verification, Account, FilterCriteria, JournalEntry, TrialBalanceRequest,
};

fn main() {
    let accounts = vec![
        Account {
            number: 1000,
            label: "Cash".to_string(),
        },
        Account {
            number: 1200,
            label: "Accounts Receivable".to_string(),
        },
        Account {
            number: 4000,
            label: "Sales".to_string(),
        },
        Account {
            number: 6100,
            label: "Rent".to_string(),
        },
    ];

    let jan = NaiveDate::from_ymd_opt(2016, 1, 31).unwrap();
    let feb = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
    let mar = NaiveDate::from_ymd_opt(2016, 3, 31).unwrap();

    let entries = vec![
        JournalEntry { account: 1000, period: jan, debit: 5_000.0, credit: 0.0 },
        JournalEntry { account: 4000, period: jan, debit: 0.0, credit: 5_000.0 },
        JournalEntry { account: 1200, period: feb, debit: 2_500.0, credit: 0.0 },
        JournalEntry { account: 4000, period: feb, debit: 0.0, credit: 2_500.0 },
        JournalEntry { account: 6100, period: feb, debit: 1_200.0, credit: 0.0 },
        JournalEntry { account: 1000, period: feb, debit: 0.0, credit: 1_200.0 },
        // Posted to an account missing from the chart
        JournalEntry { account: 9999, period: mar, debit: 40.0, credit: 0.0 },
        JournalEntry { account: 1000, period: mar, debit: 0.0, credit: 40.0 },
    ];

    let criteria = FilterCriteria::parse("1000", "*", "2016-02", "2016-03")
        .expect("form input should parse");

    let report = process_with_verification(&entries, &accounts, &criteria, 0.01)
        .expect("report should be internally consistent");

    if report.is_empty() {
        println!("No entries matched: {}", criteria);
        return;
    }

    println!(
        "Total Debit: {:.2} Total Credit: {:.2}",
        report.total_debit, report.total_credit
    );
    println!("{}", criteria);
    println!("{} matched entries", report.matched_entry_count);
    println!();
    println!(
        "{:<8} {:<22} {:>10} {:>10} {:>10}",
        "ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"
    );
    for row in &report.rows {
        println!(
            "{:<8} {:<22} {:>10.2} {:>10.2} {:>10.2}",
            row.account,
            row.description.as_deref().unwrap_or(""),
            row.debit,
            row.credit,
            row.balance
        );
    }

    let request = TrialBalanceRequest {
        accounts,
        entries,
        criteria,
    };
    println!();
    println!(
        "Request as JSON:\n{}",
        serde_json::to_string_pretty(&request).expect("request should serialize")
    );
}
