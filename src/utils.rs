use crate::error::{Result, TrialBalanceError};
use crate::schema::AccountNumber;
use chrono::{Datelike, Days, NaiveDate};

/// Which end of a range a parsed bound belongs to. Decides how a month-only
/// period such as `2016-02` widens to a concrete day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Start,
    End,
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.checked_sub_days(Days::new(1))
}

fn is_unbounded_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "*"
}

/// Parses an account bound; empty or `*` yields `None` (unbounded).
pub fn parse_account_bound(raw: &str) -> Result<Option<AccountNumber>> {
    if is_unbounded_token(raw) {
        return Ok(None);
    }

    raw.trim()
        .parse::<AccountNumber>()
        .map(Some)
        .map_err(|_| TrialBalanceError::InvalidAccountBound(raw.to_string()))
}

/// Parses a period bound; empty or `*` yields `None` (unbounded).
///
/// Accepts `YYYY-MM-DD` as an exact day, or `YYYY-MM` which resolves to the first
/// day of the month for a start bound and the last day for an end bound.
pub fn parse_period_bound(raw: &str, side: BoundSide) -> Result<Option<NaiveDate>> {
    if is_unbounded_token(raw) {
        return Ok(None);
    }

    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    let month_start = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .map_err(|_| {
            TrialBalanceError::DateError(format!(
                "Invalid period bound: {}. Expected YYYY-MM-DD, YYYY-MM or '*'",
                raw
            ))
        })?;

    match side {
        BoundSide::Start => Ok(Some(month_start)),
        BoundSide::End => last_day_of_month(month_start.year(), month_start.month())
            .map(Some)
            .ok_or_else(|| {
                TrialBalanceError::DateError(format!("No last day of month for {}", raw))
            }),
    }
}

/// Parses a period range in the format "YYYY-MM", "YYYY-MM:YYYY-MM" or with either
/// side left open as `*` (e.g. "2016-01:*").
/// Returns (start_date, end_date)
pub fn parse_period_range(period: &str) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    let parts: Vec<&str> = period.split(':').collect();

    match parts.len() {
        // Single month: "2016-01" covers that whole month
        1 => Ok((
            parse_period_bound(parts[0], BoundSide::Start)?,
            parse_period_bound(parts[0], BoundSide::End)?,
        )),
        2 => Ok((
            parse_period_bound(parts[0], BoundSide::Start)?,
            parse_period_bound(parts[1], BoundSide::End)?,
        )),
        _ => Err(TrialBalanceError::DateError(format!(
            "Invalid period format: {}. Expected 'YYYY-MM' or 'YYYY-MM:YYYY-MM'",
            period
        ))),
    }
}
