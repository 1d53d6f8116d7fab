//! Date utilities: ISO dates and the period expressions accepted by
//! `list --period` and `export --range`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period to an inclusive `(first, last)` date range.
///
/// Supported forms:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `start:end`, both sides in the same form
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = p.split_once(':') {
        let (start, end) = (start.trim(), end.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "'{p}': start and end must have the same format"
            )));
        }
        let (first, _) = single_period(start)?;
        let (_, last) = single_period(end)?;
        if first > last {
            return Err(AppError::InvalidDate(format!("'{p}': start is after end")));
        }
        return Ok((first, last));
    }

    single_period(p.trim())
}

fn single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let year: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first = parse_date(&format!("{p}-01")).ok_or_else(invalid)?;
            Ok((first, month_last_day(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Last day of the month `d` falls in.
pub fn month_last_day(d: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}
