use super::category::Category;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One care action read from a log line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEvent {
    pub owner_date: NaiveDate,    // date of the header the line sits under
    pub timestamp: NaiveDateTime, // owner_date + HH:MM of the line
    pub category: Category,
    pub subtype: String,          // raw label token, e.g. "ミルク"
    pub value: u32,               // ml for feeding, volume code 1..=4 for stool
}

impl LogEvent {
    /// Build an event attributed to `owner_date`.
    /// The timestamp always carries the owner date, even for late-night
    /// lines logged under the previous day's header.
    pub fn new(
        owner_date: NaiveDate,
        time: NaiveTime,
        category: Category,
        subtype: impl Into<String>,
        value: u32,
    ) -> Self {
        Self {
            owner_date,
            timestamp: owner_date.and_time(time),
            category,
            subtype: subtype.into(),
            value,
        }
    }
}
