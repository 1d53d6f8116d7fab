//! Age in completed months, over a fixed ten-month window.

use chrono::{Months, NaiveDate};

/// Number of month boundaries precomputed after the birth date.
pub const LOOKAHEAD_MONTHS: u32 = 10;

#[derive(Debug, Clone)]
pub struct MonthAgeBucketer {
    boundaries: Vec<NaiveDate>, // birth + 1..=10 months
}

impl MonthAgeBucketer {
    pub fn new(birth_date: NaiveDate) -> Self {
        // chrono clamps to the month's last day (Jan 31 + 1 month = Feb 28/29)
        let boundaries = (1..=LOOKAHEAD_MONTHS)
            .map_while(|k| birth_date.checked_add_months(Months::new(k)))
            .collect();

        Self { boundaries }
    }

    /// Completed months at `date`, or `None` from month 10 onwards.
    ///
    /// Dates before the first boundary, birth date included or not, are 0.
    pub fn bucket(&self, date: NaiveDate) -> Option<u32> {
        self.boundaries
            .iter()
            .position(|boundary| date < *boundary)
            .map(|i| i as u32)
    }
}

pub fn bucket(date: NaiveDate, birth_date: NaiveDate) -> Option<u32> {
    MonthAgeBucketer::new(birth_date).bucket(date)
}
