use chrono::NaiveDate;
use serde::Serialize;

/// Per-day statistics row, keyed by `date`.
///
/// Category fields are `None` when the day has no event of that category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyAggregate {
    pub date: NaiveDate,                   // ⇔ stats.date (TEXT "YYYY-MM-DD", PK)
    pub feeding_count: Option<i64>,        // ⇔ stats.milk_count
    pub feeding_volume_total: Option<i64>, // ⇔ stats.milk_ml
    pub stool_count: Option<i64>,          // ⇔ stats.unchi_count
    pub stool_volume_total: Option<i64>,   // ⇔ stats.unchi_amount
    pub age_of_month: Option<u32>,         // ⇔ stats.age_of_month
}

impl DailyAggregate {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
