// src/export/model.rs

use crate::models::daily_aggregate::DailyAggregate;
use serde::Serialize;

/// Flat export row; column names follow the `stats` table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StatsExport {
    pub date: String,
    pub milk_count: Option<i64>,
    pub milk_ml: Option<i64>,
    pub unchi_count: Option<i64>,
    pub unchi_amount: Option<i64>,
    pub age_of_month: Option<u32>,
}

impl From<&DailyAggregate> for StatsExport {
    fn from(row: &DailyAggregate) -> Self {
        Self {
            date: row.date_str(),
            milk_count: row.feeding_count,
            milk_ml: row.feeding_volume_total,
            unchi_count: row.stool_count,
            unchi_amount: row.stool_volume_total,
            age_of_month: row.age_of_month,
        }
    }
}
