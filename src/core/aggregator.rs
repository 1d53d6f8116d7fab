//! Per-day aggregation of extracted events.

use crate::core::month_age::MonthAgeBucketer;
use crate::models::daily_aggregate::DailyAggregate;
use crate::models::log_event::LogEvent;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    count: i64,
    total: i64,
}

fn tally_by_date<'a, I>(events: I) -> BTreeMap<NaiveDate, Tally>
where
    I: Iterator<Item = &'a LogEvent>,
{
    let mut out: BTreeMap<NaiveDate, Tally> = BTreeMap::new();
    for ev in events {
        let t = out.entry(ev.owner_date).or_default();
        t.count += 1;
        t.total += i64::from(ev.value);
    }
    out
}

/// Group events into one row per owner date.
///
/// Every date seen in `events` yields a row; a category absent on that date
/// leaves its count and total at `None`. Rows come back sorted by date.
pub fn aggregate(events: &[LogEvent], birth_date: NaiveDate) -> Vec<DailyAggregate> {
    let bucketer = MonthAgeBucketer::new(birth_date);

    let feeding = tally_by_date(events.iter().filter(|e| e.category.is_feeding()));
    let stool = tally_by_date(events.iter().filter(|e| e.category.is_stool()));

    let universe: BTreeSet<NaiveDate> = events.iter().map(|e| e.owner_date).collect();

    universe
        .into_iter()
        .map(|date| {
            let f = feeding.get(&date);
            let s = stool.get(&date);
            DailyAggregate {
                date,
                feeding_count: f.map(|t| t.count),
                feeding_volume_total: f.map(|t| t.total),
                stool_count: s.map(|t| t.count),
                stool_volume_total: s.map(|t| t.total),
                age_of_month: bucketer.bucket(date),
            }
        })
        .collect()
}
