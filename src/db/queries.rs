use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::daily_aggregate::DailyAggregate;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn insert_stats_row(conn: &Connection, row: &DailyAggregate) -> Result<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO stats (date, milk_count, milk_ml, unchi_count, unchi_amount, age_of_month)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![
        row.date_str(),
        row.feeding_count,
        row.feeding_volume_total,
        row.stool_count,
        row.stool_volume_total,
        row.age_of_month,
    ])
}

/// Load stored rows ordered by date, optionally limited to an inclusive range.
pub fn load_stats(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DailyAggregate>> {
    let (from, to) = match bounds {
        Some((a, b)) => (a.format("%Y-%m-%d").to_string(), b.format("%Y-%m-%d").to_string()),
        None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
    };

    let mut stmt = pool.conn.prepare(
        "SELECT date, milk_count, milk_ml, unchi_count, unchi_amount, age_of_month
         FROM stats
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_stats(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM stats", [], |row| row.get(0))
}

pub fn map_row(row: &Row) -> Result<DailyAggregate> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DailyAggregate {
        date,
        feeding_count: row.get("milk_count")?,
        feeding_volume_total: row.get("milk_ml")?,
        stool_count: row.get("unchi_count")?,
        stool_volume_total: row.get("unchi_amount")?,
        age_of_month: row.get("age_of_month")?,
    })
}
