//! Destinations for daily rows.
//!
//! A sink stores one row per date. Writing a date that is already stored is
//! not an error: `put` answers [`PutOutcome::Duplicate`] and the caller moves
//! on. Every other failure comes back as `Err`.

use crate::db::queries::insert_stats_row;
use crate::errors::AppResult;
use crate::models::daily_aggregate::DailyAggregate;
use chrono::NaiveDate;
use rusqlite::{Connection, ffi};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    Duplicate,
}

pub trait StatsSink {
    fn put(&mut self, row: &DailyAggregate) -> AppResult<PutOutcome>;
}

/// True when `err` is a violation of the `stats.date` key.
pub fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}

/// Writes into the `stats` table.
pub struct SqliteSink<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteSink<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl StatsSink for SqliteSink<'_> {
    fn put(&mut self, row: &DailyAggregate) -> AppResult<PutOutcome> {
        match insert_stats_row(self.conn, row) {
            Ok(_) => Ok(PutOutcome::Inserted),
            Err(e) if is_duplicate_key(&e) => Ok(PutOutcome::Duplicate),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps rows in memory; backs `ingest --dry-run`.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: BTreeMap<NaiveDate, DailyAggregate>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored rows, ordered by date.
    pub fn rows(&self) -> Vec<DailyAggregate> {
        self.rows.values().cloned().collect()
    }
}

impl StatsSink for MemorySink {
    fn put(&mut self, row: &DailyAggregate) -> AppResult<PutOutcome> {
        match self.rows.entry(row.date) {
            Entry::Occupied(_) => Ok(PutOutcome::Duplicate),
            Entry::Vacant(slot) => {
                slot.insert(row.clone());
                Ok(PutOutcome::Inserted)
            }
        }
    }
}
