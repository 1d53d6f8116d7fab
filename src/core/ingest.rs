//! End-to-end ingest: text files → events → daily rows → sink.

use crate::core::aggregator::aggregate;
use crate::core::extractor::extract_named;
use crate::db::sink::{PutOutcome, StatsSink};
use crate::errors::AppResult;
use crate::models::daily_aggregate::DailyAggregate;
use crate::models::dialect::Dialect;
use crate::models::log_event::LogEvent;
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;

/// One exported text file, already decoded.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub name: String,
    pub text: String,
}

impl SourceText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub files: usize,
    pub events: usize,
    pub rows: usize,
    pub inserted: usize,
    pub skipped: usize,
}

pub struct IngestLogic;

impl IngestLogic {
    /// Read every `*.txt` file of `dir`, in file name order.
    pub fn load_sources(dir: &Path) -> AppResult<Vec<SourceText>> {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Input directory not found: {}", dir.display()),
            )
            .into());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            sources.push(SourceText::new(name, text));
        }
        Ok(sources)
    }

    /// Extract events from every source. The first bad blob aborts the batch.
    pub fn extract_sources(sources: &[SourceText], dialect: Dialect) -> AppResult<Vec<LogEvent>> {
        extract_named(
            sources.iter().map(|s| (s.name.as_str(), s.text.as_str())),
            dialect,
        )
    }

    /// Hand each row to the sink once. Returns `(inserted, skipped)`.
    pub fn persist<S: StatsSink + ?Sized>(
        rows: &[DailyAggregate],
        sink: &mut S,
    ) -> AppResult<(usize, usize)> {
        let mut inserted = 0;
        let mut skipped = 0;
        for row in rows {
            match sink.put(row)? {
                PutOutcome::Inserted => inserted += 1,
                PutOutcome::Duplicate => skipped += 1,
            }
        }
        Ok((inserted, skipped))
    }

    pub fn run<S: StatsSink + ?Sized>(
        sources: &[SourceText],
        dialect: Dialect,
        birth_date: NaiveDate,
        sink: &mut S,
    ) -> AppResult<IngestReport> {
        let events = Self::extract_sources(sources, dialect)?;
        let rows = aggregate(&events, birth_date);
        let (inserted, skipped) = Self::persist(&rows, sink)?;

        Ok(IngestReport {
            files: sources.len(),
            events: events.len(),
            rows: rows.len(),
            inserted,
            skipped,
        })
    }
}
