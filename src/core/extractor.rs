//! Event extraction from exported log text.
//!
//! Each blob is scanned line by line with a [`HeaderCursor`] that tracks the
//! date established by the most recent header. Candidate lines (clock prefix
//! plus a category keyword) are split on whitespace and turned into
//! [`LogEvent`]s attributed to that date.

use crate::core::vocabulary::{
    self, DAILY_BANNER_CHARS, FEEDING_UNIT, HEADER_DATE_FORMAT, MONTHLY_DELIMITER,
    WEEKDAY_SUFFIX_CHARS,
};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::dialect::Dialect;
use crate::models::log_event::LogEvent;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]").expect("clock prefix pattern is valid")
});

/// Date context of a single blob.
///
/// Monthly: a delimiter line followed by another line moves the cursor to the
/// date in that following line. Daily: line 0 sets the date once.
#[derive(Debug, Clone, Copy)]
pub struct HeaderCursor {
    dialect: Dialect,
    current: Option<NaiveDate>,
}

impl HeaderCursor {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            current: None,
        }
    }

    pub fn current(&self) -> Option<NaiveDate> {
        self.current
    }

    /// Feed line `index` (and a peek at its successor) into the cursor.
    pub fn advance(
        &mut self,
        index: usize,
        line: &str,
        next: Option<&str>,
        source: &str,
    ) -> AppResult<()> {
        match self.dialect {
            Dialect::Monthly => {
                if line.trim_end() == MONTHLY_DELIMITER
                    && let Some(header) = next
                {
                    self.current = Some(parse_header(header, 0, source)?);
                }
            }
            Dialect::Daily => {
                if index == 0 {
                    self.current = Some(parse_header(line, DAILY_BANNER_CHARS, source)?);
                }
            }
        }
        Ok(())
    }
}

/// Parse a header line: drop `prefix_chars` leading characters and the
/// weekday marker, then read `YYYY/MM/DD`.
pub fn parse_header(line: &str, prefix_chars: usize, source: &str) -> AppResult<NaiveDate> {
    let trimmed = line.trim_start_matches('\u{feff}').trim_end();
    let chars: Vec<char> = trimmed.chars().collect();

    if chars.len() <= prefix_chars + WEEKDAY_SUFFIX_CHARS {
        return Err(AppError::format(
            source,
            format!("header '{trimmed}' is too short"),
        ));
    }

    let body: String = chars[prefix_chars..chars.len() - WEEKDAY_SUFFIX_CHARS]
        .iter()
        .collect();

    NaiveDate::parse_from_str(&body, HEADER_DATE_FORMAT)
        .map_err(|e| AppError::format(source, format!("header '{trimmed}': {e}")))
}

/// A line is an event candidate when it starts with a 24h `HH:MM` clock
/// and mentions one of the category keywords.
pub fn is_event_line(line: &str) -> bool {
    !line.is_empty() && vocabulary::mentions_category(line) && CLOCK_PREFIX.is_match(line)
}

/// Parse a candidate line under `date`.
///
/// Returns `Ok(None)` when the label matches no category.
pub fn parse_event_line(line: &str, date: NaiveDate) -> AppResult<Option<LogEvent>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [clock, label, rest @ ..] = tokens.as_slice() else {
        return Err(AppError::parse(line, "expected a clock time and a label"));
    };

    let time =
        parse_time(clock).ok_or_else(|| AppError::parse(line, format!("invalid time '{clock}'")))?;

    let Some(category) = vocabulary::classify(label) else {
        return Ok(None);
    };

    let annotation = rest.first().copied();
    let value = match category {
        Category::Feeding => feeding_volume(line, annotation)?,
        Category::Stool => vocabulary::stool_volume(annotation),
    };

    Ok(Some(LogEvent::new(date, time, category, *label, value)))
}

fn feeding_volume(line: &str, token: Option<&str>) -> AppResult<u32> {
    let raw = token.ok_or_else(|| AppError::parse(line, "missing feeding volume"))?;
    raw.replace(FEEDING_UNIT, "")
        .parse::<u32>()
        .map_err(|e| AppError::parse(line, format!("invalid feeding volume '{raw}': {e}")))
}

/// Extract every event of one blob. `source` names the blob in errors.
pub fn extract_blob(text: &str, dialect: Dialect, source: &str) -> AppResult<Vec<LogEvent>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut cursor = HeaderCursor::new(dialect);
    let mut events = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        cursor.advance(index, line, lines.get(index + 1).copied(), source)?;

        if !is_event_line(line) {
            continue;
        }

        let date = cursor.current().ok_or_else(|| {
            AppError::format(source, format!("event line '{line}' precedes any date header"))
        })?;

        if let Some(event) = parse_event_line(line, date)? {
            events.push(event);
        }
    }

    Ok(events)
}

/// Extract events from `(name, text)` pairs, all read under the same
/// dialect. The first bad blob aborts the batch.
pub fn extract_named<'a, I>(sources: I, dialect: Dialect) -> AppResult<Vec<LogEvent>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut events = Vec::new();
    for (name, text) in sources {
        events.extend(extract_blob(text, dialect, name)?);
    }
    Ok(events)
}

/// Extract events from a batch of unnamed blobs (`input #1`, `input #2`, ...).
pub fn extract<S: AsRef<str>>(texts: &[S], dialect: Dialect) -> AppResult<Vec<LogEvent>> {
    let names: Vec<String> = (1..=texts.len()).map(|i| format!("input #{i}")).collect();
    extract_named(
        names.iter().map(String::as_str).zip(texts.iter().map(AsRef::as_ref)),
        dialect,
    )
}
