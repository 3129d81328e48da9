//! CSV dataset loading for the Bikeshare Explorer.
//!
//! Resolves a [`City`] to its backing CSV file, parses every row into a
//! [`TripRecord`] with derived `month` / `day_of_week` / `hour` columns, and
//! applies the requested month and day filters. A fresh table is built on
//! every call; nothing is cached.

use std::io::BufReader;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::{City, DayFilter, MonthFilter, TripRecord};
use tracing::debug;

/// Timestamp layout used by the city exports, e.g. `2017-01-01 00:07:57`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the dataset for `city` from `data_dir`, filtered by `month` and `day`.
///
/// Both filters AND together; [`MonthFilter::All`] / [`DayFilter::All`]
/// disable the respective predicate. Source row order is preserved.
///
/// # Errors
///
/// * [`ExplorerError::DatasetUnavailable`] when the backing file cannot be
///   opened — fatal, no retry.
/// * [`ExplorerError::MalformedRecord`] when a required column is missing or
///   a timestamp / numeric value does not parse — fatal, no graceful skip.
pub fn load(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<Vec<TripRecord>> {
    let path = data_dir.join(city.data_file());
    let file = std::fs::File::open(&path).map_err(|source| ExplorerError::DatasetUnavailable {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let month_filter = month.month_number();
    let day_filter = day.day_index();

    let mut rows: Vec<TripRecord> = Vec::new();
    let mut rows_read = 0u64;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows_read += 1;

        let trip = parse_record(&record, &columns, line)?;

        if let Some(m) = month_filter {
            if trip.month != m {
                continue;
            }
        }
        if let Some(d) = day_filter {
            if trip.day_of_week != d {
                continue;
            }
        }
        rows.push(trip);
    }

    debug!(
        "Loaded {} of {} rows from {} (month={}, day={})",
        rows.len(),
        rows_read,
        path.display(),
        month,
        day,
    );

    Ok(rows)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Positions of the known columns within a dataset header row.
///
/// The leading unnamed index column is never looked up, so it is ignored
/// naturally. `gender` / `birth_year` are absent for washington.
struct ColumnIndex {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| ExplorerError::MalformedRecord {
                line: 1,
                reason: format!("missing column `{}`", name),
            })
        };

        Ok(ColumnIndex {
            start_time: require("Start Time")?,
            end_time: require("End Time")?,
            start_station: require("Start Station")?,
            end_station: require("End Station")?,
            trip_duration: require("Trip Duration")?,
            user_type: require("User Type")?,
            gender: find("Gender"),
            birth_year: find("Birth Year"),
        })
    }
}

/// Parse one CSV record into a [`TripRecord`], deriving the time columns.
fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnIndex,
    line: u64,
) -> Result<TripRecord> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let start_time = parse_timestamp(field(columns.start_time), "Start Time", line)?;
    let end_time = parse_timestamp(field(columns.end_time), "End Time", line)?;
    let trip_duration = parse_seconds(field(columns.trip_duration), line)?;

    let gender = columns
        .gender
        .map(|idx| field(idx))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string());
    let birth_year = match columns.birth_year.map(|idx| field(idx)) {
        None | Some("") => None,
        Some(value) => Some(parse_birth_year(value, line)?),
    };

    Ok(TripRecord {
        start_time,
        end_time,
        start_station: field(columns.start_station).to_string(),
        end_station: field(columns.end_station).to_string(),
        trip_duration,
        user_type: field(columns.user_type).to_string(),
        gender,
        birth_year,
        month: start_time.month(),
        day_of_week: start_time.weekday().num_days_from_monday(),
        hour: start_time.hour(),
    })
}

fn parse_timestamp(value: &str, column: &str, line: u64) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        ExplorerError::MalformedRecord {
            line,
            reason: format!("invalid {} timestamp `{}`", column, value),
        }
    })
}

/// Parse a trip duration in seconds.
///
/// The pandas-produced exports sometimes write durations as floats
/// (`680.0`); those are accepted and truncated.
fn parse_seconds(value: &str, line: u64) -> Result<u64> {
    if let Ok(n) = value.parse::<u64>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Ok(f.trunc() as u64),
        _ => Err(ExplorerError::MalformedRecord {
            line,
            reason: format!("invalid trip duration `{}`", value),
        }),
    }
}

/// Parse a birth year, accepting the float form (`1992.0`) in the exports.
fn parse_birth_year(value: &str, line: u64) -> Result<i32> {
    if let Ok(n) = value.parse::<i32>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i32),
        _ => Err(ExplorerError::MalformedRecord {
            line,
            reason: format!("invalid birth year `{}`", value),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
