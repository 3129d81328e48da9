//! Descriptive statistics over a loaded trip table.
//!
//! Four independent, stateless passes: travel times, station popularity, trip
//! durations and user demographics. Each returns a structured result rather
//! than printed text so the computations can be tested in isolation.
//!
//! Mode computations break ties by picking the smallest value (the "first
//! mode"), which keeps results deterministic across runs.

use std::collections::BTreeMap;

use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::{City, TripRecord};
use serde::{Deserialize, Serialize};

// ── Result types ──────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStats {
    /// Most common calendar month (1 = January .. 12 = December).
    pub most_common_month: u32,
    /// Most common weekday (0 = Monday .. 6 = Sunday).
    pub most_common_day: u32,
    /// Most common start hour (0–23).
    pub most_common_hour: u32,
}

/// Most popular stations and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStats {
    pub most_common_start_station: String,
    pub most_common_end_station: String,
    /// The most common `"{start} to {end}"` combination.
    pub most_common_trip: String,
}

/// Total and average trip duration in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    pub total_duration: u64,
    pub mean_duration: f64,
}

/// User demographics. Gender and birth-year fields are only populated for
/// cities whose dataset carries those columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Distinct user types with occurrence counts, descending by count
    /// (ties: name ascending).
    pub user_type_counts: Vec<(String, u64)>,
    /// Gender counts, same ordering; `None` for washington.
    pub gender_counts: Option<Vec<(String, u64)>>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

// ── Statistics passes ─────────────────────────────────────────────────────────

/// Mode of the derived month, weekday and hour columns.
///
/// # Errors
///
/// [`ExplorerError::NoData`] when `rows` is empty.
pub fn time_stats(rows: &[TripRecord]) -> Result<TimeStats> {
    Ok(TimeStats {
        most_common_month: mode(rows.iter().map(|r| r.month)).ok_or(ExplorerError::NoData)?,
        most_common_day: mode(rows.iter().map(|r| r.day_of_week)).ok_or(ExplorerError::NoData)?,
        most_common_hour: mode(rows.iter().map(|r| r.hour)).ok_or(ExplorerError::NoData)?,
    })
}

/// Mode of the start station, end station and trip combination.
///
/// # Errors
///
/// [`ExplorerError::NoData`] when `rows` is empty.
pub fn station_stats(rows: &[TripRecord]) -> Result<StationStats> {
    Ok(StationStats {
        most_common_start_station: mode(rows.iter().map(|r| r.start_station.clone()))
            .ok_or(ExplorerError::NoData)?,
        most_common_end_station: mode(rows.iter().map(|r| r.end_station.clone()))
            .ok_or(ExplorerError::NoData)?,
        most_common_trip: mode(rows.iter().map(|r| r.trip_key())).ok_or(ExplorerError::NoData)?,
    })
}

/// Sum and arithmetic mean of trip durations.
///
/// # Errors
///
/// [`ExplorerError::NoData`] when `rows` is empty, so the mean is never a
/// division by zero.
pub fn trip_duration_stats(rows: &[TripRecord]) -> Result<DurationStats> {
    if rows.is_empty() {
        return Err(ExplorerError::NoData);
    }
    let total: u64 = rows.iter().map(|r| r.trip_duration).sum();
    Ok(DurationStats {
        total_duration: total,
        mean_duration: total as f64 / rows.len() as f64,
    })
}

/// User type, gender and birth-year breakdowns.
///
/// Never errors: an empty table simply yields empty counts. Rows with an
/// empty user type (missing in the source) are skipped, as are null genders
/// and birth years. Demographic fields are `None` for cities without those
/// columns, regardless of table contents.
pub fn user_stats(rows: &[TripRecord], city: City) -> UserStats {
    let user_type_counts = counts_descending(
        rows.iter()
            .map(|r| r.user_type.as_str())
            .filter(|t| !t.is_empty()),
    );

    if !city.has_demographics() {
        return UserStats {
            user_type_counts,
            gender_counts: None,
            earliest_birth_year: None,
            latest_birth_year: None,
            most_common_birth_year: None,
        };
    }

    let gender_counts = counts_descending(rows.iter().filter_map(|r| r.gender.as_deref()));

    let birth_years: Vec<i32> = rows.iter().filter_map(|r| r.birth_year).collect();

    UserStats {
        user_type_counts,
        gender_counts: Some(gender_counts),
        earliest_birth_year: birth_years.iter().min().copied(),
        latest_birth_year: birth_years.iter().max().copied(),
        most_common_birth_year: mode(birth_years.into_iter()),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Most frequent value, or `None` for an empty iterator.
///
/// A `BTreeMap` tally iterated in key order with a strict `>` comparison
/// guarantees the smallest value wins ties.
fn mode<T: Ord>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut tally: BTreeMap<T, u64> = BTreeMap::new();
    for value in values {
        *tally.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, u64)> = None;
    for (value, count) in tally {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Tally distinct values and order by descending count, then name ascending.
fn counts_descending<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut tally: BTreeMap<&str, u64> = BTreeMap::new();
    for value in values {
        *tally.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u64)> = tally
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

// ── Tests ─────────────────────────────────────────────────────────────────────
