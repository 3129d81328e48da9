//! Rendering of statistics results for the console.
//!
//! Pure string builders so the output can be asserted on in tests; `main`
//! decides where the text goes.

use explorer_core::formatting::{format_duration, format_number};
use explorer_core::models::{TripRecord, DAY_NAMES, MONTH_NAMES};
use explorer_data::stats::{DurationStats, StationStats, TimeStats, UserStats};

/// The 40-dash separator printed between sections.
pub const SEPARATOR: &str = "----------------------------------------";

/// Shown when a statistics pass had no rows to work with.
pub const NO_DATA: &str = "no data to report for the selected filters";

pub fn time_stats_report(stats: &TimeStats) -> String {
    let month = MONTH_NAMES
        .get((stats.most_common_month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("unknown");
    let day = DAY_NAMES
        .get(stats.most_common_day as usize)
        .copied()
        .unwrap_or("unknown");
    format!(
        "the most common month is {}\n\
         the most common day of the week is {}\n\
         the most common hour of the day is {}",
        month, day, stats.most_common_hour
    )
}

pub fn station_stats_report(stats: &StationStats) -> String {
    format!(
        "the most commonly used start station is {}\n\
         the most commonly used end station is {}\n\
         the most common start and end station combination is {}",
        stats.most_common_start_station, stats.most_common_end_station, stats.most_common_trip
    )
}

pub fn duration_stats_report(stats: &DurationStats) -> String {
    format!(
        "The total travel time is {} seconds ({})\n\
         The average (mean) travel time is {} seconds",
        format_number(stats.total_duration as f64, 0),
        format_duration(stats.total_duration),
        format_number(stats.mean_duration, 2),
    )
}

pub fn user_stats_report(stats: &UserStats) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Customer counts by user type:".to_string());
    for (user_type, count) in &stats.user_type_counts {
        lines.push(format!("{:<14} {}", user_type, count));
    }

    if let Some(gender_counts) = &stats.gender_counts {
        lines.push("Customer counts by gender:".to_string());
        for (gender, count) in gender_counts {
            lines.push(format!("{:<14} {}", gender, count));
        }
    }

    if let Some(year) = stats.earliest_birth_year {
        lines.push(format!("the earliest user birth year is {}", year));
    }
    if let Some(year) = stats.latest_birth_year {
        lines.push(format!("the most recent user birth year is {}", year));
    }
    if let Some(year) = stats.most_common_birth_year {
        lines.push(format!("the most common user birth year is {}", year));
    }

    lines.join("\n")
}

/// One line per raw row: start time, duration, stations, user type.
pub fn raw_rows_report(rows: &[TripRecord]) -> String {
    rows.iter()
        .map(|r| {
            format!(
                "{} | {:>6}s | {} -> {} | {}",
                r.start_time.format("%Y-%m-%d %H:%M:%S"),
                r.trip_duration,
                r.start_station,
                r.end_station,
                if r.user_type.is_empty() {
                    "(unknown)"
                } else {
                    r.user_type.as_str()
                },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
