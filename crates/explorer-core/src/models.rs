use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names for display, indexed by month number minus one.
///
/// The datasets only cover January through June, but derived `month` values
/// are plain calendar months so the full year is mapped.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Day-of-week names for display, indexed Monday = 0 .. Sunday = 6.
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// One of the three cities with a backing dataset.
///
/// Chosen once per session iteration and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// The canonical lower-case name used in prompts and lookup tables.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the backing CSV dataset for this city.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether this city's dataset carries `Gender` / `Birth Year` columns.
    ///
    /// Washington's export lacks both.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// All cities in menu order.
    pub fn all() -> [City; 3] {
        [City::Chicago, City::NewYorkCity, City::Washington]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Month filter criterion. `All` applies no restriction.
///
/// Months are 1-based (January = 1); `All` sits at index 0 of the menu. The
/// datasets only cover January through June, so only those are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFilter {
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    /// The 1-based calendar month this filter matches, or `None` for `All`.
    pub fn month_number(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::January => Some(1),
            MonthFilter::February => Some(2),
            MonthFilter::March => Some(3),
            MonthFilter::April => Some(4),
            MonthFilter::May => Some(5),
            MonthFilter::June => Some(6),
        }
    }

    /// Name as shown in prompts; `"all"` for the unrestricted filter.
    pub fn name(&self) -> &'static str {
        match self.month_number() {
            None => "all",
            Some(m) => MONTH_NAMES[(m - 1) as usize],
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day-of-week filter criterion. `All` applies no restriction.
///
/// Days are 1-based with Monday = 1 in the menu; `All` is menu index 8.
/// Note the asymmetry with [`MonthFilter`], where `All` is index 0 — the two
/// lookup tables are deliberately independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayFilter {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    All,
}

impl DayFilter {
    /// The Monday=0 weekday index this filter matches, or `None` for `All`.
    ///
    /// Matches `chrono::Weekday::num_days_from_monday` so derived columns can
    /// be compared directly.
    pub fn day_index(&self) -> Option<u32> {
        match self {
            DayFilter::All => None,
            DayFilter::Monday => Some(0),
            DayFilter::Tuesday => Some(1),
            DayFilter::Wednesday => Some(2),
            DayFilter::Thursday => Some(3),
            DayFilter::Friday => Some(4),
            DayFilter::Saturday => Some(5),
            DayFilter::Sunday => Some(6),
        }
    }

    /// Name as shown in prompts; `"all"` for the unrestricted filter.
    pub fn name(&self) -> &'static str {
        match self.day_index() {
            None => "all",
            Some(d) => DAY_NAMES[d as usize],
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single trip read from a city dataset, with derived time columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// When the trip started.
    pub start_time: NaiveDateTime,
    /// When the trip ended.
    pub end_time: NaiveDateTime,
    /// Name of the station where the trip started.
    pub start_station: String,
    /// Name of the station where the trip ended.
    pub end_station: String,
    /// Trip length in seconds.
    pub trip_duration: u64,
    /// Rider category, e.g. "Subscriber" or "Customer". May be empty.
    #[serde(default)]
    pub user_type: String,
    /// Rider gender; absent for washington and for unreported riders.
    #[serde(default)]
    pub gender: Option<String>,
    /// Rider birth year; absent for washington and for unreported riders.
    #[serde(default)]
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time` (1 = January .. 12 = December).
    pub month: u32,
    /// Weekday of `start_time` (0 = Monday .. 6 = Sunday).
    pub day_of_week: u32,
    /// Hour of `start_time` (0–23).
    pub hour: u32,
}

impl TripRecord {
    /// The synthetic key used for most-common-trip statistics.
    pub fn trip_key(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}
