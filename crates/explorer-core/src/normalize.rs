//! Free-form user token normalization.
//!
//! Maps whatever the user typed at a prompt — full name, 3-letter
//! abbreviation, or the numeric index from the menu — onto canonical
//! [`City`], [`MonthFilter`] and [`DayFilter`] values. Matching is
//! case-insensitive and whitespace-trimmed. Anything unrecognised fails with
//! [`ExplorerError::InvalidSelection`] and the caller re-prompts.
//!
//! The month and day tables are independent: `All` is menu index 0 for
//! months but index 8 for days (Monday = 1).

use crate::error::{ExplorerError, Result};
use crate::models::{City, DayFilter, MonthFilter};

/// Resolve a city token.
///
/// Accepts the canonical name, the first three letters, the 1-based menu
/// index, and the historical synonyms `"nyc"` / `"new york"`.
pub fn normalize_city(token: &str) -> Result<City> {
    match token.trim().to_lowercase().as_str() {
        "chicago" | "chi" | "1" => Ok(City::Chicago),
        "new york city" | "new york" | "nyc" | "new" | "2" => Ok(City::NewYorkCity),
        "washington" | "was" | "3" => Ok(City::Washington),
        _ => Err(ExplorerError::InvalidSelection(token.trim().to_string())),
    }
}

/// Resolve a month-filter token. `"all"` / `"0"` selects no filter.
pub fn normalize_month(token: &str) -> Result<MonthFilter> {
    match token.trim().to_lowercase().as_str() {
        "all" | "0" => Ok(MonthFilter::All),
        "january" | "jan" | "1" => Ok(MonthFilter::January),
        "february" | "feb" | "2" => Ok(MonthFilter::February),
        "march" | "mar" | "3" => Ok(MonthFilter::March),
        "april" | "apr" | "4" => Ok(MonthFilter::April),
        "may" | "5" => Ok(MonthFilter::May),
        "june" | "jun" | "6" => Ok(MonthFilter::June),
        _ => Err(ExplorerError::InvalidSelection(token.trim().to_string())),
    }
}

/// Resolve a day-filter token. Days are numbered from Monday = 1;
/// `"all"` / `"8"` selects no filter.
pub fn normalize_day(token: &str) -> Result<DayFilter> {
    match token.trim().to_lowercase().as_str() {
        "monday" | "mon" | "1" => Ok(DayFilter::Monday),
        "tuesday" | "tue" | "2" => Ok(DayFilter::Tuesday),
        "wednesday" | "wed" | "3" => Ok(DayFilter::Wednesday),
        "thursday" | "thu" | "4" => Ok(DayFilter::Thursday),
        "friday" | "fri" | "5" => Ok(DayFilter::Friday),
        "saturday" | "sat" | "6" => Ok(DayFilter::Saturday),
        "sunday" | "sun" | "7" => Ok(DayFilter::Sunday),
        "all" | "8" => Ok(DayFilter::All),
        _ => Err(ExplorerError::InvalidSelection(token.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalize_city ─────────────────────────────────────────────────────

    #[test]
    fn test_city_full_names() {
        assert_eq!(normalize_city("chicago").unwrap(), City::Chicago);
        assert_eq!(normalize_city("new york city").unwrap(), City::NewYorkCity);
        assert_eq!(normalize_city("washington").unwrap(), City::Washington);
    }

    #[test]
    fn test_city_abbreviations() {
        assert_eq!(normalize_city("chi").unwrap(), City::Chicago);
        assert_eq!(normalize_city("new").unwrap(), City::NewYorkCity);
        assert_eq!(normalize_city("was").unwrap(), City::Washington);
    }

    #[test]
    fn test_city_synonyms() {
        assert_eq!(normalize_city("nyc").unwrap(), City::NewYorkCity);
        assert_eq!(normalize_city("new york").unwrap(), City::NewYorkCity);
    }

    #[test]
    fn test_city_numeric_indices() {
        assert_eq!(normalize_city("1").unwrap(), City::Chicago);
        assert_eq!(normalize_city("2").unwrap(), City::NewYorkCity);
        assert_eq!(normalize_city("3").unwrap(), City::Washington);
    }

    #[test]
    fn test_city_mixed_case_and_whitespace() {
        assert_eq!(normalize_city("  ChIcAgO ").unwrap(), City::Chicago);
        assert_eq!(normalize_city("NYC").unwrap(), City::NewYorkCity);
        assert_eq!(normalize_city("Washington\n").unwrap(), City::Washington);
    }

    #[test]
    fn test_city_invalid_tokens() {
        for bad in ["boston", "4", "", "chicagoo", "ny c"] {
            assert!(
                matches!(
                    normalize_city(bad),
                    Err(ExplorerError::InvalidSelection(_))
                ),
                "token {bad:?} should be rejected"
            );
        }
    }

    // ── normalize_month ────────────────────────────────────────────────────

    #[test]
    fn test_month_all_is_index_zero() {
        assert_eq!(normalize_month("all").unwrap(), MonthFilter::All);
        assert_eq!(normalize_month("0").unwrap(), MonthFilter::All);
    }

    #[test]
    fn test_month_names_indices_abbreviations() {
        assert_eq!(normalize_month("january").unwrap(), MonthFilter::January);
        assert_eq!(normalize_month("jan").unwrap(), MonthFilter::January);
        assert_eq!(normalize_month("1").unwrap(), MonthFilter::January);
        assert_eq!(normalize_month("JUN").unwrap(), MonthFilter::June);
        assert_eq!(normalize_month("6").unwrap(), MonthFilter::June);
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        // Only January–June are selectable.
        assert!(normalize_month("july").is_err());
        assert!(normalize_month("7").is_err());
        assert!(normalize_month("december").is_err());
    }

    // ── normalize_day ──────────────────────────────────────────────────────

    #[test]
    fn test_day_monday_is_index_one() {
        assert_eq!(normalize_day("1").unwrap(), DayFilter::Monday);
        assert_eq!(normalize_day("monday").unwrap(), DayFilter::Monday);
        assert_eq!(normalize_day("mon").unwrap(), DayFilter::Monday);
    }

    #[test]
    fn test_day_all_is_index_eight() {
        assert_eq!(normalize_day("all").unwrap(), DayFilter::All);
        assert_eq!(normalize_day("8").unwrap(), DayFilter::All);
    }

    #[test]
    fn test_day_full_week() {
        assert_eq!(normalize_day("tue").unwrap(), DayFilter::Tuesday);
        assert_eq!(normalize_day("Saturday").unwrap(), DayFilter::Saturday);
        assert_eq!(normalize_day("7").unwrap(), DayFilter::Sunday);
    }

    #[test]
    fn test_day_invalid_tokens() {
        assert!(normalize_day("9").is_err());
        assert!(normalize_day("funday").is_err());
        assert!(normalize_day("").is_err());
    }

    // ── table independence ─────────────────────────────────────────────────

    #[test]
    fn test_index_tables_are_not_symmetric() {
        // "0" means "all" for months but is not a valid day.
        assert_eq!(normalize_month("0").unwrap(), MonthFilter::All);
        assert!(normalize_day("0").is_err());
        // "8" means "all" for days but is not a valid month.
        assert_eq!(normalize_day("8").unwrap(), DayFilter::All);
        assert!(normalize_month("8").is_err());
    }
}
