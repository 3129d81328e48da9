//! Interactive prompt loop helpers.
//!
//! Each prompt prints its menu, reads one token and hands it to the pure
//! normalizers in `explorer-core`. A rejected token re-prompts indefinitely;
//! validation itself never touches I/O. All helpers are generic over
//! [`BufRead`] / [`Write`] so tests can drive them with in-memory buffers.
//!
//! End-of-input (EOF) returns `None` / `false` so a closed stdin winds the
//! session down instead of spinning on the retry loop.

use std::io::{self, BufRead, Write};

use explorer_core::models::{City, DayFilter, MonthFilter};
use explorer_core::normalize::{normalize_city, normalize_day, normalize_month};

const CITY_MENU: &str = "\
Enter the name of the city you would like to analyze:
1. chicago
2. new york city
3. washington";

const MONTH_MENU: &str = "\
Enter the month to filter by - or enter 'all':
0. All
1. January
2. February
3. March
4. April
5. May
6. June";

const DAY_MENU: &str = "\
Please enter the day of the week you would like to filter by or enter 'all':
1. Monday
2. Tuesday
3. Wednesday
4. Thursday
5. Friday
6. Saturday
7. Sunday
8. All";

/// Read one line, trimmed. `None` at end of input.
fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a city until a valid token arrives. `None` at end of input.
pub fn prompt_city<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<City>> {
    loop {
        writeln!(output, "{}", CITY_MENU)?;
        let Some(token) = read_token(input)? else {
            return Ok(None);
        };
        match normalize_city(&token) {
            Ok(city) => return Ok(Some(city)),
            Err(_) => writeln!(
                output,
                "please enter a valid selection: chicago, new york city, or washington"
            )?,
        }
    }
}

/// Prompt for a month filter until a valid token arrives. `None` at end of
/// input.
pub fn prompt_month<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MonthFilter>> {
    loop {
        writeln!(output, "{}", MONTH_MENU)?;
        let Some(token) = read_token(input)? else {
            return Ok(None);
        };
        match normalize_month(&token) {
            Ok(month) => return Ok(Some(month)),
            Err(_) => writeln!(
                output,
                "please enter a valid month to filter by, or enter 'all'"
            )?,
        }
    }
}

/// Prompt for a day filter until a valid token arrives. `None` at end of
/// input.
pub fn prompt_day<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<DayFilter>> {
    loop {
        writeln!(output, "{}", DAY_MENU)?;
        let Some(token) = read_token(input)? else {
            return Ok(None);
        };
        match normalize_day(&token) {
            Ok(day) => return Ok(Some(day)),
            Err(_) => writeln!(
                output,
                "please enter a valid day of the week to filter by, or enter 'all'"
            )?,
        }
    }
}

/// Ask a yes/no question. Only `"yes"` / `"y"` (case-insensitive) count as
/// yes; anything else, including end of input, is no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    writeln!(output, "\n{}", question)?;
    let Some(token) = read_token(input)? else {
        return Ok(false);
    };
    let lower = token.to_lowercase();
    Ok(lower == "yes" || lower == "y")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_city(input: &str) -> (Option<City>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        let city = prompt_city(&mut reader, &mut output).unwrap();
        (city, String::from_utf8(output).unwrap())
    }

    // ── prompt_city ───────────────────────────────────────────────────────────

    #[test]
    fn test_prompt_city_accepts_first_valid_token() {
        let (city, _) = run_city("chicago\n");
        assert_eq!(city, Some(City::Chicago));
    }

    #[test]
    fn test_prompt_city_reprompts_on_invalid() {
        let (city, output) = run_city("boston\nmars\n2\n");
        assert_eq!(city, Some(City::NewYorkCity));
        // Two rejections means two retry messages and three menus.
        assert_eq!(output.matches("please enter a valid selection").count(), 2);
        assert_eq!(output.matches("1. chicago").count(), 3);
    }

    #[test]
    fn test_prompt_city_eof_returns_none() {
        let (city, _) = run_city("");
        assert_eq!(city, None);
    }

    // ── prompt_month / prompt_day ─────────────────────────────────────────────

    #[test]
    fn test_prompt_month_numeric() {
        let mut reader = Cursor::new(b"0\n".to_vec());
        let mut output: Vec<u8> = Vec::new();
        let month = prompt_month(&mut reader, &mut output).unwrap();
        assert_eq!(month, Some(MonthFilter::All));
    }

    #[test]
    fn test_prompt_day_reprompts_then_accepts() {
        let mut reader = Cursor::new(b"0\nsun\n".to_vec());
        let mut output: Vec<u8> = Vec::new();
        let day = prompt_day(&mut reader, &mut output).unwrap();
        assert_eq!(day, Some(DayFilter::Sunday));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("please enter a valid day"));
    }

    // ── confirm ───────────────────────────────────────────────────────────────

    #[test]
    fn test_confirm_yes_variants() {
        for answer in ["yes\n", "y\n", "YES\n", "Y\n", " yEs \n"] {
            let mut reader = Cursor::new(answer.as_bytes().to_vec());
            let mut output: Vec<u8> = Vec::new();
            assert!(
                confirm(&mut reader, &mut output, "Continue?").unwrap(),
                "answer {answer:?} should confirm"
            );
        }
    }

    #[test]
    fn test_confirm_anything_else_is_no() {
        for answer in ["no\n", "n\n", "maybe\n", "\n", ""] {
            let mut reader = Cursor::new(answer.as_bytes().to_vec());
            let mut output: Vec<u8> = Vec::new();
            assert!(
                !confirm(&mut reader, &mut output, "Continue?").unwrap(),
                "answer {answer:?} should decline"
            );
        }
    }
}
