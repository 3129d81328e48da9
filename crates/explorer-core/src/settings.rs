use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive explorer for US bikeshare trip data.
///
/// All exploration choices (city, month, day) are made interactively; these
/// flags only configure the environment the session runs in. Nothing is
/// persisted between runs.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare-explorer",
    about = "Explore historical bikeshare trip data for Chicago, New York City and Washington",
    version
)]
pub struct Settings {
    /// Directory containing the city CSV files (auto-discovered if not set)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Number of raw rows shown per page
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn load() -> Self {
        Settings::parse()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::parse_from(["bikeshare-explorer"]);
        assert!(settings.data_dir.is_none());
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.log_level, "WARNING");
    }

    #[test]
    fn test_settings_explicit_values() {
        let settings = Settings::parse_from([
            "bikeshare-explorer",
            "--data-dir",
            "/srv/bikeshare",
            "--page-size",
            "10",
            "--log-level",
            "DEBUG",
        ]);
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_settings_page_size_range_enforced() {
        let result = Settings::try_parse_from(["bikeshare-explorer", "--page-size", "0"]);
        assert!(result.is_err());
        let result = Settings::try_parse_from(["bikeshare-explorer", "--page-size", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["bikeshare-explorer", "--log-level", "TRACE2"]);
        assert!(result.is_err());
    }
}
