use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use explorer_core::models::City;

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised. Diagnostics
/// go to stderr so they never interleave with the interactive prompts on
/// stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

/// Map Python-style level names to `tracing` filter directives.
///
/// Unrecognised names pass through unchanged and fall back to `"warn"` when
/// `EnvFilter` rejects them.
fn normalise_level(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => upper,
    }
}

// ── Data-dir discovery ─────────────────────────────────────────────────────────

/// Attempt to locate the directory holding the city CSV files.
///
/// Checks `./data` then `.` and returns the first that contains at least one
/// of the known city files. Returns `None` when neither does, in which case
/// the user must pass `--data-dir`.
pub fn discover_data_dir() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_data_dir_in(&cwd)
}

/// Same as [`discover_data_dir`] but rooted at an explicit base directory,
/// enabling unit-testing without changing the process working directory.
pub fn discover_data_dir_in(base: &Path) -> Option<PathBuf> {
    let candidates = [base.join("data"), base.to_path_buf()];
    candidates
        .into_iter()
        .find(|dir| City::all().iter().any(|c| dir.join(c.data_file()).is_file()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalise_level_python_names() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("CRITICAL"), "debug");
        assert_eq!(normalise_level("INFO"), "info");
        assert_eq!(normalise_level("WARNING"), "warn");
        assert_eq!(normalise_level("ERROR"), "error");
    }

    #[test]
    fn test_normalise_level_case_insensitive() {
        assert_eq!(normalise_level("warning"), "warn");
        assert_eq!(normalise_level("Info"), "info");
    }

    #[test]
    fn test_normalise_level_unknown_passes_through() {
        assert_eq!(normalise_level("verbose"), "VERBOSE");
    }

    #[test]
    fn test_discover_data_dir_none_when_no_datasets() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(discover_data_dir_in(tmp.path()).is_none());
    }

    #[test]
    fn test_discover_data_dir_prefers_data_subdir() {
        let tmp = TempDir::new().expect("tempdir");
        let data = tmp.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("chicago.csv"), "").unwrap();
        // A city file in the base dir too; data/ must still win.
        std::fs::write(tmp.path().join("washington.csv"), "").unwrap();

        assert_eq!(discover_data_dir_in(tmp.path()), Some(data));
    }

    #[test]
    fn test_discover_data_dir_falls_back_to_base() {
        let tmp = TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("new_york_city.csv"), "").unwrap();

        assert_eq!(
            discover_data_dir_in(tmp.path()),
            Some(tmp.path().to_path_buf())
        );
    }
}
