mod bootstrap;
mod prompts;
mod report;

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use explorer_core::error::ExplorerError;
use explorer_core::models::{City, TripRecord};
use explorer_core::settings::Settings;
use explorer_data::{loader, paginator, stats};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = settings
        .data_dir
        .clone()
        .or_else(bootstrap::discover_data_dir)
        .context("no city datasets found; pass --data-dir")?;
    tracing::info!("Using data directory {}", data_dir.display());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    run(
        &mut input,
        &mut output,
        &data_dir,
        settings.page_size as usize,
    )
}

/// The session loop: prompts → load → four statistics passes → optional raw
/// pagination → restart prompt. Repeats until the user declines to restart
/// or input ends.
///
/// [`ExplorerError::DatasetUnavailable`] and
/// [`ExplorerError::MalformedRecord`] from the loader propagate fatally;
/// there is no retry for a broken dataset.
fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    data_dir: &Path,
    page_size: usize,
) -> anyhow::Result<()> {
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    loop {
        let Some(city) = prompts::prompt_city(input, output)? else {
            break;
        };
        let Some(month) = prompts::prompt_month(input, output)? else {
            break;
        };
        let Some(day) = prompts::prompt_day(input, output)? else {
            break;
        };
        writeln!(output, "{}", report::SEPARATOR)?;

        tracing::debug!("Loading {} (month={}, day={})", city, month, day);
        let rows = loader::load(data_dir, city, month, day)?;

        show_statistics(output, &rows, city)?;

        if prompts::confirm(
            input,
            output,
            "Would you like to view raw data? Enter yes or no.",
        )? {
            paginate_raw_data(input, output, &rows, page_size)?;
        }

        if !prompts::confirm(input, output, "Would you like to restart? Enter yes or no.")? {
            break;
        }
    }

    writeln!(output, "exiting...")?;
    Ok(())
}

/// Run the four independent statistics passes and print each section with
/// its elapsed time, mirroring the classic report layout.
fn show_statistics<W: Write>(
    output: &mut W,
    rows: &[TripRecord],
    city: City,
) -> anyhow::Result<()> {
    section(output, "The Most Frequent Times of Travel", || {
        stats::time_stats(rows).map(|s| report::time_stats_report(&s))
    })?;

    section(output, "The Most Popular Stations and Trip", || {
        stats::station_stats(rows).map(|s| report::station_stats_report(&s))
    })?;

    section(output, "Trip Duration", || {
        stats::trip_duration_stats(rows).map(|s| report::duration_stats_report(&s))
    })?;

    section(output, "User Stats", || {
        Ok(report::user_stats_report(&stats::user_stats(rows, city)))
    })?;

    Ok(())
}

/// Print one statistics section. An empty table renders the no-data line
/// instead of failing; any other error is fatal.
fn section<W: Write>(
    output: &mut W,
    title: &str,
    compute: impl FnOnce() -> Result<String, ExplorerError>,
) -> anyhow::Result<()> {
    writeln!(output, "\nCalculating {}...\n", title)?;
    let started = Instant::now();

    match compute() {
        Ok(body) => writeln!(output, "{}", body)?,
        Err(ExplorerError::NoData) => writeln!(output, "{}", report::NO_DATA)?,
        Err(err) => return Err(err.into()),
    }

    writeln!(
        output,
        "\nThis took {:.4} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(output, "{}", report::SEPARATOR)?;
    Ok(())
}

/// Page through raw rows, one window at a time, asking before each next
/// window. An explicit loop; the table length bounds the iteration.
fn paginate_raw_data<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rows: &[TripRecord],
    page_size: usize,
) -> anyhow::Result<()> {
    let mut index = 0;
    loop {
        let page = paginator::next_page(rows, index, page_size);
        if page.rows.is_empty() {
            writeln!(output, "no more raw data to show")?;
            break;
        }
        writeln!(output, "{}", report::raw_rows_report(page.rows))?;
        if !page.has_more {
            writeln!(output, "no more raw data to show")?;
            break;
        }
        index = page.next_index;

        if !prompts::confirm(
            input,
            output,
            "Would you like to view more raw data? Enter yes or no.",
        )? {
            break;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
