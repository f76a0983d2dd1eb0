use anyhow::Context;
use chrono::{Duration, Utc};
use gridhealth_core::{calculate_healthiness, load_grid, AnalyzerConfig, TimeWindow};

use super::reporting;
use crate::cli::args::{OutputFormat, SummarizeArgs};
use crate::exit_codes::EXIT_SUCCESS;

pub fn run(args: SummarizeArgs) -> anyhow::Result<i32> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(min_runs) = args.min_runs {
        config.min_runs = min_runs;
    }

    let window = resolve_window(args.start, args.end, args.days, Utc::now().timestamp_millis())?;
    let grid = load_grid(&args.grid)?;
    tracing::info!(
        tab = %args.tab,
        rows = grid.rows.len(),
        columns = grid.columns.len(),
        start = window.start,
        end = window.end,
        "summarizing grid"
    );

    let report = calculate_healthiness(&grid, window, &args.tab, &config);

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => reporting::render_text(&report),
    };
    match &args.out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    eprint!("{}", reporting::render_summary(&report));
    Ok(EXIT_SUCCESS)
}

/// Explicit bounds win; a missing start is `days` before the end, a missing end is `now_ms`.
pub(crate) fn resolve_window(
    start: Option<i64>,
    end: Option<i64>,
    days: u32,
    now_ms: i64,
) -> anyhow::Result<TimeWindow> {
    let end = end.unwrap_or(now_ms);
    let start = match start {
        Some(start) => start,
        None => end
            .checked_sub(Duration::days(i64::from(days)).num_milliseconds())
            .ok_or_else(|| {
                anyhow::anyhow!("config error: window of {days} days before {end} is out of range")
            })?,
    };
    if start > end {
        anyhow::bail!("config error: window start {start} is after end {end}");
    }
    Ok(TimeWindow::new(start, end))
}
