//! Result file writing and the end-of-run summary.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use colored::*;
use probr_common::outcome::ScanReport;
use tracing::info;

/// Writes both partitions to their files. Working hosts keep the status
/// they answered with; nonworking hosts are listed bare.
pub fn write_report(
    report: &ScanReport,
    working_path: &Path,
    nonworking_path: &Path,
) -> anyhow::Result<()> {
    let mut working: String = String::new();
    for outcome in &report.working {
        writeln!(working, "{} - {}", outcome.host, outcome.status)?;
    }

    let mut nonworking: String = String::new();
    for host in &report.nonworking {
        writeln!(nonworking, "{host}")?;
    }

    fs::write(working_path, working)
        .with_context(|| format!("failed to write '{}'", working_path.display()))?;
    fs::write(nonworking_path, nonworking)
        .with_context(|| format!("failed to write '{}'", nonworking_path.display()))?;
    Ok(())
}

pub fn print_summary(
    report: &ScanReport,
    elapsed: Duration,
    working_path: &Path,
    nonworking_path: &Path,
) {
    let total: ColoredString = report.total().to_string().bold();
    let working: ColoredString = report.working_count().to_string().green().bold();
    let nonworking: ColoredString = report.nonworking_count().to_string().red().bold();
    let took: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).yellow().bold();

    info!("Scan complete: {total} hosts in {took}");
    info!("Working hosts: {working} (saved to {})", working_path.display());
    info!(
        "Non-working hosts: {nonworking} (saved to {})",
        nonworking_path.display()
    );
}
