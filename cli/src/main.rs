mod commands;
mod output;
mod terminal;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use indicatif::ProgressBar;
use tracing::info;

use commands::CommandLine;
use probr_common::config::ProbeConfig;
use probr_common::input;
use probr_common::outcome::{ProbeOutcome, ScanReport};
use probr_common::target::Target;
use probr_core::probe::HttpProber;
use probr_core::scheduler::{self, ProgressFn};
use terminal::{logging, progress};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: CommandLine = CommandLine::parse_args();
    logging::init(args.quiet);

    let config: ProbeConfig = args.to_config();

    let targets: Vec<Target> = input::load_host_list(&args.input)
        .with_context(|| format!("cannot read host list '{}'", args.input.display()))?;

    if targets.is_empty() {
        info!("No hosts found in the input file.");
        return Ok(());
    }

    let total: usize = targets.len();
    info!("Scanning {total} hosts with {} workers", config.workers);

    let prober: Arc<HttpProber> =
        Arc::new(HttpProber::new(&config).context("failed to build HTTP client")?);

    let bar: ProgressBar = progress::scan_bar(total, args.quiet);
    let bar_ref: ProgressBar = bar.clone();
    let on_progress: ProgressFn = Box::new(move |done| {
        bar_ref.set_position(done as u64);
    });

    let start: Instant = Instant::now();
    let outcomes: Vec<ProbeOutcome> =
        scheduler::run_scan(prober, &config, targets, Some(on_progress)).await?;
    bar.finish_and_clear();

    let report: ScanReport = ScanReport::from_outcomes(outcomes);
    output::write_report(&report, &args.working_file, &args.nonworking_file)?;
    output::print_summary(
        &report,
        start.elapsed(),
        &args.working_file,
        &args.nonworking_file,
    );

    Ok(())
}
