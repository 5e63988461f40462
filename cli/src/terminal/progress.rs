use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Builds the scan progress bar, one tick per completed host.
pub fn scan_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb: ProgressBar = ProgressBar::new(total as u64);
    let style: ProgressStyle = ProgressStyle::with_template(
        "{spinner:.blue} Scanning hosts [{bar:40.green/black}] {pos}/{len} ({eta})",
    )
    .unwrap()
    .progress_chars("█▓░");

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
