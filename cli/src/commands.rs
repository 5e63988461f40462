use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use probr_common::config::{DEFAULT_USER_AGENT, ProbeConfig};

#[derive(Parser)]
#[command(name = "probr")]
#[command(about = "Checks a list of hosts for liveness over HTTP.")]
pub struct CommandLine {
    /// File with one host per line; blank lines are skipped
    pub input: PathBuf,

    /// Where to write hosts that answered, as '<host> - <status>'
    #[arg(short = 'w', long, default_value = "working.txt")]
    pub working_file: PathBuf,

    /// Where to write hosts that never answered
    #[arg(short = 'n', long, default_value = "nonworking.txt")]
    pub nonworking_file: PathBuf,

    /// Concurrent workers
    #[arg(short = 'c', long, default_value_t = 200)]
    pub concurrency: usize,

    /// Per-attempt timeout in seconds
    #[arg(short = 't', long, default_value_t = 7)]
    pub timeout: u64,

    /// Attempts per host before giving up
    #[arg(short = 'r', long, default_value_t = 3)]
    pub retries: u32,

    /// Delay between attempts in seconds
    #[arg(short = 'd', long, default_value_t = 1)]
    pub retry_delay: u64,

    /// User-Agent header to send
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Verify TLS certificates (off by default; self-signed hosts are
    /// valid targets)
    #[arg(long)]
    pub verify_tls: bool,

    /// Suppress the progress bar and summary, print only errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> ProbeConfig {
        ProbeConfig {
            workers: self.concurrency.max(1),
            attempt_timeout: Duration::from_secs(self.timeout),
            max_attempts: self.retries.max(1),
            retry_delay: Duration::from_secs(self.retry_delay),
            user_agent: self.user_agent.clone(),
            verify_tls: self.verify_tls,
        }
    }
}
