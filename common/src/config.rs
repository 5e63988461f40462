use std::time::Duration;

/// Browser-like user agent; some hosts refuse or shape traffic from
/// obvious bot agents, which would skew liveness results.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

/// Immutable knobs for a scan run, fixed before any worker starts.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    /// Number of concurrent workers draining the host queue.
    pub workers: usize,
    /// Budget for a single probe attempt (GET plus HEAD fallback).
    pub attempt_timeout: Duration,
    /// Attempts per host before it is classified unreachable.
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next one.
    pub retry_delay: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Verify TLS certificates. Off by default: self-signed and expired
    /// endpoints still count as reachable targets.
    pub verify_tls: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            workers: 200,
            attempt_timeout: Duration::from_secs(7),
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verify_tls: false,
        }
    }
}
