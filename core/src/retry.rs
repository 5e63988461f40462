//! Timeout and retry policy around a single host's probes.
//!
//! Transient failures are masked here: an attempt that errors or runs
//! past its budget burns one retry slot, and only a host that fails
//! every attempt is finally classified unreachable. Nothing below this
//! layer ever surfaces to the scheduler as an error.

use tokio::time::timeout;
use tracing::debug;

use probr_common::config::ProbeConfig;
use probr_common::outcome::{ProbeOutcome, STATUS_UNREACHABLE};
use probr_common::target::Target;

use crate::probe::Prober;

/// Runs the full attempt chain for one target.
///
/// The first non-zero status wins and short-circuits remaining attempts.
/// A timed-out attempt is abandoned, not awaited further; dropping the
/// probe future cancels the in-flight request.
pub async fn check_host(
    prober: &dyn Prober,
    config: &ProbeConfig,
    target: &Target,
) -> ProbeOutcome {
    for attempt in 1..=config.max_attempts {
        let status: u16 = match timeout(config.attempt_timeout, prober.probe(target)).await {
            Ok(status) => status,
            Err(_elapsed) => {
                debug!(host = target.host(), attempt, "attempt timed out");
                STATUS_UNREACHABLE
            }
        };

        if status != STATUS_UNREACHABLE {
            debug!(host = target.host(), attempt, status, "host answered");
            return ProbeOutcome::new(target.host(), status);
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(config.retry_delay).await;
        }
    }

    debug!(
        host = target.host(),
        attempts = config.max_attempts,
        "all attempts exhausted"
    );
    ProbeOutcome::new(target.host(), STATUS_UNREACHABLE)
}
