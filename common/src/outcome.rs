//! Final classification of probed hosts.

/// Sentinel status meaning no response was obtained after all attempts.
pub const STATUS_UNREACHABLE: u16 = 0;

/// The result of one host's full probe chain.
///
/// `status` is the first HTTP status observed, or [`STATUS_UNREACHABLE`]
/// when every attempt failed or timed out. Any real status counts as
/// reachable, 4xx and 5xx included; "responded" is the bar, not "healthy".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub host: String,
    pub status: u16,
}

impl ProbeOutcome {
    pub fn new(host: impl Into<String>, status: u16) -> Self {
        Self {
            host: host.into(),
            status,
        }
    }

    pub fn is_working(&self) -> bool {
        self.status != STATUS_UNREACHABLE
    }
}

/// A completed scan, partitioned for reporting.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Hosts that answered, with the status they answered with.
    pub working: Vec<ProbeOutcome>,
    /// Hosts that never answered.
    pub nonworking: Vec<String>,
}

impl ScanReport {
    /// Splits raw outcomes into working and nonworking sets.
    /// Every outcome lands in exactly one of the two.
    pub fn from_outcomes(outcomes: Vec<ProbeOutcome>) -> Self {
        let mut report: ScanReport = ScanReport::default();
        for outcome in outcomes {
            if outcome.is_working() {
                report.working.push(outcome);
            } else {
                report.nonworking.push(outcome.host);
            }
        }
        report
    }

    pub fn total(&self) -> usize {
        self.working.len() + self.nonworking.len()
    }

    pub fn working_count(&self) -> usize {
        self.working.len()
    }

    pub fn nonworking_count(&self) -> usize {
        self.nonworking.len()
    }
}
