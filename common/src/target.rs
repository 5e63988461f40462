//! # Probe Target Model
//!
//! A target is one host taken from the input list, normalized into a
//! fully-qualified URL that the prober can hit directly.
//!
//! Normalization is deliberately minimal: trim, skip blanks, and prepend
//! `https://` when no scheme is present. Malformed hostnames are not
//! rejected here; they simply fail their probes and end up nonworking.

/// A probe-ready host. Construct via [`Target::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    host: String,
    url: String,
}

impl Target {
    /// Parses one input line into a target.
    ///
    /// Returns `None` for lines that are empty after trimming; callers
    /// must skip those rather than probe them.
    pub fn parse(raw: &str) -> Option<Self> {
        let host: &str = raw.trim();
        if host.is_empty() {
            return None;
        }

        let url: String = if host.starts_with("http") {
            host.to_string()
        } else {
            format!("https://{host}")
        };

        Some(Self {
            host: host.to_string(),
            url,
        })
    }

    /// The host exactly as it appeared in the input (trimmed).
    /// Output files report this form, not the normalized URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The fully-qualified URL to probe.
    pub fn url(&self) -> &str {
        &self.url
    }
}
