//! The central **abstraction** for host liveness probes.
//!
//! This module defines the interface a probing strategy must implement,
//! plus the production HTTP strategy. Higher layers (retry, scheduler)
//! depend only on the [`Prober`] trait, which keeps the engine testable
//! with scripted probers and leaves the wire details here.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use probr_common::config::ProbeConfig;
use probr_common::outcome::STATUS_UNREACHABLE;
use probr_common::target::Target;

/// One liveness check against one target.
///
/// Implementations must be infallible at the type level: every network
/// or protocol error resolves to [`STATUS_UNREACHABLE`], never an `Err`.
/// The returned future must be cancel-safe; the retry layer drops it on
/// timeout.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns the observed HTTP status, or 0 when the target never answered.
    async fn probe(&self, target: &Target) -> u16;
}

/// HTTP prober: GET first, fall back to HEAD when the GET errors out.
///
/// Some hosts reject or drop GETs (bot filtering, broken backends) while
/// still answering HEAD, so an error on the first request is not yet
/// "unreachable". Any real response counts, whatever the status code.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds the shared client from the run configuration.
    ///
    /// Certificate validation follows `config.verify_tls` and is off by
    /// default: hosts with self-signed or expired certificates are valid
    /// probe targets in this domain.
    pub fn new(config: &ProbeConfig) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &Target) -> u16 {
        let url: &str = target.url();

        match self.client.get(url).send().await {
            Ok(response) => response.status().as_u16(),
            Err(get_err) => {
                debug!(host = target.host(), error = %get_err, "GET failed, trying HEAD");
                match self.client.head(url).send().await {
                    Ok(response) => response.status().as_u16(),
                    Err(head_err) => {
                        debug!(host = target.host(), error = %head_err, "HEAD failed");
                        STATUS_UNREACHABLE
                    }
                }
            }
        }
    }
}
