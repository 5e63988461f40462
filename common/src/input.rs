//! Host list loading.
//!
//! Thin wrapper around the filesystem: read one host per line, trim,
//! drop blanks. Everything else about a host is the engine's problem.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::target::Target;

#[derive(Debug, Error)]
pub enum HostListError {
    #[error("failed to read host list '{path}'")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads the host list at `path`, skipping blank lines.
///
/// An unreadable file is fatal to the run; an empty list is not, the
/// caller decides what an empty scan means.
pub fn load_host_list(path: &Path) -> Result<Vec<Target>, HostListError> {
    let contents: String = fs::read_to_string(path).map_err(|source| {
        HostListError::Unreadable {
            path: path.display().to_string(),
            source,
        }
    })?;

    let targets: Vec<Target> = contents.lines().filter_map(Target::parse).collect();
    debug!(
        path = %path.display(),
        hosts = targets.len(),
        "host list loaded"
    );
    Ok(targets)
}
