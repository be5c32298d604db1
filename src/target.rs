//! Target classification and loading

use crate::config::LookupConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;
use std::path::PathBuf;

static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$").expect("domain pattern is a valid regex")
});

/// A classified input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Dotted name ending in an alphabetic TLD
    Domain(String),
    /// IPv4 or IPv6 literal
    IpAddress(IpAddr),
    /// Neither of the above
    Invalid(String),
}

/// Classify a target string as a domain, an IP literal, or neither.
///
/// The domain check runs first. The two patterns never overlap since an
/// IPv4 literal ends in digits and an IPv6 literal contains colons.
pub fn classify(input: &str) -> Target {
    if DOMAIN_PATTERN.is_match(input) {
        Target::Domain(input.to_string())
    } else if let Ok(ip) = input.parse::<IpAddr>() {
        Target::IpAddress(ip)
    } else {
        Target::Invalid(input.to_string())
    }
}

/// Error raised while collecting the targets of a run
#[derive(Debug, thiserror::Error)]
pub enum TargetSourceError {
    /// The target list file could not be read
    #[error("failed to read target list {}", path.display())]
    FileRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Collect the raw target strings for a run.
///
/// A single `--url` target wins over `--list`. With neither set the list
/// is empty. Lines are returned untrimmed; the orchestrator trims them and
/// skips blanks.
pub fn load_targets(config: &LookupConfig) -> Result<Vec<String>, TargetSourceError> {
    if let Some(target) = &config.target {
        return Ok(vec![target.clone()]);
    }

    let Some(path) = &config.list_path else {
        return Ok(Vec::new());
    };

    let content = std::fs::read_to_string(path).map_err(|source| TargetSourceError::FileRead {
        path: path.clone(),
        source,
    })?;

    let targets: Vec<String> = content.trim().split('\n').map(str::to_string).collect();
    tracing::debug!(path = %path.display(), count = targets.len(), "loaded target list");
    Ok(targets)
}
