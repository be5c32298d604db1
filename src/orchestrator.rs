//! Batch driver tying classification, resolution and reporting together

use crate::bgp::{BgpViewClient, LookupError, PrefixLookupService};
use crate::config::{DisplayMode, LookupConfig};
use crate::dns::{DomainResolver, ForwardResolver};
use crate::report::report;
use crate::target::{classify, Target};
use std::io::{self, Write};
use std::net::IpAddr;

/// Runs targets through classify → resolve → report, one at a time
///
/// Every target is independent: an unrecognized string, a failed
/// resolution or a failed lookup is written to the output and the batch
/// carries on with the next item.
#[derive(Debug)]
pub struct Orchestrator<R, L> {
    resolver: R,
    lookup: L,
    mode: DisplayMode,
}

impl Orchestrator<ForwardResolver, BgpViewClient> {
    /// Orchestrator wired to the real DNS server and API from `config`
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self::new(
            ForwardResolver::from_config(config),
            BgpViewClient::from_config(config)?,
            config.display_mode,
        ))
    }
}

impl<R, L> Orchestrator<R, L>
where
    R: DomainResolver,
    L: PrefixLookupService,
{
    /// Create an orchestrator from its collaborators
    pub fn new(resolver: R, lookup: L, mode: DisplayMode) -> Self {
        Self {
            resolver,
            lookup,
            mode,
        }
    }

    /// Process every target in order
    pub async fn run<S, W>(&self, targets: &[S], out: &mut W) -> io::Result<()>
    where
        S: AsRef<str>,
        W: Write,
    {
        for target in targets {
            self.process_target(target.as_ref(), out).await?;
        }
        Ok(())
    }

    /// Process one raw target string; blank input is skipped
    pub async fn process_target<W: Write>(&self, raw: &str, out: &mut W) -> io::Result<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(());
        }

        match classify(raw) {
            Target::Domain(domain) => {
                let ips = match self.resolver.resolve(&domain).await {
                    Ok(ips) => ips,
                    Err(e) => {
                        tracing::debug!(%domain, error = ?e, "resolution failed");
                        writeln!(out, "{e}")?;
                        return Ok(());
                    }
                };
                if ips.is_empty() {
                    tracing::info!(%domain, "no A records, nothing to look up");
                }
                let ips: Vec<IpAddr> = ips.into_iter().map(IpAddr::V4).collect();
                report(&self.lookup, &ips, self.mode, out).await
            }
            Target::IpAddress(ip) => report(&self.lookup, &[ip], self.mode, out).await,
            Target::Invalid(input) => {
                writeln!(out, "[!] '{input}' is not a recognized domain or IP address")
            }
        }
    }
}
