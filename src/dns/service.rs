//! Domain resolution service
//!
//! [`DomainResolver`] is the seam the orchestrator resolves domains
//! through. [`ForwardResolver`] is the production implementation backed
//! by hickory; tests substitute their own implementations.

use super::forward::{create_resolver, forward_lookup, ResolutionError};
use crate::config::{LookupConfig, DEFAULT_DNS_SERVER, DEFAULT_DNS_TIMEOUT_MS};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Resolves a domain to its IPv4 addresses
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Return the A records of `domain` in answer order.
    ///
    /// Zero records is `Ok` with an empty vector.
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolutionError>;
}

/// A-record resolver pinned to a single DNS server
///
/// # Examples
///
/// ```no_run
/// use bgpview::dns::{DomainResolver, ForwardResolver};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = ForwardResolver::new();
///     for ip in resolver.resolve("example.com").await? {
///         println!("{ip}");
///     }
///     Ok(())
/// }
/// ```
pub struct ForwardResolver {
    server: SocketAddr,
    resolver: TokioResolver,
}

impl ForwardResolver {
    /// Resolver for the default public server
    pub fn new() -> Self {
        Self::with_server(
            DEFAULT_DNS_SERVER,
            Duration::from_millis(DEFAULT_DNS_TIMEOUT_MS),
        )
    }

    /// Resolver for a specific server and query timeout
    pub fn with_server(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            server,
            resolver: create_resolver(server, timeout),
        }
    }

    /// Resolver built from the run configuration
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::with_server(config.dns_server, config.dns_timeout)
    }

    /// Address of the DNS server queries are sent to
    pub fn server(&self) -> SocketAddr {
        self.server
    }
}

impl Default for ForwardResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ForwardResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardResolver")
            .field("server", &self.server)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DomainResolver for ForwardResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolutionError> {
        tracing::debug!(%domain, server = %self.server, "querying A records");
        let ips = forward_lookup(&self.resolver, domain).await?;
        tracing::debug!(%domain, count = ips.len(), "resolved");
        Ok(ips)
    }
}
