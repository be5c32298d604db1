//! Forward DNS lookup functionality

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Error type for forward DNS operations
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// The exchange with the DNS server failed
    #[error("DNS resolution failed for {domain}: {message}")]
    Exchange {
        /// Domain that was queried
        domain: String,
        /// Resolver error message
        message: String,
    },
}

/// Look up the A records of `domain`.
///
/// The name is queried as fully qualified so no search domains apply.
/// Records are returned in answer order without deduplication. An answer
/// without A records (including NXDOMAIN) is an empty set, not an error.
pub async fn forward_lookup(
    resolver: &TokioResolver,
    domain: &str,
) -> Result<Vec<Ipv4Addr>, ResolutionError> {
    let fqdn = format!("{}.", domain.trim_end_matches('.'));

    match resolver.ipv4_lookup(fqdn.as_str()).await {
        Ok(lookup) => Ok(lookup.iter().map(|a| a.0).collect()),
        Err(e) if e.is_no_records_found() => {
            tracing::debug!(%domain, error = %e, "no A records");
            Ok(Vec::new())
        }
        Err(e) => Err(ResolutionError::Exchange {
            domain: domain.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Create a resolver that sends every query to `server` only.
///
/// One attempt per query, no client-side caching, no fallback server.
pub fn create_resolver(server: SocketAddr, timeout: Duration) -> TokioResolver {
    let name_servers = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], name_servers);

    let mut builder =
        TokioResolver::builder_with_config(config, TokioConnectionProvider::default());
    let opts = builder.options_mut();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.cache_size = 0;
    builder.build()
}
