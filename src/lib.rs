//! bgpview - BGP prefix and origin ASN lookup for domains and IPs
//!
//! Targets are classified as domains or IP literals, domains are resolved
//! to their IPv4 addresses, and each address is looked up against the
//! BGPView API. The pieces are exposed separately so that callers (and
//! tests) can swap the DNS and HTTP collaborators.

pub mod bgp;
pub mod config;
pub mod dns;
pub mod orchestrator;
pub mod report;
pub mod target;

#[cfg(test)]
mod testing;

// Re-export core types for library users
pub use bgp::{BgpViewClient, LookupError, PrefixLookupService, PrefixRecord};
pub use config::{DisplayMode, LookupConfig, LookupConfigBuilder};
pub use dns::{DomainResolver, ForwardResolver, ResolutionError};
pub use orchestrator::Orchestrator;
pub use target::{classify, load_targets, Target, TargetSourceError};
