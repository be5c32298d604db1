//! Run configuration with compile-time defaults
//!
//! Default values are defined as public constants and can be overridden
//! through [`LookupConfigBuilder`], which is how the CLI and the tests
//! construct a [`LookupConfig`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Public resolver that every A-record query is sent to
pub const DEFAULT_DNS_SERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53);
/// Default DNS query timeout in milliseconds
pub const DEFAULT_DNS_TIMEOUT_MS: u64 = 5000;
/// Base URL of the BGPView API
pub const DEFAULT_API_BASE_URL: &str = "https://api.bgpview.io";
/// Default HTTP request timeout in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// How prefix records are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// `prefix: <cidr>, ASN: <n>`
    #[default]
    Full,
    /// Only the origin ASN
    AsnOnly,
    /// Only the announced prefix
    PrefixOnly,
}

impl DisplayMode {
    /// Pick the display mode from the two CLI switches
    ///
    /// The ASN switch takes precedence when both are set.
    pub fn from_flags(asn: bool, prefix: bool) -> Self {
        if asn {
            DisplayMode::AsnOnly
        } else if prefix {
            DisplayMode::PrefixOnly
        } else {
            DisplayMode::Full
        }
    }
}

/// Configuration for one run of the tool
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Single target given on the command line
    pub target: Option<String>,
    /// Path to a newline-delimited list of targets
    pub list_path: Option<PathBuf>,
    /// Output rendering, applied to every record
    pub display_mode: DisplayMode,
    /// DNS server used for A-record queries
    pub dns_server: SocketAddr,
    /// Timeout for a DNS query
    pub dns_timeout: Duration,
    /// Base URL of the prefix lookup API, without trailing slash
    pub api_base_url: String,
    /// Timeout for a single API request
    pub http_timeout: Duration,
    /// Diagnostic verbosity (0 = warnings only)
    pub verbose: u8,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            target: None,
            list_path: None,
            display_mode: DisplayMode::Full,
            dns_server: DEFAULT_DNS_SERVER,
            dns_timeout: Duration::from_millis(DEFAULT_DNS_TIMEOUT_MS),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            verbose: 0,
        }
    }
}

impl LookupConfig {
    /// Create a new LookupConfig builder
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.dns_timeout.is_zero() {
            return Err("dns_timeout must be greater than 0".to_string());
        }
        if self.http_timeout.is_zero() {
            return Err("http_timeout must be greater than 0".to_string());
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            ));
        }
        Ok(())
    }
}

/// Builder for LookupConfig
pub struct LookupConfigBuilder {
    config: LookupConfig,
}

impl LookupConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LookupConfig::default(),
        }
    }

    /// Set the single target
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.config.target = Some(target.into());
        self
    }

    /// Set the path of the target list file
    pub fn list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.list_path = Some(path.into());
        self
    }

    /// Set the display mode
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.config.display_mode = mode;
        self
    }

    /// Set the DNS server address
    pub fn dns_server(mut self, server: SocketAddr) -> Self {
        self.config.dns_server = server;
        self
    }

    /// Set the DNS query timeout
    pub fn dns_timeout(mut self, timeout: Duration) -> Self {
        self.config.dns_timeout = timeout;
        self
    }

    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP request timeout
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// Set the diagnostic verbosity
    pub fn verbose(mut self, level: u8) -> Self {
        self.config.verbose = level;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<LookupConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for LookupConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
