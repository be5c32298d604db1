//! Wire types for the BGPView `/ip/<ip>` endpoint

use serde::Deserialize;

/// Top-level body returned by `GET /ip/<ip>`
///
/// Only the fields the tool reads are modelled; everything else in the
/// body is ignored. A missing or null `data` or `prefixes` means no
/// prefixes.
#[derive(Debug, Clone, Deserialize)]
pub struct BgpViewResponse {
    /// Payload object
    #[serde(default)]
    pub data: Option<BgpViewData>,
}

/// The `data` object of a response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BgpViewData {
    /// Prefixes covering the queried IP, in service order
    #[serde(default)]
    pub prefixes: Option<Vec<BgpViewPrefix>>,
}

/// One entry of `data.prefixes`
#[derive(Debug, Clone, Deserialize)]
pub struct BgpViewPrefix {
    /// Announced prefix in CIDR notation
    pub prefix: String,
    /// Origin AS of the announcement
    pub asn: BgpViewAsn,
}

/// The nested `asn` object of a prefix entry
#[derive(Debug, Clone, Deserialize)]
pub struct BgpViewAsn {
    /// AS number
    pub asn: u32,
}

/// A prefix and the AS that originates it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    /// CIDR string exactly as returned by the service
    pub prefix: String,
    /// Origin AS number
    pub asn: u32,
}

impl BgpViewResponse {
    /// Flatten the response into prefix records, keeping service order
    pub fn into_records(self) -> Vec<PrefixRecord> {
        self.data
            .unwrap_or_default()
            .prefixes
            .unwrap_or_default()
            .into_iter()
            .map(|p| PrefixRecord {
                prefix: p.prefix,
                asn: p.asn.asn,
            })
            .collect()
    }
}
