//! BGP prefix/origin lookup through the BGPView API

pub mod client;
pub mod types;

pub use client::{BgpViewClient, LookupError, PrefixLookupService};
pub use types::{BgpViewResponse, PrefixRecord};
