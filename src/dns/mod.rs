//! DNS functionality for forward (A-record) lookups

pub mod forward;
pub mod service;

pub use forward::{create_resolver, forward_lookup, ResolutionError};
pub use service::{DomainResolver, ForwardResolver};
