//! In-memory resolver and lookup fakes for unit tests

use crate::bgp::{LookupError, PrefixLookupService, PrefixRecord};
use crate::dns::{DomainResolver, ResolutionError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;

/// Resolver answering from a fixed table; unknown domains have no records
#[derive(Default)]
pub(crate) struct FakeResolver {
    answers: HashMap<String, Result<Vec<Ipv4Addr>, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_answer(mut self, domain: &str, ips: &[&str]) -> Self {
        let ips = ips
            .iter()
            .map(|ip| ip.parse().expect("valid IPv4 literal"))
            .collect();
        self.answers.insert(domain.to_string(), Ok(ips));
        self
    }

    pub(crate) fn with_failure(mut self, domain: &str, message: &str) -> Self {
        self.answers
            .insert(domain.to_string(), Err(message.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl DomainResolver for FakeResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolutionError> {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push(domain.to_string());

        match self.answers.get(domain) {
            Some(Ok(ips)) => Ok(ips.clone()),
            Some(Err(message)) => Err(ResolutionError::Exchange {
                domain: domain.to_string(),
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

enum FakeAnswer {
    Records(Vec<PrefixRecord>),
    Status(u16),
}

/// Prefix lookup answering from a fixed table; unknown IPs get a 404
#[derive(Default)]
pub(crate) struct FakeLookup {
    answers: HashMap<IpAddr, FakeAnswer>,
    calls: Mutex<Vec<IpAddr>>,
}

impl FakeLookup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_records(mut self, ip: &str, records: Vec<PrefixRecord>) -> Self {
        let ip = ip.parse().expect("valid IP literal");
        self.answers.insert(ip, FakeAnswer::Records(records));
        self
    }

    pub(crate) fn with_status(mut self, ip: &str, status: u16) -> Self {
        let ip = ip.parse().expect("valid IP literal");
        self.answers.insert(ip, FakeAnswer::Status(status));
        self
    }

    pub(crate) fn calls(&self) -> Vec<IpAddr> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl PrefixLookupService for FakeLookup {
    async fn lookup(&self, ip: IpAddr) -> Result<Vec<PrefixRecord>, LookupError> {
        self.calls.lock().expect("mutex poisoned").push(ip);

        match self.answers.get(&ip) {
            Some(FakeAnswer::Records(records)) => Ok(records.clone()),
            Some(FakeAnswer::Status(status)) => Err(LookupError::Status(*status)),
            None => Err(LookupError::Status(404)),
        }
    }
}
