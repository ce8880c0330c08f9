use std::net::IpAddr;

use serde::Deserialize;

use crate::{config::CheckConfig, error::CheckError, interface, resolver};

use self::sweep::sweep;

mod probe;
mod retry;
mod sweep;

pub use probe::{ProbeResult, Prober, TcpProbe};
pub use retry::RetryPolicy;

/// Identity of the monitored process. Only the name is needed here; it
/// drives port resolution and shows up in every diagnostic line.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessSpec {
    pub name: String,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// TCP connectivity check for one supervised process.
///
/// The verdict contract: `check` never panics and never returns an error.
/// Every failure mode collapses into the boolean plus a log line. An
/// unresolvable port spec is deliberately fail-open (verdict `true`): it
/// means "nothing to check", not "the process is down".
pub struct TcpCheck {
    config: CheckConfig,
    prober: Box<dyn Prober>,
    addrs: Option<Vec<IpAddr>>,
}

impl TcpCheck {
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            prober: Box::new(TcpProbe),
            addrs: None,
        }
    }

    /// Builds the check straight from an externally loaded config mapping.
    /// A mapping without the required `port` key is rejected here, before
    /// the check can ever run.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CheckError> {
        CheckConfig::from_value(value).map(Self::new)
    }

    /// Overrides the enumerated local addresses with a fixed candidate list.
    pub fn with_addresses(mut self, addrs: Vec<IpAddr>) -> Self {
        self.addrs = Some(addrs);
        self
    }

    /// Swaps the connect implementation behind the probing seam.
    pub fn with_prober(mut self, prober: Box<dyn Prober>) -> Self {
        self.prober = prober;
        self
    }

    fn candidate_addrs(&self) -> Vec<IpAddr> {
        match &self.addrs {
            Some(addrs) => addrs.clone(),
            None => interface::local_addrs(),
        }
    }

    /// Runs one check invocation and reduces it to a health verdict.
    pub fn check(&self, process: &ProcessSpec) -> bool {
        let port = match resolver::resolve(&self.config.port, &process.name) {
            Ok(port) => port,
            Err(e) => {
                log::error!("Could not extract the TCP port: {}", e);
                return true;
            }
        };

        let addrs = self.candidate_addrs();
        let timeout = self.config.timeout();
        let policy = RetryPolicy::new(self.config.num_retries);

        match policy.run(|| sweep(self.prober.as_ref(), &process.name, port, timeout, &addrs)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Check failed for process `{}`: {}", process.name, e);
                false
            }
        }
    }
}
