use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Deserialize;

use crate::error::CheckError;

/// Port specification taken from the check config. Either a literal port
/// number or a pattern resolved against the monitored process name: a
/// numeric string, or a regular expression whose first capture group
/// extracts the port from the name (e.g. `worker_(\d+)`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    Literal(u16),
    Pattern(String),
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSpec::Literal(port) => write!(f, "{}", port),
            PortSpec::Pattern(pattern) => write!(f, "{}", pattern),
        }
    }
}

impl FromStr for PortSpec {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw.parse::<u16>() {
            Ok(port) => PortSpec::Literal(port),
            Err(_) => PortSpec::Pattern(raw.to_owned()),
        })
    }
}

pub fn resolve(spec: &PortSpec, process_name: &str) -> Result<u16, CheckError> {
    let invalid = || CheckError::InvalidPortSpec {
        spec: spec.to_string(),
        process: process_name.to_owned(),
    };

    let port = match spec {
        PortSpec::Literal(port) => *port,
        PortSpec::Pattern(pattern) => {
            if let Ok(port) = pattern.parse::<u16>() {
                return Ok(port);
            }

            let re = Regex::new(pattern).map_err(|_| invalid())?;
            let port = re
                .captures(process_name)
                .and_then(|caps| caps.get(1))
                .and_then(|group| group.as_str().parse::<u16>().ok())
                .ok_or_else(invalid)?;

            log::debug!(
                "Resolved port {} for process `{}` from pattern `{}`",
                port,
                process_name,
                pattern
            );

            port
        }
    };

    Ok(port)
}
