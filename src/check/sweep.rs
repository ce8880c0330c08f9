use std::{io, net::IpAddr, time::Duration};

use crate::error::CheckError;

use super::probe::{ProbeResult, Prober};

// Failure kinds a connect attempt is expected to produce; anything else
// (permissions, resource exhaustion) is not an address-level outcome.
fn connect_failure(reason: &io::Error) -> bool {
    matches!(
        reason.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::TimedOut
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::NetworkUnreachable
    )
}

/// Tries the candidate addresses in order and short-circuits on the first
/// one accepting a connection. Exhausting the list is an `Unreachable`
/// failure, distinct from any config error; a failure that is not a plain
/// connect outcome aborts the sweep as `Io`.
pub fn sweep(
    prober: &dyn Prober,
    process_name: &str,
    port: u16,
    timeout: Duration,
    addrs: &[IpAddr],
) -> Result<(), CheckError> {
    for &addr in addrs {
        log::debug!(
            "Trying to connect to TCP address {} port {} for process `{}`",
            addr,
            port,
            process_name
        );

        match prober.probe(addr, port, timeout) {
            ProbeResult::Connected => {
                log::info!(
                    "Successfully connected to TCP address {} port {} for process `{}`",
                    addr,
                    port,
                    process_name
                );
                return Ok(());
            }
            ProbeResult::Failed(reason) if connect_failure(&reason) => {
                log::debug!("Connection to {}:{} failed: {}", addr, port, reason);
            }
            ProbeResult::Failed(reason) => return Err(CheckError::Io(reason)),
        }
    }

    Err(CheckError::Unreachable(port))
}
