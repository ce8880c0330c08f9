use std::{
    io,
    net::{IpAddr, SocketAddr, TcpStream},
    time::Duration,
};

/// Outcome of one timed connect attempt. Connect failures are data, not
/// errors: the sweep inspects the reason and moves on to the next address.
#[derive(Debug)]
pub enum ProbeResult {
    Connected,
    Failed(io::Error),
}

impl ProbeResult {
    pub fn is_connected(&self) -> bool {
        matches!(self, ProbeResult::Connected)
    }
}

pub trait Prober: Sync {
    fn probe(&self, addr: IpAddr, port: u16, timeout: Duration) -> ProbeResult;
}

/// Blocking TCP prober. The stream is dropped as soon as the handshake
/// outcome is known, so the socket is released on every exit path.
#[derive(Debug)]
pub struct TcpProbe;

impl Prober for TcpProbe {
    fn probe(&self, addr: IpAddr, port: u16, timeout: Duration) -> ProbeResult {
        TcpStream::connect_timeout(&SocketAddr::new(addr, port), timeout)
            .map_or_else(ProbeResult::Failed, |_| ProbeResult::Connected)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, TcpListener};
    use std::time::Instant;

    use super::*;

    #[test]
    fn open_port_is_connected() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let result = TcpProbe.probe(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            Duration::from_secs(1),
        );

        assert!(result.is_connected());
    }

    #[test]
    fn closed_port_is_failed() {
        // Bind and drop to grab a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = TcpProbe.probe(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            Duration::from_secs(1),
        );

        assert!(matches!(result, ProbeResult::Failed(_)));
    }

    #[test]
    fn hanging_connect_fails_once_the_timeout_expires() {
        // Non-routable test address: the SYN is never answered, so the
        // attempt can only end through the connect timeout. Environments
        // that reject the route outright still yield a failed attempt.
        let timeout = Duration::from_millis(300);
        let start = Instant::now();

        let result = TcpProbe.probe(IpAddr::V4(Ipv4Addr::new(10, 255, 255, 1)), 9, timeout);

        assert!(matches!(result, ProbeResult::Failed(_)));
        assert!(start.elapsed() < timeout + Duration::from_secs(2));
    }
}
