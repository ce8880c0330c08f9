use std::net::{IpAddr, Ipv4Addr};

use pnet::datalink::interfaces;

/// Enumerates the local IPv4 addresses a supervised process may be listening
/// on. Loopback comes first since locally supervised services most often bind
/// there; the rest follow in interface order, deduplicated.
pub fn local_addrs() -> Vec<IpAddr> {
    let mut addrs = vec![IpAddr::V4(Ipv4Addr::LOCALHOST)];

    for iface in interfaces().iter().filter(|e| e.is_up()) {
        for net in &iface.ips {
            let ip = net.ip();
            if ip.is_ipv4() && !addrs.contains(&ip) {
                addrs.push(ip);
            }
        }
    }

    log::debug!("Found {} candidate local addresses", addrs.len());

    addrs
}
