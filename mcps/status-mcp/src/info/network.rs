//! Primary network address lookup

use std::net::IpAddr;

use sysinfo::Networks;

/// First usable non-loopback address across all interfaces
///
/// Interfaces are visited in name order so the answer is stable between calls.
pub fn primary_ip_address() -> Option<IpAddr> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<_> = networks.iter().collect();
    interfaces.sort_by(|(a, _), (b, _)| a.cmp(b));

    pick_primary(
        interfaces
            .into_iter()
            .flat_map(|(_, data)| data.ip_networks().iter().map(|ip| ip.addr)),
    )
}

/// Choose the primary address: first usable IPv4, else first usable IPv6
pub fn pick_primary<I>(addrs: I) -> Option<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut first_v6 = None;

    for addr in addrs.into_iter().filter(is_usable) {
        match addr {
            IpAddr::V4(_) => return Some(addr),
            IpAddr::V6(_) if first_v6.is_none() => first_v6 = Some(addr),
            IpAddr::V6(_) => {}
        }
    }

    first_v6
}

fn is_usable(addr: &IpAddr) -> bool {
    if addr.is_loopback() || addr.is_unspecified() || addr.is_multicast() {
        return false;
    }
    match addr {
        IpAddr::V4(v4) => !v4.is_link_local(),
        // fe80::/10
        IpAddr::V6(v6) => (v6.segments()[0] & 0xffc0) != 0xfe80,
    }
}
