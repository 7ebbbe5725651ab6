//! # faqbot HTTP Server Utilities
//!
//! File: cli/src/commands/serve/utils.rs
//!
//! Helpers for the startup banner.
//!
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use tracing::{debug, info};

/// # Get Local IP Address (`get_local_ip`)
///
/// Finds the address of the interface the OS would route outbound traffic
/// through, so the banner can show a URL reachable from other machines.
/// Connecting a UDP socket only selects a route; no packet is sent.
///
/// Returns `None` when there is no usable non-loopback address.
pub fn get_local_ip() -> Option<IpAddr> {
    let socket = match UdpSocket::bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), 0)) {
        Ok(socket) => socket,
        Err(e) => {
            debug!("Could not open UDP socket for IP detection: {}", e);
            return None;
        }
    };
    if let Err(e) = socket.connect(SocketAddr::new(Ipv4Addr::new(192, 0, 2, 1).into(), 9)) {
        debug!("No outbound route for IP detection: {}", e);
        return None;
    }

    let ip = socket.local_addr().ok()?.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        debug!("Only found address {}, skipping network URL", ip);
        return None;
    }
    info!("Found local IP: {}", ip);
    Some(ip)
}
