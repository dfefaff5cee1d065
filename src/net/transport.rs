//! Connection setup for the two process roles.
//!
//! The host listens on its non-loopback IPv4 address and plays white; the
//! joiner dials the host and plays black. Exactly one opponent is accepted.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener, TcpStream};

use tracing::{debug, info};

use crate::chess_errors::{SessionError, SessionResult};
use crate::game_state::chess_types::Color;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerRole {
    Host { bind: Option<IpAddr> },
    Join { address: String },
}

impl PeerRole {
    pub const fn local_color(&self) -> Color {
        match self {
            PeerRole::Host { .. } => Color::White,
            PeerRole::Join { .. } => Color::Black,
        }
    }
}

/// First non-loopback IPv4 address among the host's interfaces.
///
/// Needs no default route, so a gateway-less LAN works too.
pub fn local_ipv4() -> SessionResult<Ipv4Addr> {
    let interfaces = if_addrs::get_if_addrs()?;
    for iface in &interfaces {
        debug!(name = %iface.name, ip = %iface.ip(), "found interface address");
    }
    first_lan_ipv4(interfaces.iter().map(|iface| iface.ip())).ok_or(SessionError::NoLocalAddress)
}

/// Pick the first IPv4 address that is neither loopback nor unspecified.
pub fn first_lan_ipv4<I>(addresses: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addresses.into_iter().find_map(|address| match address {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    })
}

/// Bind the listening socket for a hosted game.
pub fn listen(bind: Option<IpAddr>, port: u16) -> SessionResult<TcpListener> {
    let ip = match bind {
        Some(ip) => ip,
        None => IpAddr::V4(local_ipv4()?),
    };
    let listener = TcpListener::bind(SocketAddr::new(ip, port))?;
    info!(addr = %listener.local_addr()?, "listening for an opponent");
    Ok(listener)
}

/// Block until the first opponent connects.
pub fn accept_opponent(listener: &TcpListener) -> SessionResult<TcpStream> {
    let (stream, peer) = listener.accept()?;
    info!(%peer, "opponent connected");
    Ok(stream)
}

/// Dial a host. `address` may be a bare host or IP, or already carry a port.
pub fn join(address: &str, port: u16) -> SessionResult<TcpStream> {
    let target = resolve_target(address, port);
    let stream = TcpStream::connect(target.as_str())?;
    info!(peer = %target, "connected to host");
    Ok(stream)
}

fn resolve_target(address: &str, port: u16) -> String {
    let address = address.trim();
    if let Ok(addr) = address.parse::<SocketAddr>() {
        return addr.to_string();
    }
    if let Ok(ip) = address.parse::<IpAddr>() {
        return SocketAddr::new(ip, port).to_string();
    }
    if address.contains(':') {
        return address.to_owned();
    }
    format!("{address}:{port}")
}
