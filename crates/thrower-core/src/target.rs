//! The DNS server a program probes.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

/// Target used when none is given on the command line.
pub const DEFAULT_TARGET: &str = "127.0.0.1:1053";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("bad target `{0}`: expected `ip:port`")]
    MissingPort(String),

    #[error("bad target `{0}`: `{1}` is not an IPv4 address")]
    InvalidAddress(String, String),

    #[error("bad target `{0}`: `{1}` is not a port number")]
    InvalidPort(String, String),
}

/// IPv4 address and UDP port of the nameserver under test.
///
/// Parsed once from `"ip:port"` and held for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl Target {
    pub fn new(ip: Ipv4Addr, port: u16) -> Self {
        Self { ip, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip, self.port))
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((ip, port)) = trimmed.rsplit_once(':') else {
            return Err(TargetError::MissingPort(s.to_owned()));
        };
        let ip = ip
            .parse::<Ipv4Addr>()
            .map_err(|_| TargetError::InvalidAddress(s.to_owned(), ip.to_owned()))?;
        let port = port
            .parse::<u16>()
            .map_err(|_| TargetError::InvalidPort(s.to_owned(), port.to_owned()))?;
        Ok(Self { ip, port })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
