//! Resolution of labels to IPv4 addresses.
//!
//! [`Resolve`] is the seam between the interpreter and the network. Failures
//! are split into benign outcomes, which a program observes as the empty
//! string, and faults, which stop the run.

mod udp;
pub mod wire;


use std::net::Ipv4Addr;
use std::time::Duration;

pub use udp::DnsResolver;
use wire::WireError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("timed out")]
    Timeout,

    #[error("NXDOMAIN")]
    NxDomain,

    #[error("no A record in response")]
    NoAnswer,

    #[error("no nameservers: {0}")]
    NoNameservers(String),

    /// A response code that says neither "no data" nor "server unusable".
    #[error("unexpected response code {0}")]
    UnexpectedRcode(u8),

    #[error("malformed message: {0}")]
    Wire(#[from] WireError),

    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolveError {
    /// Outcomes that mean "no data" rather than a broken channel.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            ResolveError::Timeout
                | ResolveError::NxDomain
                | ResolveError::NoAnswer
                | ResolveError::NoNameservers(_)
        )
    }
}

/// Looks up the A record for a fully qualified name.
pub trait Resolve {
    fn resolve(&mut self, qname: &str, timeout: Duration) -> Result<Ipv4Addr, ResolveError>;
}

impl<F> Resolve for F
where
    F: FnMut(&str, Duration) -> Result<Ipv4Addr, ResolveError>,
{
    fn resolve(&mut self, qname: &str, timeout: Duration) -> Result<Ipv4Addr, ResolveError> {
        self(qname, timeout)
    }
}
