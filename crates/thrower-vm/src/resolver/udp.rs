use std::hash::{BuildHasher, RandomState};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, UdpSocket};
use std::time::{Duration, Instant, SystemTime};

use thrower_core::Target;
use tracing::{debug, trace};

use super::wire::{self, Message};
use super::{Resolve, ResolveError};

const RECV_BUFFER: usize = 4096;

/// Sends one A query per call to a single DNS server over UDP.
#[derive(Clone, Debug)]
pub struct DnsResolver {
    target: Target,
}

impl DnsResolver {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }
}

impl Resolve for DnsResolver {
    fn resolve(&mut self, qname: &str, timeout: Duration) -> Result<Ipv4Addr, ResolveError> {
        let id = query_id();
        let query = wire::encode_query(id, qname)?;
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(self.target.socket_addr())?;
        socket.send(&query).map_err(refused_as_no_nameservers)?;
        trace!(id, qname, target = %self.target, "query sent");

        let mut buf = [0u8; RECV_BUFFER];
        loop {
            let Some(left) = deadline.checked_duration_since(Instant::now()) else {
                return Err(ResolveError::Timeout);
            };
            if left.is_zero() {
                return Err(ResolveError::Timeout);
            }
            socket.set_read_timeout(Some(left))?;

            let n = match socket.recv(&mut buf) {
                Ok(n) => n,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(ResolveError::Timeout);
                }
                Err(e) => return Err(refused_as_no_nameservers(e)),
            };

            let message = Message::decode(&buf[..n])?;
            if message.id != id || !message.is_response() {
                debug!(expected = id, got = message.id, "ignoring unrelated packet");
                continue;
            }
            if message.is_truncated() {
                debug!(id, "truncated response, using the records that arrived");
            }
            return classify(&message);
        }
    }
}

fn classify(message: &Message) -> Result<Ipv4Addr, ResolveError> {
    match message.rcode() {
        wire::RCODE_NOERROR => message.first_a().ok_or(ResolveError::NoAnswer),
        wire::RCODE_NXDOMAIN => Err(ResolveError::NxDomain),
        rcode @ (wire::RCODE_FORMERR
        | wire::RCODE_SERVFAIL
        | wire::RCODE_NOTIMP
        | wire::RCODE_REFUSED) => Err(ResolveError::NoNameservers(format!(
            "server answered rcode {rcode}"
        ))),
        rcode => Err(ResolveError::UnexpectedRcode(rcode)),
    }
}

/// An ICMP port-unreachable surfaces as `ConnectionRefused` on a connected socket.
fn refused_as_no_nameservers(e: std::io::Error) -> ResolveError {
    if e.kind() == ErrorKind::ConnectionRefused {
        ResolveError::NoNameservers(e.to_string())
    } else {
        ResolveError::Io(e)
    }
}

/// Id used to match the reply to its query. It only has to differ between
/// consecutive queries; it is not meant to be unpredictable.
fn query_id() -> u16 {
    let hash = RandomState::new().hash_one(SystemTime::now());
    u16::try_from(hash & u64::from(u16::MAX)).unwrap_or_default()
}
