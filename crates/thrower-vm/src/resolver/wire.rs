//! Minimal DNS message codec (RFC 1035).
//!
//! Encodes single-question queries and decodes whole messages, following
//! name compression pointers. Only A records get typed rdata.

use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_FORMERR: u8 = 1;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_NOTIMP: u8 = 4;
pub const RCODE_REFUSED: u8 = 5;
pub const RCODE_YXDOMAIN: u8 = 6;

const HEADER_LEN: usize = 12;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;
/// Upper bound on pointer hops while reading one name.
const MAX_POINTER_HOPS: usize = 64;

const FLAG_QR: u16 = 0x8000;
const FLAG_TC: u16 = 0x0200;
const FLAG_RD: u16 = 0x0100;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("empty label in `{0}`")]
    EmptyLabel(String),

    #[error("label longer than 63 bytes in `{0}`")]
    LabelTooLong(String),

    #[error("name longer than 255 bytes: `{0}`")]
    NameTooLong(String),

    #[error("message truncated at byte {0}")]
    Truncated(usize),

    #[error("bad label type 0x{0:02x}")]
    BadLabelType(u8),

    #[error("compression pointer loop")]
    PointerLoop,

    #[error("A record with {0}-byte rdata")]
    BadAddress(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Other(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u16,
    pub flags: u16,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
}

impl Message {
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000f) as u8
    }

    /// First A record in answer, authority or additional order.
    pub fn first_a(&self) -> Option<Ipv4Addr> {
        self.answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
            .find_map(|record| match record.data {
                RecordData::A(addr) => Some(addr),
                RecordData::Other(_) => None,
            })
    }

    pub fn decode(buf: &[u8]) -> Result<Message, WireError> {
        let mut r = Reader { buf, pos: 0 };
        let id = r.u16()?;
        let flags = r.u16()?;
        let qdcount = r.u16()?;
        let ancount = r.u16()?;
        let nscount = r.u16()?;
        let arcount = r.u16()?;

        let mut questions = Vec::with_capacity(usize::from(qdcount).min(16));
        for _ in 0..qdcount {
            questions.push(Question {
                name: r.name()?,
                qtype: r.u16()?,
                qclass: r.u16()?,
            });
        }

        Ok(Message {
            id,
            flags,
            questions,
            answers: r.records(ancount)?,
            authority: r.records(nscount)?,
            additional: r.records(arcount)?,
        })
    }
}

/// Query for the A record of `qname` with recursion desired.
pub fn encode_query(id: u16, qname: &str) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::with_capacity(HEADER_LEN + qname.len() + 6);
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&FLAG_RD.to_be_bytes());
    for count in [1u16, 0, 0, 0] {
        out.extend_from_slice(&count.to_be_bytes());
    }
    encode_name(qname, &mut out)?;
    out.extend_from_slice(&TYPE_A.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    Ok(out)
}

/// Append `name` in uncompressed wire form. A trailing dot is optional.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), WireError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let start = out.len();

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(WireError::EmptyLabel(name.to_owned()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong(name.to_owned()));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    if out.len() - start > MAX_NAME_LEN {
        return Err(WireError::NameTooLong(name.to_owned()));
    }
    Ok(())
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.checked_add(n).ok_or(WireError::Truncated(self.pos))?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(WireError::Truncated(self.pos))?;
        self.pos = end;
        Ok(bytes)
    }

    fn u16(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a possibly compressed name, rendered with a trailing dot.
    fn name(&mut self) -> Result<String, WireError> {
        let mut name = String::new();
        let mut cursor = self.pos;
        let mut resume = None;
        let mut hops = 0;

        loop {
            let len = *self.buf.get(cursor).ok_or(WireError::Truncated(cursor))?;
            match len & 0xc0 {
                0x00 if len == 0 => {
                    cursor += 1;
                    break;
                }
                0x00 => {
                    let start = cursor + 1;
                    let end = start + usize::from(len);
                    let label = self
                        .buf
                        .get(start..end)
                        .ok_or(WireError::Truncated(start))?;
                    name.push_str(&String::from_utf8_lossy(label));
                    name.push('.');
                    cursor = end;
                }
                0xc0 => {
                    let low = *self.buf.get(cursor + 1).ok_or(WireError::Truncated(cursor))?;
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(WireError::PointerLoop);
                    }
                    resume.get_or_insert(cursor + 2);
                    cursor = (usize::from(len & 0x3f) << 8) | usize::from(low);
                }
                _ => return Err(WireError::BadLabelType(len)),
            }
        }

        self.pos = resume.unwrap_or(cursor);
        if name.is_empty() {
            name.push('.');
        }
        Ok(name)
    }

    fn records(&mut self, count: u16) -> Result<Vec<Record>, WireError> {
        let mut records = Vec::with_capacity(usize::from(count).min(64));
        for _ in 0..count {
            let name = self.name()?;
            let rtype = self.u16()?;
            let class = self.u16()?;
            let ttl = self.u32()?;
            let rdlength = usize::from(self.u16()?);
            let rdata = self.take(rdlength)?;

            let data = if rtype == TYPE_A && class == CLASS_IN {
                let octets: [u8; 4] = rdata
                    .try_into()
                    .map_err(|_| WireError::BadAddress(rdata.len()))?;
                RecordData::A(Ipv4Addr::from(octets))
            } else {
                RecordData::Other(rdata.to_vec())
            };

            records.push(Record {
                name,
                rtype,
                class,
                ttl,
                data,
            });
        }
        Ok(records)
    }
}
