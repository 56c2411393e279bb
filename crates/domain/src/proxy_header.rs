//! PROXY protocol v2 header
//!
//! Builds (and parses back) the binary preamble a proxy prepends to a
//! datagram so the receiving server learns the original client address.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! +------------------+---------+---------+--------+---------------+------------+
//! | signature (12)   | ver/cmd | fam/tpt | len(2) | addresses (12)| TLVs ...   |
//! +------------------+---------+---------+--------+---------------+------------+
//! ```
//!
//! `len` covers the address block and every TLV. Each TLV is
//! `type(1) length(2) value(length)`.
//!
//! Reference: https://www.haproxy.org/download/2.9/doc/proxy-protocol.txt

use super::tlv::TLV_OVERHEAD;
use super::{DomainError, Endpoint, TlvSet, Transport};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};

/// PROXY protocol v2 signature (`\r\n\r\n\0\r\nQUIT\n`)
pub const PROXY_V2_SIGNATURE: [u8; 12] = [
    0x0D, 0x0A, 0x0D, 0x0A, 0x00, 0x0D, 0x0A, 0x51, 0x55, 0x49, 0x54, 0x0A,
];

/// Signature + ver/cmd + fam/transport + length
pub const PROXY_V2_PREAMBLE_SIZE: usize = 16;

/// src addr (4) + dst addr (4) + src port (2) + dst port (2)
pub const IPV4_ADDRESS_BLOCK_SIZE: usize = 12;

pub const PROXY_V2_VERSION: u8 = 2;

const TRANSPORT_UNSPEC: u8 = 0x0;
const TRANSPORT_STREAM: u8 = 0x1;
const TRANSPORT_DGRAM: u8 = 0x2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Connection opened by the proxy itself (health checks); addresses are ignored.
    Local,
    /// Connection relayed on behalf of another node.
    Proxy,
}

impl Command {
    fn code(self) -> u8 {
        match self {
            Command::Local => 0x0,
            Command::Proxy => 0x1,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Command::Local),
            0x1 => Some(Command::Proxy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Unspec,
    Inet,
    Inet6,
    Unix,
}

impl AddressFamily {
    fn code(self) -> u8 {
        match self {
            AddressFamily::Unspec => 0x0,
            AddressFamily::Inet => 0x1,
            AddressFamily::Inet6 => 0x2,
            AddressFamily::Unix => 0x3,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(AddressFamily::Unspec),
            0x1 => Some(AddressFamily::Inet),
            0x2 => Some(AddressFamily::Inet6),
            0x3 => Some(AddressFamily::Unix),
            _ => None,
        }
    }

    /// Size of the address block announced by this family.
    fn address_block_size(self) -> usize {
        match self {
            AddressFamily::Unspec => 0,
            AddressFamily::Inet => IPV4_ADDRESS_BLOCK_SIZE,
            AddressFamily::Inet6 => 36,
            AddressFamily::Unix => 216,
        }
    }
}

/// Descriptor of a PROXY v2 header.
///
/// Build one with [`ProxyHeader::proxy_udp4`], attach metadata with
/// [`ProxyHeader::with_tlvs`], then call [`ProxyHeader::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyHeader {
    pub version: u8,
    pub command: Command,
    pub source: Endpoint,
    pub destination: Endpoint,
    pub tlvs: TlvSet,
}

impl ProxyHeader {
    /// PROXY command over UDP/IPv4 with no TLVs.
    pub fn proxy_udp4(source: Endpoint, destination: Endpoint) -> Self {
        Self {
            version: PROXY_V2_VERSION,
            command: Command::Proxy,
            source,
            destination,
            tlvs: TlvSet::new(),
        }
    }

    /// LOCAL command. The endpoints are carried as unspecified addresses.
    pub fn local() -> Self {
        let unspecified = Endpoint::new(
            SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)),
            Transport::Udp,
        );
        Self {
            version: PROXY_V2_VERSION,
            command: Command::Local,
            source: unspecified,
            destination: unspecified,
            tlvs: TlvSet::new(),
        }
    }

    /// Attach a whole set of TLVs, merging with any already attached.
    pub fn with_tlvs(mut self, tlvs: TlvSet) -> Self {
        self.tlvs.merge(tlvs);
        self
    }

    /// Attach a single TLV, replacing a previous value of the same type.
    pub fn with_tlv(mut self, kind: u8, value: impl Into<Vec<u8>>) -> Self {
        self.tlvs.insert(kind, value);
        self
    }

    /// Number of bytes announced by the length field.
    pub fn payload_len(&self) -> usize {
        let addresses = match self.command {
            Command::Proxy => IPV4_ADDRESS_BLOCK_SIZE,
            Command::Local => 0,
        };
        addresses + self.tlvs.encoded_len()
    }

    /// Serialize the header.
    ///
    /// Fails with [`DomainError::Encoding`] when the version is not 2, when a
    /// PROXY header has a non-UDP or non-IPv4 endpoint, or when the TLVs do
    /// not fit the 16-bit length fields.
    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        if self.version != PROXY_V2_VERSION {
            return Err(DomainError::Encoding(format!(
                "Unsupported PROXY protocol version: {}",
                self.version
            )));
        }

        let (fam_transport, addresses) = match self.command {
            Command::Proxy => {
                let block = self.ipv4_address_block()?;
                (
                    (AddressFamily::Inet.code() << 4) | TRANSPORT_DGRAM,
                    Some(block),
                )
            }
            Command::Local => ((AddressFamily::Unspec.code() << 4) | TRANSPORT_UNSPEC, None),
        };

        for (kind, value) in self.tlvs.iter() {
            if value.len() > u16::MAX as usize {
                return Err(DomainError::Encoding(format!(
                    "TLV 0x{:02X} value is {} bytes, maximum is {}",
                    kind,
                    value.len(),
                    u16::MAX
                )));
            }
        }

        let payload_len = self.payload_len();
        let length = u16::try_from(payload_len).map_err(|_| {
            DomainError::Encoding(format!(
                "PROXY header payload is {} bytes, maximum is {}",
                payload_len,
                u16::MAX
            ))
        })?;

        let mut buf = Vec::with_capacity(PROXY_V2_PREAMBLE_SIZE + payload_len);
        buf.extend_from_slice(&PROXY_V2_SIGNATURE);
        buf.push((self.version << 4) | self.command.code());
        buf.push(fam_transport);
        buf.extend_from_slice(&length.to_be_bytes());

        if let Some(block) = addresses {
            buf.extend_from_slice(&block);
        }

        for (kind, value) in self.tlvs.iter() {
            buf.push(kind);
            buf.extend_from_slice(&(value.len() as u16).to_be_bytes());
            buf.extend_from_slice(value);
        }

        debug_assert_eq!(buf.len(), PROXY_V2_PREAMBLE_SIZE + payload_len);
        Ok(buf)
    }

    fn ipv4_address_block(&self) -> Result<[u8; IPV4_ADDRESS_BLOCK_SIZE], DomainError> {
        let src = Self::udp4_addr(&self.source, "source")?;
        let dst = Self::udp4_addr(&self.destination, "destination")?;

        let mut block = [0u8; IPV4_ADDRESS_BLOCK_SIZE];
        block[0..4].copy_from_slice(&src.ip().octets());
        block[4..8].copy_from_slice(&dst.ip().octets());
        block[8..10].copy_from_slice(&src.port().to_be_bytes());
        block[10..12].copy_from_slice(&dst.port().to_be_bytes());
        Ok(block)
    }

    fn udp4_addr(endpoint: &Endpoint, role: &str) -> Result<SocketAddrV4, DomainError> {
        if endpoint.transport != Transport::Udp {
            return Err(DomainError::Encoding(format!(
                "{} endpoint {} uses {}, only UDP is supported",
                role,
                endpoint.addr,
                endpoint.transport.as_str()
            )));
        }
        match endpoint.addr {
            SocketAddr::V4(addr) => Ok(addr),
            SocketAddr::V6(addr) => match addr.ip().to_ipv4_mapped() {
                Some(ip) => Ok(SocketAddrV4::new(ip, addr.port())),
                None => Err(DomainError::Encoding(format!(
                    "{} endpoint {} is not IPv4",
                    role, endpoint.addr
                ))),
            },
        }
    }

    /// Parse a header from the start of `bytes`.
    ///
    /// Returns the descriptor and the number of bytes it occupied, so the
    /// remainder of the datagram starts at that offset.
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), DomainError> {
        if bytes.len() < PROXY_V2_PREAMBLE_SIZE {
            return Err(DomainError::Decode(format!(
                "PROXY v2 header needs {} bytes, got {}",
                PROXY_V2_PREAMBLE_SIZE,
                bytes.len()
            )));
        }
        if bytes[..12] != PROXY_V2_SIGNATURE {
            return Err(DomainError::Decode("Invalid PROXY v2 signature".into()));
        }

        let version = bytes[12] >> 4;
        if version != PROXY_V2_VERSION {
            return Err(DomainError::Decode(format!(
                "Unsupported PROXY version: {}",
                version
            )));
        }
        let command = Command::from_code(bytes[12] & 0x0F).ok_or_else(|| {
            DomainError::Decode(format!("Unsupported PROXY v2 command: {}", bytes[12] & 0x0F))
        })?;

        let family = AddressFamily::from_code(bytes[13] >> 4).ok_or_else(|| {
            DomainError::Decode(format!("Unknown PROXY v2 address family: {:#x}", bytes[13] >> 4))
        })?;
        let transport = match bytes[13] & 0x0F {
            TRANSPORT_STREAM => Transport::Tcp,
            TRANSPORT_DGRAM | TRANSPORT_UNSPEC => Transport::Udp,
            other => {
                return Err(DomainError::Decode(format!(
                    "Unknown PROXY v2 transport: {:#x}",
                    other
                )))
            }
        };

        let length = u16::from_be_bytes([bytes[14], bytes[15]]) as usize;
        let total = PROXY_V2_PREAMBLE_SIZE + length;
        if bytes.len() < total {
            return Err(DomainError::Decode(format!(
                "PROXY v2 header announces {} bytes, only {} available",
                length,
                bytes.len() - PROXY_V2_PREAMBLE_SIZE
            )));
        }
        let payload = &bytes[PROXY_V2_PREAMBLE_SIZE..total];

        let address_len = family.address_block_size();
        if payload.len() < address_len {
            return Err(DomainError::Decode(format!(
                "PROXY v2 {:?} address data too short: {} of {} bytes",
                family,
                payload.len(),
                address_len
            )));
        }

        // LOCAL headers may still carry addresses; they are skipped.
        let mut header = match command {
            Command::Local => Self::local(),
            Command::Proxy => {
                if family != AddressFamily::Inet {
                    return Err(DomainError::Decode(format!(
                        "Unsupported PROXY v2 address family: {:?}",
                        family
                    )));
                }
                let src_ip = Ipv4Addr::new(payload[0], payload[1], payload[2], payload[3]);
                let dst_ip = Ipv4Addr::new(payload[4], payload[5], payload[6], payload[7]);
                let src_port = u16::from_be_bytes([payload[8], payload[9]]);
                let dst_port = u16::from_be_bytes([payload[10], payload[11]]);
                Self::proxy_udp4(
                    Endpoint::new(SocketAddr::new(IpAddr::V4(src_ip), src_port), transport),
                    Endpoint::new(SocketAddr::new(IpAddr::V4(dst_ip), dst_port), transport),
                )
            }
        };

        header.tlvs = Self::decode_tlvs(&payload[address_len..])?;

        Ok((header, total))
    }

    fn decode_tlvs(mut data: &[u8]) -> Result<TlvSet, DomainError> {
        let mut tlvs = TlvSet::new();
        while !data.is_empty() {
            if data.len() < TLV_OVERHEAD {
                return Err(DomainError::Decode(format!(
                    "Truncated TLV header ({} trailing bytes)",
                    data.len()
                )));
            }
            let kind = data[0];
            let len = u16::from_be_bytes([data[1], data[2]]) as usize;
            let end = TLV_OVERHEAD + len;
            if data.len() < end {
                return Err(DomainError::Decode(format!(
                    "TLV 0x{:02X} announces {} bytes, only {} available",
                    kind,
                    len,
                    data.len() - TLV_OVERHEAD
                )));
            }
            if tlvs.insert(kind, data[TLV_OVERHEAD..end].to_vec()).is_some() {
                return Err(DomainError::Decode(format!(
                    "Duplicate TLV type 0x{:02X}",
                    kind
                )));
            }
            data = &data[end..];
        }
        Ok(tlvs)
    }
}
