//! Best-effort reverse hostname resolution over multicast DNS.
//!
//! One PTR question for `d.c.b.a.in-addr.arpa` goes to the mDNS group and
//! whoever owns the address has ~100 ms to answer. Anything else is a
//! [`LookupError`] that the enrichment pass downgrades to "Unknown".

use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use async_trait::async_trait;
use dns_parser::{Packet, RData};

use netwatch_common::error::LookupError;

const MDNS_GROUP: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(224, 0, 0, 251), 5353);
const QTYPE_PTR: u16 = 12;
const QCLASS_IN: u16 = 1;

/// Reverse hostname lookup for a single address.
#[async_trait]
pub trait HostnameLookup: Send + Sync {
    async fn hostname(&self, ip: Ipv4Addr) -> Result<String, LookupError>;
}

/// Resolves names by multicasting a single reverse PTR question and waiting
/// briefly for any responder.
pub struct MdnsResolver {
    timeout: Duration,
}

impl MdnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostnameLookup for MdnsResolver {
    async fn hostname(&self, ip: Ipv4Addr) -> Result<String, LookupError> {
        let timeout = self.timeout;
        tokio::task::spawn_blocking(move || query(ip, timeout))
            .await
            .map_err(|_| LookupError::Io(std::io::Error::other("resolver task aborted")))?
    }
}

fn query(ip: Ipv4Addr, timeout: Duration) -> Result<String, LookupError> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_read_timeout(Some(timeout))?;

    let id: u16 = rand::random();
    socket.send_to(&build_ptr_query(ip, id), MDNS_GROUP)?;

    let mut buf = [0u8; 1024];
    loop {
        // Unrelated multicast traffic may arrive first; keep reading until
        // our transaction answers or the socket times out.
        let (len, _responder) = socket.recv_from(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => LookupError::Timeout,
            _ => LookupError::Io(e),
        })?;

        if let Some(name) = parse_ptr_response(&buf[..len], id) {
            return Ok(name);
        }
    }
}

fn build_ptr_query(ip: Ipv4Addr, id: u16) -> Vec<u8> {
    let qname = encode_dns_name(&reverse_name(ip));

    let mut buf = Vec::with_capacity(12 + qname.len() + 4);
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&0x0100u16.to_be_bytes()); // standard query, RD
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&[0u8; 6]); // AN/NS/AR counts
    buf.extend_from_slice(&qname);
    buf.extend_from_slice(&QTYPE_PTR.to_be_bytes());
    buf.extend_from_slice(&QCLASS_IN.to_be_bytes());
    buf
}

/// `a.b.c.d` → `d.c.b.a.in-addr.arpa`
fn reverse_name(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{d}.{c}.{b}.{a}.in-addr.arpa")
}

fn encode_dns_name(name: &str) -> Vec<u8> {
    let mut encoded: Vec<u8> = Vec::new();
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}

/// Extracts the first PTR answer of the response matching our transaction,
/// or `None` for unrelated or malformed packets.
fn parse_ptr_response(payload: &[u8], id: u16) -> Option<String> {
    let packet = Packet::parse(payload).ok()?;
    if packet.header.id != id {
        return None;
    }

    packet.answers.iter().find_map(|record| match &record.data {
        RData::PTR(ptr) => Some(ptr.0.to_string()),
        _ => None,
    })
}
