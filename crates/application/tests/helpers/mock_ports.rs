#![allow(dead_code)]

use async_trait::async_trait;
use ppdig_application::ports::{DatagramChannel, DatagramConnector, DnsCodec};
use ppdig_domain::{DnsAnswer, DnsQuery, DomainError, QuestionEntry, RecordEntry};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const QUERY_BYTES: &[u8] = b"\x12\x34dns-query-bytes";

pub fn noerror_answer(domain: &str) -> DnsAnswer {
    DnsAnswer {
        id: 0x1234,
        response_code: "NOERROR",
        truncated: false,
        recursion_available: true,
        questions: vec![QuestionEntry {
            name: domain.to_string(),
            class: "IN".into(),
            record_type: "A".into(),
        }],
        answers: vec![RecordEntry {
            name: domain.to_string(),
            ttl: 60,
            class: "IN".into(),
            record_type: "A".into(),
            data: "192.0.2.10".into(),
        }],
        authority: vec![],
        additional_count: 0,
    }
}

#[derive(Clone)]
pub struct MockDnsCodec {
    encoded: Arc<Mutex<Vec<DnsQuery>>>,
    decoded: Arc<Mutex<Vec<Vec<u8>>>>,
    encode_error: Option<DomainError>,
    decode_result: Result<DnsAnswer, DomainError>,
}

impl MockDnsCodec {
    pub fn new() -> Self {
        Self {
            encoded: Arc::new(Mutex::new(vec![])),
            decoded: Arc::new(Mutex::new(vec![])),
            encode_error: None,
            decode_result: Ok(noerror_answer("example.com.")),
        }
    }

    pub fn failing_encode(mut self, error: DomainError) -> Self {
        self.encode_error = Some(error);
        self
    }

    pub fn failing_decode(mut self, error: DomainError) -> Self {
        self.decode_result = Err(error);
        self
    }

    pub fn encoded_queries(&self) -> Vec<DnsQuery> {
        self.encoded.lock().unwrap().clone()
    }

    pub fn decoded_payloads(&self) -> Vec<Vec<u8>> {
        self.decoded.lock().unwrap().clone()
    }
}

impl DnsCodec for MockDnsCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        self.encoded.lock().unwrap().push(query.clone());
        match &self.encode_error {
            Some(error) => Err(error.clone()),
            None => Ok(QUERY_BYTES.to_vec()),
        }
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsAnswer, DomainError> {
        self.decoded.lock().unwrap().push(bytes.to_vec());
        self.decode_result.clone()
    }
}

#[derive(Clone, Default)]
pub struct TransportLog {
    pub resolved: Arc<Mutex<Vec<(String, String)>>>,
    pub connected: Arc<Mutex<Vec<SocketAddr>>>,
    pub sent: Arc<Mutex<Vec<Vec<u8>>>>,
    pub recv_calls: Arc<Mutex<Vec<(usize, Option<Duration>)>>>,
}

#[derive(Clone)]
pub struct MockConnector {
    pub log: TransportLog,
    local_addr: SocketAddr,
    resolved_addr: Result<SocketAddr, DomainError>,
    connect_error: Option<DomainError>,
    short_write: bool,
    response: Result<Vec<u8>, DomainError>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            log: TransportLog::default(),
            local_addr: "192.0.2.100:50000".parse().unwrap(),
            resolved_addr: Ok("203.0.113.53:53".parse().unwrap()),
            connect_error: None,
            short_write: false,
            response: Ok(b"raw-response".to_vec()),
        }
    }

    pub fn with_local_addr(mut self, addr: &str) -> Self {
        self.local_addr = addr.parse().unwrap();
        self
    }

    pub fn failing_resolve(mut self, error: DomainError) -> Self {
        self.resolved_addr = Err(error);
        self
    }

    pub fn failing_connect(mut self, error: DomainError) -> Self {
        self.connect_error = Some(error);
        self
    }

    pub fn with_short_write(mut self) -> Self {
        self.short_write = true;
        self
    }

    pub fn failing_recv(mut self, error: DomainError) -> Self {
        self.response = Err(error);
        self
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.log.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatagramConnector for MockConnector {
    async fn resolve(&self, host: &str, port: &str) -> Result<SocketAddr, DomainError> {
        self.log
            .resolved
            .lock()
            .unwrap()
            .push((host.to_string(), port.to_string()));
        self.resolved_addr.clone()
    }

    async fn connect(
        &self,
        destination: SocketAddr,
    ) -> Result<Box<dyn DatagramChannel>, DomainError> {
        self.log.connected.lock().unwrap().push(destination);
        if let Some(error) = &self.connect_error {
            return Err(error.clone());
        }
        Ok(Box::new(MockChannel {
            log: self.log.clone(),
            local_addr: self.local_addr,
            peer_addr: destination,
            short_write: self.short_write,
            response: self.response.clone(),
        }))
    }
}

pub struct MockChannel {
    log: TransportLog,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
    short_write: bool,
    response: Result<Vec<u8>, DomainError>,
}

#[async_trait]
impl DatagramChannel for MockChannel {
    fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    async fn send(&self, datagram: &[u8]) -> Result<usize, DomainError> {
        self.log.sent.lock().unwrap().push(datagram.to_vec());
        if self.short_write {
            Ok(datagram.len() / 2)
        } else {
            Ok(datagram.len())
        }
    }

    async fn recv(
        &self,
        max_len: usize,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, DomainError> {
        self.log.recv_calls.lock().unwrap().push((max_len, timeout));
        self.response.clone().map(|mut bytes| {
            bytes.truncate(max_len);
            bytes
        })
    }
}
