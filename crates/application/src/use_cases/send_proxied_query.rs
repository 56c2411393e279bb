use crate::ports::{DatagramConnector, DnsCodec};
use ppdig_domain::{
    DnsAnswer, DnsQuery, DomainError, Endpoint, ProxyHeader, QueryConfig, QueryType, TlvSet,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub server: String,
    /// Kept as text: an unparsable port is a resolution failure.
    pub port: String,
    pub domain: String,
    pub record_type: QueryType,
    pub metadata: TlvSet,
}

#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub header_len: usize,
    pub query_len: usize,
    pub answer: DnsAnswer,
}

/// Sends one DNS query prefixed with a PROXY v2 header and decodes the reply.
pub struct SendProxiedQueryUseCase {
    codec: Arc<dyn DnsCodec>,
    connector: Arc<dyn DatagramConnector>,
    recv_buffer_size: usize,
    timeout: Option<Duration>,
}

impl SendProxiedQueryUseCase {
    pub fn new(
        codec: Arc<dyn DnsCodec>,
        connector: Arc<dyn DatagramConnector>,
        config: &QueryConfig,
    ) -> Self {
        Self {
            codec,
            connector,
            recv_buffer_size: config.recv_buffer_size,
            timeout: config.timeout(),
        }
    }

    pub async fn execute(&self, request: &ProbeRequest) -> Result<ProbeOutcome, DomainError> {
        let start = Instant::now();

        let query = DnsQuery::new(&request.domain, request.record_type);
        let query_bytes = self.codec.encode_query(&query)?;
        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            bytes = query_bytes.len(),
            "DNS query serialized"
        );

        let destination = self
            .connector
            .resolve(&request.server, &request.port)
            .await?;
        debug!(server = %request.server, resolved = %destination, "DNS server resolved");

        let channel = self.connector.connect(destination).await?;
        let source = Endpoint::udp(channel.local_addr());
        let destination = Endpoint::udp(channel.peer_addr());
        debug!(source = %source, destination = %destination, "UDP channel opened");

        let header = ProxyHeader::proxy_udp4(source, destination)
            .with_tlvs(request.metadata.clone())
            .encode()?;
        debug!(
            bytes = header.len(),
            tlvs = request.metadata.len(),
            "PROXY v2 header built"
        );

        let header_len = header.len();
        let query_len = query_bytes.len();
        let mut datagram = header;
        datagram.extend_from_slice(&query_bytes);

        let sent = channel.send(&datagram).await?;
        if sent != datagram.len() {
            return Err(DomainError::Transmit(format!(
                "short write to {}: {} of {} bytes",
                destination,
                sent,
                datagram.len()
            )));
        }
        debug!(bytes = sent, "Datagram sent");

        let response = channel.recv(self.recv_buffer_size, self.timeout).await?;
        debug!(bytes = response.len(), "Response received");

        let answer = self.codec.decode_response(&response)?;

        info!(
            server = %destination,
            rcode = answer.response_code,
            answers = answer.answers.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query completed"
        );

        Ok(ProbeOutcome {
            source,
            destination,
            header_len,
            query_len,
            answer,
        })
    }
}
