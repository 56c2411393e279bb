//! UDP transport for proxied DNS queries (RFC 1035 §4.2.1)
//!
//! The socket is connected to the server so the OS picks the local address
//! that goes into the PROXY header, and so only replies from that server are
//! delivered.

use async_trait::async_trait;
use ppdig_application::ports::{DatagramChannel, DatagramConnector};
use ppdig_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Resolves servers with the system resolver and opens connected UDP sockets.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpConnector;

impl UdpConnector {
    pub fn new() -> Self {
        Self
    }

    /// First IPv4 address if there is one, otherwise the first address.
    fn preferred_addr(addrs: &[SocketAddr]) -> Option<SocketAddr> {
        addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
    }
}

#[async_trait]
impl DatagramConnector for UdpConnector {
    async fn resolve(&self, host: &str, port: &str) -> Result<SocketAddr, DomainError> {
        let port_number = port.trim().parse::<u16>().map_err(|e| {
            DomainError::Resolution(format!("Invalid port '{}': {}", port, e))
        })?;

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port_number))
            .await
            .map_err(|e| DomainError::Resolution(format!("{}:{}: {}", host, port, e)))?
            .collect();

        let addr = Self::preferred_addr(&addrs).ok_or_else(|| {
            DomainError::Resolution(format!("{}:{}: no addresses found", host, port))
        })?;

        if addr.is_ipv6() {
            warn!(server = %addr, "DNS server only resolved to IPv6");
        }

        Ok(addr)
    }

    async fn connect(
        &self,
        destination: SocketAddr,
    ) -> Result<Box<dyn DatagramChannel>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if destination.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::Connection(format!("Failed to bind UDP socket: {}", e))
        })?;

        socket.connect(destination).await.map_err(|e| {
            DomainError::Connection(format!("Failed to connect UDP socket to {}: {}", destination, e))
        })?;

        let local_addr = socket.local_addr().map_err(|e| {
            DomainError::Connection(format!("Failed to read local UDP address: {}", e))
        })?;

        debug!(local = %local_addr, server = %destination, "UDP socket connected");

        Ok(Box::new(UdpChannel {
            socket,
            local_addr,
            peer_addr: destination,
        }))
    }
}

/// Connected UDP socket. The socket closes when the channel is dropped.
pub struct UdpChannel {
    socket: UdpSocket,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
}

#[async_trait]
impl DatagramChannel for UdpChannel {
    fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    async fn send(&self, datagram: &[u8]) -> Result<usize, DomainError> {
        let bytes_sent = self.socket.send(datagram).await.map_err(|e| {
            DomainError::Transmit(format!("Failed to send to {}: {}", self.peer_addr, e))
        })?;

        debug!(server = %self.peer_addr, bytes_sent = bytes_sent, "UDP datagram sent");
        Ok(bytes_sent)
    }

    async fn recv(
        &self,
        max_len: usize,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, DomainError> {
        let mut recv_buf = vec![0u8; max_len];

        let received = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.socket.recv(&mut recv_buf))
                .await
                .map_err(|_| DomainError::Timeout {
                    server: self.peer_addr.to_string(),
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => self.socket.recv(&mut recv_buf).await,
        };

        let bytes_received = received.map_err(|e| {
            DomainError::Receive(format!(
                "Failed to receive from {}: {}",
                self.peer_addr, e
            ))
        })?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.peer_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}
