use async_trait::async_trait;
use ppdig_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Resolves a DNS server and opens a connected datagram channel to it.
#[async_trait]
pub trait DatagramConnector: Send + Sync {
    /// Resolve `host`/`port` to one socket address.
    ///
    /// Fails with [`DomainError::Resolution`], including when `port` is not a
    /// valid port number.
    async fn resolve(&self, host: &str, port: &str) -> Result<SocketAddr, DomainError>;

    /// Open a channel whose peer is `destination`. Fails with [`DomainError::Connection`].
    async fn connect(&self, destination: SocketAddr)
        -> Result<Box<dyn DatagramChannel>, DomainError>;
}

/// A connected datagram socket. Dropping it closes the socket.
#[async_trait]
pub trait DatagramChannel: Send + Sync {
    /// Address the OS bound locally.
    fn local_addr(&self) -> SocketAddr;

    fn peer_addr(&self) -> SocketAddr;

    /// Send one datagram. Fails with [`DomainError::Transmit`].
    async fn send(&self, datagram: &[u8]) -> Result<usize, DomainError>;

    /// Wait for one datagram of at most `max_len` bytes.
    ///
    /// `None` waits forever. Fails with [`DomainError::Timeout`] when the
    /// deadline passes and [`DomainError::Receive`] on read errors.
    async fn recv(&self, max_len: usize, timeout: Option<Duration>)
        -> Result<Vec<u8>, DomainError>;
}
