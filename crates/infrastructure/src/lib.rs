//! ppdig Infrastructure Layer
//!
//! Adapters behind the application ports: the `hickory-proto` DNS codec and
//! the tokio UDP transport.
pub mod dns;
