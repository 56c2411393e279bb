pub mod send_proxied_query;

pub use send_proxied_query::{ProbeOutcome, ProbeRequest, SendProxiedQueryUseCase};
