use ppdig_application::use_cases::SendProxiedQueryUseCase;
use ppdig_domain::Config;
use ppdig_infrastructure::dns::{HickoryDnsCodec, UdpConnector};
use std::sync::Arc;

pub struct UseCases {
    pub send_proxied_query: Arc<SendProxiedQueryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        Self {
            send_proxied_query: Arc::new(SendProxiedQueryUseCase::new(
                Arc::new(HickoryDnsCodec::new()),
                Arc::new(UdpConnector::new()),
                &config.query,
            )),
        }
    }
}
