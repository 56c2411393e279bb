use clap::Parser;
use ppdig_application::use_cases::ProbeRequest;
use ppdig_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{debug, error};

mod args;
mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ppdig")]
#[command(version)]
#[command(about = "Send one DNS query over UDP behind a PROXY protocol v2 header")]
struct Cli {
    /// DNS server hostname or IP address
    dns_server: String,

    /// DNS server UDP port (usually 53)
    port: String,

    /// Domain name to query
    domain: String,

    /// Record type: A, AAAA or MX (anything else queries A)
    #[arg(value_name = "TYPE")]
    record_type: String,

    /// PROXY v2 TLVs as KEY=VALUE, KEY being the TLV type (0-255)
    #[arg(value_name = "KEY=VALUE", allow_hyphen_values = true, trailing_var_arg = true)]
    metadata: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Seconds to wait for the reply (0 waits forever)
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Receive buffer size in bytes
    #[arg(long, value_name = "BYTES")]
    buffer_size: Option<usize>,

    /// Fail on malformed KEY=VALUE arguments instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        timeout_secs: cli.timeout,
        recv_buffer_size: cli.buffer_size,
        strict_metadata: cli.strict,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging)?;

    debug!("ppdig v{}", env!("CARGO_PKG_VERSION"));

    let metadata = match args::collect_metadata(&cli.metadata, config.query.strict_metadata) {
        Ok(metadata) => metadata,
        Err(e) => {
            error!(stage = e.stage(), "{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let request = ProbeRequest {
        server: cli.dns_server,
        port: cli.port,
        domain: cli.domain,
        record_type: args::query_type(&cli.record_type),
        metadata,
    };

    let use_cases = di::UseCases::new(&config);

    match use_cases.send_proxied_query.execute(&request).await {
        Ok(outcome) => {
            print!("{}", outcome.answer);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(stage = e.stage(), "{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
