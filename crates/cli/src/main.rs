use clap::Parser;
use ferrous_lookup_application::use_cases::ResolveDomainUseCase;
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_infrastructure::dns::create_transport;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod interactive;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - resolve domain names to IPv4 addresses with raw DNS over UDP")]
struct Cli {
    /// Domain to resolve. Omit to start an interactive prompt
    domain: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server (IP or IP:PORT)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Query timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Extra attempts after a timeout or socket error
    #[arg(short = 'r', long)]
    retries: Option<u8>,

    /// Reject responses whose transaction id does not match the query
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        query_timeout_ms: cli.timeout,
        retries: cli.retries,
        strict_id_check: cli.strict,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let transport = Arc::new(create_transport(&config.dns)?);
    info!(
        server = %transport.server_addr(),
        timeout_ms = config.dns.query_timeout_ms,
        strict = config.dns.strict_id_check,
        "Using upstream DNS server"
    );

    let use_case = ResolveDomainUseCase::from_config(transport, &config.dns);

    match cli.domain {
        Some(domain) => {
            let ips = use_case.resolve(&domain).await?;
            if ips.is_empty() {
                eprintln!("No IP addresses found for {}", domain);
            }
            for ip in ips {
                println!("{}", ip);
            }
        }
        None => interactive::run(&use_case).await?,
    }

    Ok(())
}
