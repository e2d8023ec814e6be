use ferrous_lookup_application::use_cases::ResolveDomainUseCase;
use ferrous_lookup_domain::DomainError;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const PROMPT: &str = "Enter the domain name (or 'exit' to quit): ";

/// Reads one domain per line until `exit` or end of input. A failed lookup
/// is reported and the loop continues.
pub async fn run(use_case: &ResolveDomainUseCase) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let domain = line.trim();
        if domain.is_empty() {
            continue;
        }
        if domain.eq_ignore_ascii_case("exit") {
            break;
        }

        println!("Resolving {}...", domain);
        let result = use_case.resolve(domain).await;
        if let Err(e) = &result {
            warn!(domain = domain, error = %e, "Resolution failed");
        }
        print!("{}", format_result(domain, &result));
    }

    Ok(())
}

fn format_result(domain: &str, result: &Result<Vec<String>, DomainError>) -> String {
    match result {
        Ok(ips) if ips.is_empty() => format!("No IP addresses found for {}\n", domain),
        Ok(ips) => {
            let mut out = format!("IP addresses for {}:\n", domain);
            for ip in ips {
                out.push_str("  ");
                out.push_str(ip);
                out.push('\n');
            }
            out
        }
        Err(e) => format!("Error resolving {}: {}\n", domain, e),
    }
}
