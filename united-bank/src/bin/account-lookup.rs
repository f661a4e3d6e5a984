//! One-shot account-information lookup against the United Bank gateway
//!
//! Usage: account-lookup <source-swift> <destination-account> <destination-swift> <routing-tag>

use anyhow::{bail, Context};
use united_bank::{AccountTransaction, Client, Config, ReqwestHttpClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, account, destination, routing_tag] = args.as_slice() else {
        bail!(
            "usage: account-lookup <source-swift> <destination-account> <destination-swift> <routing-tag>"
        );
    };

    let config = Config::from_env().context("loading gateway configuration")?;
    tracing::info!(url = %config.base_url, "Using United Bank gateway");

    let http = ReqwestHttpClient::new(config.timeout_seconds)?;
    let client = Client::new(config, http);

    let transaction = AccountTransaction::new(source, account, destination, routing_tag);
    let response = client
        .fetch_account_information_for_transaction(&transaction)
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some((code, description)) = response.business_error() {
        bail!("gateway rejected lookup: {} {}", code, description);
    }

    Ok(())
}
