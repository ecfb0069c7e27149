use anyhow::Context;
use bookstore::{cli_args::CliArgs, config::ServerConfig, server::Server};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,bookstore=trace,tower_http=trace");
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!("Starting ...");

    let config = match &args.config_file {
        Some(config_file) => ServerConfig::from_config_file(config_file)
            .await
            .context("Failed to load configuration")?,
        None => ServerConfig::default(),
    };

    let config = match args.database_url {
        Some(database_url) => config.with_database_url(database_url),
        None => config,
    };

    tracing::debug!(?config, "Configuration");

    let server = Server::new(config);

    server.run().await?;

    Ok(())
}
