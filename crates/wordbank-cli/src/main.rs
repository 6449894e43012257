mod cli;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbank_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();
    let config = Config::new();

    cli::run(args, config).await
}
