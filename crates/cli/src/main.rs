use anyhow::Context;
use clap::Parser;
use ec2ctl_aws::AwsProvider;
use ec2ctl_core::credentials::Credentials;
use tracing_subscriber::EnvFilter;

mod output;
mod shell;

#[derive(Parser)]
#[command(name = "ec2ctl", version)]
#[command(about = "Interactive EC2 instance manager", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let credentials = Credentials::resolve_from_env()
        .context("failed to resolve AWS credentials from the environment")?;
    let provider = AwsProvider::new(&credentials)
        .await
        .context("failed to initialize the EC2 client")?;

    shell::run(&provider).await;
    Ok(())
}
