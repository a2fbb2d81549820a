//! Carton - Extension Catalog Release Tool
//!
//! Usage:
//!   carton --tag v1.2.0             # Generate "latest" metadata for a dev run
//!   carton --tag v1.2.0 --release   # Generate release-partitioned metadata
//!
//! Requires a bearer credential in GH_ACCESS_TOKEN to list the remote catalog.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carton_core::config::CatalogConfig;
use carton_core::listing::github::GitHubLister;
use carton_core::pipeline;

const TOKEN_ENV: &str = "GH_ACCESS_TOKEN";

#[derive(Parser)]
#[command(name = "carton")]
#[command(about = "Extension catalog release metadata generator", long_about = None)]
struct Cli {
    /// Version tag for this run
    #[arg(long)]
    tag: String,

    /// Partition output by the tag instead of "latest"
    #[arg(long)]
    release: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carton=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let token = std::env::var(TOKEN_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{TOKEN_ENV} must be set to list the remote catalog"))?;

    if cli.tag.is_empty() {
        anyhow::bail!("--tag must not be empty");
    }

    let config = CatalogConfig::default();
    tracing::debug!(owner = %config.owner, repo = %config.repo, path = %config.catalog_path, "using catalog configuration");

    let lister = GitHubLister::new(&config.owner, &config.repo, token)
        .context("Failed to build catalog lister")?;

    let descriptor = pipeline::run(&config, &lister, &cli.tag, cli.release)
        .await
        .context("Catalog metadata run failed")?;

    println!(
        "Generated metadata for {} extensions ({} partition)",
        descriptor.extensions.len(),
        CatalogConfig::partition(&cli.tag, cli.release),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_flag_parses() {
        let args = ["carton", "--tag", "v1.2.0"];

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.tag, "v1.2.0");
        assert!(!cli.release);
    }

    #[test]
    fn release_flag_parses() {
        let args = ["carton", "--tag", "v1.2.0", "--release"];

        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.release);
    }

    #[test]
    fn missing_tag_is_an_error() {
        let args = ["carton"];

        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn release_defaults_to_false() {
        let args = ["carton", "--tag", "v0.5.0"];

        let cli = Cli::try_parse_from(args).unwrap();
        assert!(!cli.release);
    }
}
