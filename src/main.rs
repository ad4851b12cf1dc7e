mod cli;

use aniforge::{animelist, config, discovery, downloads, search};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "aniforge=trace,aniforge_parser=debug".to_string()
        } else {
            "aniforge=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_discovery(cli.config.as_deref(), true))
        }
        Commands::Run => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_discovery(cli.config.as_deref(), false))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("aniforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run_discovery(config_path: Option<&Path>, daemon: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    tracing::info!("connecting to providers");
    let animelist =
        animelist::KitsuClient::connect(&config.animelist.base_url, &config.animelist.username)
            .await?;
    let search = search::NyaaClient::new(&config.search.base_url);
    let downloads = downloads::QBittorrentClient::connect(
        &config.downloads.url,
        &config.downloads.username,
        &config.downloads.password,
    )
    .await?;

    let controller = discovery::Controller::new(
        config.discovery,
        Box::new(animelist),
        search,
        downloads,
    );

    if daemon {
        controller.start().await
    } else {
        controller.run_once().await
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Watch list: {} ({})", config.animelist.base_url, config.animelist.username);
            println!("  Search index: {}", config.search.base_url);
            println!("  Download client: {}", config.downloads.url);
            println!("  Download path: {}", config.discovery.download_path);
            println!("  Sources: {}", config.discovery.sources.len());
            println!("  Qualities: {}", config.discovery.qualities.len());
            println!(
                "  Poll frequency: {}s",
                config.discovery.poll_frequency_secs
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Watch list: {}", config.animelist.base_url);
            println!("  Search index: {}", config.search.base_url);
            println!("  Download client: {}", config.downloads.url);
        }
    }

    Ok(())
}
