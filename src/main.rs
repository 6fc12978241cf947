// src/main.rs
use anyhow::{bail, Context, Result};
use review_bot_status::{
    config,
    health::HttpHealthSource,
    metrics::MetricsRegistry,
    site::{render_landing, render_setup, status_line},
    StatusIndicator,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

const USAGE: &str = "\
Usage: review-bot-status [OPTIONS] [CONFIG]

Arguments:
  [CONFIG]  YAML or JSON config file (API_URL overrides the base URL)

Options:
  --setup   Print the setup instructions and exit
  -h, --help  Print this help
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Setup,
    Landing { config_path: Option<String> },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut setup_only = false;
    let mut config_path = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--setup" => setup_only = true,
            flag if flag.starts_with('-') => {
                bail!("Unknown option {:?}\n\n{}", flag, USAGE)
            }
            _ if config_path.is_some() => bail!("Unexpected argument {:?}\n\n{}", arg, USAGE),
            _ => config_path = Some(arg),
        }
    }

    if setup_only {
        Ok(Command::Setup)
    } else {
        Ok(Command::Landing { config_path })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("review_bot_status=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        Command::Setup => {
            print!("{}", render_setup());
            return Ok(());
        }
        Command::Landing { config_path } => config_path,
    };

    // Load configuration
    if let Some(path) = &config_path {
        info!("Loading configuration from: {}", path);
    }
    let config = config::resolve(config_path.as_deref()).await?;
    info!("Probing backend at {}", config.api.health_url());

    let metrics_registry = MetricsRegistry::new()?;
    let metrics = config.metrics.enabled.then(|| metrics_registry.collector());

    let source = HttpHealthSource::new().context("Failed to create HTTP client")?;
    let indicator = StatusIndicator::mount(&config.api, Arc::new(source), metrics);
    info!(probe_id = indicator.probe_id(), "Status indicator mounted");

    print!("{}", render_landing(indicator.status(), &config.api.base_url));

    tokio::select! {
        status = indicator.settled() => {
            println!();
            println!("{}", status_line(status));
        }
        _ = shutdown_signal() => {
            indicator.teardown();
        }
    }

    if config.metrics.enabled {
        print!("{}", metrics_registry.gather()?);
    }

    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
