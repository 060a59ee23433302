//! Alarm relay CLI
//!
//! `invoke` relays a single event and prints the result; `serve` accepts
//! events over HTTP.

use std::path::PathBuf;

use alarm_relay::{build_dispatcher, handle_raw_event, load_config, read_event, Config};
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "alarm-relay")]
#[command(about = "Relays monitoring alarm notifications to a Slack webhook")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Slack incoming-webhook URL (overrides config file)
    #[arg(long, env = "SLACK_WEBHOOK_URL", global = true)]
    webhook_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Relay one event read from a file, or stdin when omitted or `-`
    Invoke { event: Option<PathBuf> },

    /// Accept events over HTTP on POST /events
    Serve {
        /// Listen port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, webhook_url set={}, log_level={:?}",
        args.config,
        args.webhook_url.is_some(),
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    }
    .with_webhook_override(args.webhook_url);

    match args.command {
        Command::Invoke { event } => {
            let raw = read_event(event.as_deref())?;
            let dispatcher = build_dispatcher(&config);
            let result = handle_raw_event(&raw, &dispatcher).await.inspect_err(|e| {
                tracing::error!("Invocation failed: {}", e);
            })?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::info!("Starting alarm relay");
            alarm_relay::run(config).await?;
        }
    }

    Ok(())
}
