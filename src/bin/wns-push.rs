use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use wns_push::config::loader;
use wns_push::utils::logging::{self, LogLevel};
use wns_push::{Badge, ClientConfig, Notification, Tile, Toast, WnsClient};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "WNS_CONFIG", default_value = "wns-push.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send raw tile XML
    Tile {
        #[arg(long, env = "WNS_CHANNEL_URI")]
        uri: String,
        #[arg(long)]
        xml: String,
    },
    /// Set the badge value; an empty value clears it
    Badge {
        #[arg(long, env = "WNS_CHANNEL_URI")]
        uri: String,
        #[arg(long, default_value = "")]
        value: String,
    },
    /// Send a toast built from a registered template
    Toast {
        #[arg(long, env = "WNS_CHANNEL_URI")]
        uri: String,
        #[arg(long)]
        template: String,
        /// repeat once per template field, in order
        #[arg(long = "text")]
        text: Vec<String>,
        #[arg(long)]
        sound: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let client_config = loader::file_to_config(Path::new(&args.config)).await?;
    logging::run(&client_config.settings, args.log_level);

    // -------------------------------
    // 2. Build payload before touching the network, then send
    // -------------------------------

    let delivered = match args.command {
        Command::Tile { uri, xml } => {
            let mut tile = Tile::new();
            tile.set_tile(&xml)?;
            tile.build()?;
            deliver(&client_config, &uri, &tile).await?
        }
        Command::Badge { uri, value } => {
            let mut badge = Badge::new();
            badge.set_field(&value);
            badge.build()?;
            deliver(&client_config, &uri, &badge).await?
        }
        Command::Toast { uri, template, text, sound } => {
            let mut toast = Toast::new();
            toast.set_template(&template)?;
            toast.set_text(text)?;
            if let Some(sound) = sound {
                toast.set_sound(&sound)?;
            }
            toast.build()?;
            deliver(&client_config, &uri, &toast).await?
        }
    };

    if !delivered {
        bail!("notification was not delivered");
    }
    info!(version = wns_push::version(), "notification delivered");
    Ok(())
}

async fn deliver<N: Notification>(cfg: &ClientConfig, uri: &str, notification: &N) -> Result<bool> {
    let client = WnsClient::from_config(cfg)?;
    if !client.authenticate().await? {
        bail!("authentication request did not complete");
    }
    client
        .send_notification(uri, notification)
        .await
        .context("send failed")
}
