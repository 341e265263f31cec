use eyre::Result;
use tracing::info;

use sova_core::SessionStore;
use sova_telegram::{Bot, BotClient, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = BotConfig::from_env()?;
    let client = BotClient::new(&config.token)?;

    let me = client.get_me().await?;
    info!(username = ?me.username, "bot authorized");

    let bot = Bot::new(client, SessionStore::new());
    bot.run().await?;

    Ok(())
}
