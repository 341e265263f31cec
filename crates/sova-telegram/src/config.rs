/// Runtime configuration for the bot process.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot API token issued by @BotFather.
    pub token: String,
}

impl BotConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> eyre::Result<Self> {
        let token = std::env::var("BOT_TOKEN").map_err(|_| {
            eyre::eyre!(
                "BOT_TOKEN is not set; export it first, e.g.\n  export BOT_TOKEN=123456:ABC..."
            )
        })?;
        if token.trim().is_empty() {
            return Err(eyre::eyre!("BOT_TOKEN is empty"));
        }
        Ok(Self { token })
    }
}
