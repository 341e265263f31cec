use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered with `ok: false`.
    #[error("telegram api error in {method}: {description}")]
    Api { method: String, description: String },

    #[error("malformed callback data: {0}")]
    Callback(String),
}
