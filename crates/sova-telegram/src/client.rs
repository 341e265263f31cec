//! Minimal Telegram Bot API client: JSON POST per method call over a
//! shared connection pool.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{
    AnswerCallbackQuery, ApiResponse, EditMessageText, GetUpdates, InlineKeyboardMarkup, Message,
    SendMessage, Update, User,
};
use crate::error::TelegramError;

/// Canonical Bot API endpoint.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

const CONNECT_TIMEOUT_SECS: u64 = 30;
/// Long-poll window requested from getUpdates.
pub const POLL_TIMEOUT_SECS: u64 = 30;
/// Overall request timeout; must exceed the long-poll window.
const REQUEST_TIMEOUT_SECS: u64 = POLL_TIMEOUT_SECS + 15;

pub struct BotClient {
    http: reqwest::Client,
    base: String,
}

impl BotClient {
    pub fn new(token: &str) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base: format!("{TELEGRAM_API_BASE}/bot{token}"),
        })
    }

    /// Call one Bot API method and unwrap its response envelope.
    async fn call<P, R>(&self, method: &str, payload: &P) -> Result<R, TelegramError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        debug!(method, "telegram api call");
        let url = format!("{}/{}", self.base, method);
        let response = self.http.post(&url).json(payload).send().await?;
        let envelope: ApiResponse<R> = response.json().await?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                method: method.to_string(),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }
        envelope.result.ok_or_else(|| TelegramError::Api {
            method: method.to_string(),
            description: "ok response without result".to_string(),
        })
    }

    /// The bot's own identity; used as a startup credential check.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-poll for updates past `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout: POLL_TIMEOUT_SECS,
                allowed_updates: &["message", "callback_query"],
            },
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessage {
                chat_id,
                text: text.to_string(),
                reply_markup,
            },
        )
        .await
    }

    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "editMessageText",
            &EditMessageText {
                chat_id,
                message_id,
                text: text.to_string(),
                reply_markup,
            },
        )
        .await
    }

    /// Acknowledge a button press so the client stops its progress
    /// indicator.
    pub async fn answer_callback_query(&self, id: &str) -> Result<bool, TelegramError> {
        self.call(
            "answerCallbackQuery",
            &AnswerCallbackQuery {
                callback_query_id: id.to_string(),
            },
        )
        .await
    }
}
