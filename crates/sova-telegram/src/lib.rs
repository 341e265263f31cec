//! sova-telegram
//!
//! The Telegram transport for the sova screening bot: a minimal Bot API
//! client over HTTPS long polling, the callback-data codec that carries
//! answer selections, and the update loop that feeds the flow controller.

pub mod api;
pub mod bot;
pub mod callback;
pub mod client;
pub mod config;
pub mod error;

pub use bot::Bot;
pub use client::BotClient;
pub use config::BotConfig;
pub use error::TelegramError;
