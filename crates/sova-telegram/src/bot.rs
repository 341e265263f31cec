//! The update loop: long-poll Telegram, decode each update into a flow
//! event, and deliver the resulting render.

use std::time::Duration;

use tracing::{info, warn};

use sova_core::{ChatId, Event, FlowController, FlowError, Render, SessionStore};

use crate::api::Update;
use crate::callback;
use crate::client::BotClient;
use crate::error::TelegramError;

/// Pause before retrying after a failed getUpdates call.
const POLL_RETRY_SECS: u64 = 3;

pub struct Bot {
    client: BotClient,
    flow: FlowController,
}

impl Bot {
    pub fn new(client: BotClient, store: SessionStore) -> Self {
        Self {
            client,
            flow: FlowController::new(store),
        }
    }

    /// Run the long-polling loop. Per-update failures are logged and do
    /// not stop the loop.
    pub async fn run(&self) -> Result<(), TelegramError> {
        let mut offset: Option<i64> = None;
        info!("polling for updates");

        loop {
            let updates = match self.client.get_updates(offset).await {
                Ok(updates) => updates,
                Err(error) => {
                    warn!(%error, "getUpdates failed, retrying");
                    tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECS)).await;
                    continue;
                }
            };

            for update in updates {
                offset = Some(update.update_id + 1);
                if let Err(error) = self.handle_update(update).await {
                    warn!(%error, "update handling failed");
                }
            }
        }
    }

    async fn handle_update(&self, update: Update) -> Result<(), TelegramError> {
        if let Some(message) = update.message {
            let Some(text) = message.text.as_deref() else {
                return Ok(());
            };
            let event = match text.trim() {
                "/start" | "/restart" => Event::Start,
                "/help" => Event::Help,
                // Free text outside the commands is ignored; answers only
                // arrive through buttons.
                _ => return Ok(()),
            };
            self.dispatch(message.chat.id, event, None).await
        } else if let Some(query) = update.callback_query {
            // Ack before handling so the client stops its spinner even if
            // the transition fails.
            self.client.answer_callback_query(&query.id).await?;

            let Some(data) = query.data.as_deref() else {
                return Ok(());
            };
            let event = match callback::decode(data) {
                Ok(event) => event,
                Err(error) => {
                    warn!(%error, "dropping malformed callback");
                    return Ok(());
                }
            };
            let Some(message) = query.message else {
                return Ok(());
            };
            self.dispatch(message.chat.id, event, Some(message.message_id))
                .await
        } else {
            Ok(())
        }
    }

    /// Run one event through the flow controller and deliver its render.
    /// `edit` carries the message id to edit in place when the event came
    /// from a button press.
    async fn dispatch(
        &self,
        chat: ChatId,
        event: Event,
        edit: Option<i64>,
    ) -> Result<(), TelegramError> {
        let render = match self.flow.handle(chat, event).await {
            Ok(render) => render,
            Err(FlowError::NoSession) => Render::no_session(),
            Err(error @ FlowError::IndexOutOfRange { .. }) => {
                warn!(chat, %error, "rejected event");
                return Ok(());
            }
        };

        let markup = callback::keyboard(&render.choices);
        match edit {
            Some(message_id) => {
                self.client
                    .edit_message_text(chat, message_id, &render.text, markup)
                    .await?;
            }
            None => {
                self.client.send_message(chat, &render.text, markup).await?;
            }
        }
        Ok(())
    }
}
