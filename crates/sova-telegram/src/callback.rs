//! Callback-data codec: the wire encoding of answer selections.
//!
//! Choices leave the bot as `begin`, `eat:<index>:<CODE>`, or
//! `scoff:<index>:<yes|no>` and come back verbatim when pressed. The flow
//! controller never sees this encoding; it deals in typed events.

use sova_core::{Choice, ChoiceData, Event};
use sova_instruments::EatCode;

use crate::api::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::error::TelegramError;

/// Encode a choice as callback data.
pub fn encode(data: ChoiceData) -> String {
    match data {
        ChoiceData::Begin => "begin".to_string(),
        ChoiceData::Eat { index, code } => format!("eat:{index}:{}", code.as_str()),
        ChoiceData::Scoff { index, value } => {
            format!("scoff:{index}:{}", if value { "yes" } else { "no" })
        }
    }
}

/// Decode callback data back into a flow event.
pub fn decode(data: &str) -> Result<Event, TelegramError> {
    if data == "begin" {
        return Ok(Event::Begin);
    }

    let mut parts = data.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("eat"), Some(index), Some(code)) => {
            let index = index.parse().map_err(|_| malformed(data))?;
            let code: EatCode = code.parse().map_err(|_| malformed(data))?;
            Ok(Event::EatAnswer { index, code })
        }
        (Some("scoff"), Some(index), Some(value)) => {
            let index = index.parse().map_err(|_| malformed(data))?;
            let value = match value {
                "yes" => true,
                "no" => false,
                _ => return Err(malformed(data)),
            };
            Ok(Event::ScoffAnswer { index, value })
        }
        _ => Err(malformed(data)),
    }
}

fn malformed(data: &str) -> TelegramError {
    TelegramError::Callback(data.to_string())
}

/// Build an inline keyboard from a render's choices, one button per row,
/// preserving order. `None` when there are no choices.
pub fn keyboard(choices: &[Choice]) -> Option<InlineKeyboardMarkup> {
    if choices.is_empty() {
        return None;
    }
    Some(InlineKeyboardMarkup {
        inline_keyboard: choices
            .iter()
            .map(|choice| {
                vec![InlineKeyboardButton {
                    text: choice.label.clone(),
                    callback_data: encode(choice.data),
                }]
            })
            .collect(),
    })
}
