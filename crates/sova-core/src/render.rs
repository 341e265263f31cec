//! Outbound rendering requests and the message texts that go with them.
//!
//! The flow controller produces exactly one [`Render`] per inbound event.
//! Choices are carried as typed [`ChoiceData`]; the transport encodes them
//! however it likes and must report the selection back verbatim.

use sova_instruments::{EatCode, Interpretation, catalog};

use crate::session::QuestionnaireSession;

pub const DISCLAIMER: &str = "This is a screening questionnaire (EAT-26 and SCOFF), not a \
     medical diagnosis. If eating, weight, body image, or mood concern you, please talk to a \
     physician or an eating-disorder specialist.";

pub const SUPPORT_HINT: &str = "If things feel difficult right now, reach out to people close \
     to you, to a local mental-health helpline, or book an appointment with a specialist.";

/// What the user selects by pressing a choice. Returned to the flow
/// controller unchanged as the corresponding answer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceData {
    Begin,
    Eat { index: usize, code: EatCode },
    Scoff { index: usize, value: bool },
}

/// One selectable option offered with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub data: ChoiceData,
}

/// A single outbound message: a text body plus an ordered list of
/// selectable choices. Terminal messages carry no choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Render {
    /// The intro disclaimer with a Begin button.
    pub fn intro() -> Self {
        let text = format!(
            "Hi! I run an anonymous screening for possible disordered eating \
             using the EAT-26 and SCOFF scales.\n\n{DISCLAIMER}\n\nPress \
             \"Begin\" to start."
        );
        Render {
            text,
            choices: vec![Choice {
                label: "Begin".to_string(),
                data: ChoiceData::Begin,
            }],
        }
    }

    /// The command overview shown for /help.
    pub fn help() -> Self {
        Render {
            text: "Commands:\n/start - start over\n/help - show this help\n\
                   /restart - restart the screening"
                .to_string(),
            choices: Vec::new(),
        }
    }

    /// The prompt shown when an answer arrives with no active session.
    pub fn no_session() -> Self {
        Render {
            text: "No screening in progress. Send /start to begin.".to_string(),
            choices: Vec::new(),
        }
    }

    /// EAT-26 question `index` with the six response levels in display
    /// order.
    pub fn eat_question(index: usize) -> Self {
        let q = catalog::eat_question(index);
        let text = format!(
            "EAT-26, question {}/{}\n\n{}",
            index + 1,
            catalog::eat_len(),
            q.text
        );
        let choices = EatCode::ALL
            .into_iter()
            .map(|code| Choice {
                label: code.label().to_string(),
                data: ChoiceData::Eat { index, code },
            })
            .collect();
        Render { text, choices }
    }

    /// SCOFF question `index` with Yes/No choices.
    pub fn scoff_question(index: usize) -> Self {
        let q = catalog::scoff_question(index);
        let text = format!(
            "SCOFF, question {}/{}\n\n{}",
            index + 1,
            catalog::scoff_len(),
            q.text
        );
        let choices = vec![
            Choice {
                label: "Yes".to_string(),
                data: ChoiceData::Scoff { index, value: true },
            },
            Choice {
                label: "No".to_string(),
                data: ChoiceData::Scoff {
                    index,
                    value: false,
                },
            },
        ];
        Render { text, choices }
    }

    /// The terminal summary: totals, interpretation, disclaimer, support
    /// hint, and a preview of every recorded answer.
    pub fn summary(session: &QuestionnaireSession, interpretation: &Interpretation) -> Self {
        let text = format!(
            "Screening complete.\n\n\
             EAT-26 total score: {}\n\
             SCOFF \"yes\" answers: {}\n\n\
             {}\n\n{DISCLAIMER}\n\n{SUPPORT_HINT}\n\n{}",
            interpretation.eat_total,
            interpretation.scoff_yes,
            interpretation.render(),
            answers_preview(session),
        );
        Render {
            text,
            choices: Vec::new(),
        }
    }
}

/// Numbered listing of every recorded answer, both instruments.
fn answers_preview(session: &QuestionnaireSession) -> String {
    let eat_lines: Vec<String> = session
        .eat_answers
        .iter()
        .enumerate()
        .map(|(i, code)| format!("{}. {}", i + 1, code.label()))
        .collect();

    let scoff_lines: Vec<String> = session
        .scoff_answers
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}. {}", i + 1, if *v { "Yes" } else { "No" }))
        .collect();

    format!(
        "Your answers (EAT-26):\n{}\n\nYour answers (SCOFF):\n{}",
        eat_lines.join("\n"),
        scoff_lines.join("\n"),
    )
}
