//! The flow controller: a state machine driven by inbound events.
//!
//! Every accepted event mutates the session exactly once and yields
//! exactly one [`Render`]. The transition runs to completion before the
//! next event for the same conversation is handled; delivery of the
//! render happens afterwards and its failure never rolls the mutation
//! back.

use tracing::{debug, info};

use sova_instruments::{EatCode, catalog, interpret};

use crate::error::FlowError;
use crate::event::Event;
use crate::render::Render;
use crate::session::{Phase, QuestionnaireSession};
use crate::store::{ChatId, SessionStore};

/// Outcome of recording one answer at a given index.
enum Recorded {
    /// The answer (and any back-filled sentinels before it) was appended;
    /// `first_new` is the position of the first newly written entry.
    Appended { first_new: usize },
    /// An already-answered position was overwritten in place.
    Overwrote,
}

/// Append, overwrite, or back-fill one answer.
///
/// `index == len` appends (the expected case). `index < len` overwrites in
/// place, covering a re-selection from a stale menu. `index > len` fills
/// the gap with `sentinel` before appending the real answer at `index`.
fn record<T: Copy>(answers: &mut Vec<T>, index: usize, value: T, sentinel: T) -> Recorded {
    if index < answers.len() {
        answers[index] = value;
        return Recorded::Overwrote;
    }
    let first_new = answers.len();
    while answers.len() < index {
        answers.push(sentinel);
    }
    answers.push(value);
    Recorded::Appended { first_new }
}

/// Advances sessions through the screening phases in response to inbound
/// events.
#[derive(Clone)]
pub struct FlowController {
    store: SessionStore,
}

impl FlowController {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Handle one inbound event for one conversation and produce the one
    /// outbound render.
    pub async fn handle(&self, chat: ChatId, event: Event) -> Result<Render, FlowError> {
        match event {
            Event::Start => {
                self.store.replace(chat, QuestionnaireSession::new()).await;
                info!(chat, "session started");
                Ok(Render::intro())
            }
            Event::Help => Ok(Render::help()),
            Event::Begin => {
                let mut session = self.store.get(chat).await.ok_or(FlowError::NoSession)?;
                session.phase = Phase::Eat(0);
                self.store.replace(chat, session).await;
                debug!(chat, "entered EAT phase");
                Ok(Render::eat_question(0))
            }
            Event::EatAnswer { index, code } => self.handle_eat(chat, index, code).await,
            Event::ScoffAnswer { index, value } => self.handle_scoff(chat, index, value).await,
        }
    }

    async fn handle_eat(
        &self,
        chat: ChatId,
        index: usize,
        code: EatCode,
    ) -> Result<Render, FlowError> {
        let count = catalog::eat_len();
        if index >= count {
            return Err(FlowError::IndexOutOfRange {
                instrument: "EAT-26",
                index,
                max: count - 1,
            });
        }

        let mut session = self.store.get(chat).await.ok_or(FlowError::NoSession)?;

        // The accumulator takes the weighted contribution of every entry
        // actually written by an append or back-fill. Overwrites leave it
        // alone, so the stale contribution of a re-answered question stays
        // in the total (preserved pre-existing behavior, see DESIGN.md).
        if let Recorded::Appended { first_new } =
            record(&mut session.eat_answers, index, code, EatCode::Sometimes)
        {
            for pos in first_new..=index {
                let answer = session.eat_answers[pos];
                session.eat_score += answer.score(catalog::eat_question(pos).reverse);
            }
        }

        debug!(chat, index, code = code.as_str(), "EAT answer recorded");

        let next = index + 1;
        let render = if next < count {
            session.phase = Phase::Eat(next);
            Render::eat_question(next)
        } else {
            session.phase = Phase::Scoff(0);
            info!(chat, eat_score = session.eat_score, "EAT-26 complete");
            Render::scoff_question(0)
        };

        self.store.replace(chat, session).await;
        Ok(render)
    }

    async fn handle_scoff(
        &self,
        chat: ChatId,
        index: usize,
        value: bool,
    ) -> Result<Render, FlowError> {
        let count = catalog::scoff_len();
        if index >= count {
            return Err(FlowError::IndexOutOfRange {
                instrument: "SCOFF",
                index,
                max: count - 1,
            });
        }

        let mut session = self.store.get(chat).await.ok_or(FlowError::NoSession)?;

        record(&mut session.scoff_answers, index, value, false);

        debug!(chat, index, value, "SCOFF answer recorded");

        let next = index + 1;
        if next < count {
            session.phase = Phase::Scoff(next);
            self.store.replace(chat, session).await;
            return Ok(Render::scoff_question(next));
        }

        // Last SCOFF answer: score, summarize, discard the session.
        session.phase = Phase::Done;
        let interpretation = interpret(session.eat_score, session.scoff_yes());
        let elapsed = jiff::Timestamp::now() - session.started_at;
        info!(
            chat,
            eat_total = interpretation.eat_total,
            scoff_yes = interpretation.scoff_yes,
            elapsed = %elapsed,
            "screening complete"
        );
        let render = Render::summary(&session, &interpretation);
        self.store.clear(chat).await;
        Ok(render)
    }
}
