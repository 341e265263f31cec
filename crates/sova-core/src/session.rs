use serde::{Deserialize, Serialize};

use sova_instruments::EatCode;

/// Where a session currently is in the screening. Moves only forward:
/// Intro, Eat, Scoff, Done. The payload is the next expected question
/// index within the phase, so an illegal phase/index combination is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "next", rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Eat(usize),
    Scoff(usize),
    Done,
}

/// Per-conversation screening progress. Created by /start, mutated only
/// by the flow controller, discarded right after the final summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireSession {
    pub phase: Phase,
    /// Running EAT-26 total (0-78). Incremented as answers are appended
    /// or back-filled, never recomputed; overwrites do not touch it, so
    /// a re-answered question can leave the first answer's contribution
    /// in place (see DESIGN.md).
    pub eat_score: u16,
    /// Selected option codes, one per EAT question answered so far.
    pub eat_answers: Vec<EatCode>,
    /// Yes/no values, one per SCOFF question answered so far.
    pub scoff_answers: Vec<bool>,
    pub started_at: jiff::Timestamp,
}

impl QuestionnaireSession {
    /// A fresh session in the intro phase with everything zeroed.
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            eat_score: 0,
            eat_answers: Vec::new(),
            scoff_answers: Vec::new(),
            started_at: jiff::Timestamp::now(),
        }
    }

    /// Count of "yes" answers recorded so far, computed from the answer
    /// sequence rather than any running counter.
    pub fn scoff_yes(&self) -> usize {
        self.scoff_answers.iter().filter(|v| **v).count()
    }
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new()
    }
}
