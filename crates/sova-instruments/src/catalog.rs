//! The EAT-26 and SCOFF question catalogs.
//!
//! Read-only, process-wide data. Question lookups take indices that the
//! flow controller has already validated, so an out-of-range index is a
//! programming error and panics rather than returning a `Result`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;

// ── EAT-26 response scale ────────────────────────────────────────────────────

/// Stable code for one of the six EAT-26 response levels, ordered from
/// most to least intense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EatCode {
    Always,
    Usually,
    Often,
    Sometimes,
    Rarely,
    Never,
}

impl EatCode {
    /// All six levels in fixed display order.
    pub const ALL: [EatCode; 6] = [
        EatCode::Always,
        EatCode::Usually,
        EatCode::Often,
        EatCode::Sometimes,
        EatCode::Rarely,
        EatCode::Never,
    ];

    /// Weight under direct scoring (items 1-25): 3, 2, 1, 0, 0, 0.
    pub fn direct_score(self) -> u16 {
        match self {
            EatCode::Always => 3,
            EatCode::Usually => 2,
            EatCode::Often => 1,
            EatCode::Sometimes | EatCode::Rarely | EatCode::Never => 0,
        }
    }

    /// Weight under reverse scoring (item 26 only): 0, 0, 0, 1, 2, 3.
    /// The mirror image of [`EatCode::direct_score`] across the scale.
    pub fn reverse_score(self) -> u16 {
        match self {
            EatCode::Always | EatCode::Usually | EatCode::Often => 0,
            EatCode::Sometimes => 1,
            EatCode::Rarely => 2,
            EatCode::Never => 3,
        }
    }

    /// Weight for a question with the given reverse-scoring flag.
    pub fn score(self, reverse: bool) -> u16 {
        if reverse {
            self.reverse_score()
        } else {
            self.direct_score()
        }
    }

    /// Wire-stable code string, e.g. `"ALWAYS"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EatCode::Always => "ALWAYS",
            EatCode::Usually => "USUALLY",
            EatCode::Often => "OFTEN",
            EatCode::Sometimes => "SOMETIMES",
            EatCode::Rarely => "RARELY",
            EatCode::Never => "NEVER",
        }
    }

    /// Human-readable label shown on the answer button.
    pub fn label(self) -> &'static str {
        match self {
            EatCode::Always => "Always",
            EatCode::Usually => "Usually",
            EatCode::Often => "Often",
            EatCode::Sometimes => "Sometimes",
            EatCode::Rarely => "Rarely",
            EatCode::Never => "Never",
        }
    }
}

impl FromStr for EatCode {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EatCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownCode(s.to_string()))
    }
}

// ── Question catalogs ────────────────────────────────────────────────────────

/// One EAT-26 item.
#[derive(Debug, Clone, Copy)]
pub struct EatQuestion {
    pub text: &'static str,
    /// Reverse scoring applies to item 26 only.
    pub reverse: bool,
}

/// One SCOFF item. Answered yes/no; scoring counts the yeses.
#[derive(Debug, Clone, Copy)]
pub struct ScoffQuestion {
    pub text: &'static str,
}

const fn eat(text: &'static str) -> EatQuestion {
    EatQuestion {
        text,
        reverse: false,
    }
}

static EAT_QUESTIONS: [EatQuestion; 26] = [
    eat("I am terrified about being overweight"),
    eat("I avoid eating when I am hungry"),
    eat("I find myself preoccupied with food"),
    eat("I have gone on eating binges where I feel that I may not be able to stop"),
    eat("I cut my food into small pieces"),
    eat("I am aware of the calorie content of foods that I eat"),
    eat("I particularly avoid food with a high carbohydrate content (bread, rice, potatoes)"),
    eat("I feel that others would prefer if I ate more"),
    eat("I vomit after I have eaten"),
    eat("I feel extremely guilty after eating"),
    eat("I am preoccupied with a desire to be thinner"),
    eat("I think about burning up calories when I exercise"),
    eat("Other people think that I am too thin"),
    eat("I am preoccupied with the thought of having fat on my body"),
    eat("I take longer than others to eat my meals"),
    eat("I avoid foods with sugar in them"),
    eat("I eat diet foods"),
    eat("I feel that food controls my life"),
    eat("I display self-control around food"),
    eat("I feel that others pressure me to eat"),
    eat("I give too much time and thought to food"),
    eat("I feel uncomfortable after eating sweets"),
    eat("I engage in dieting behavior"),
    eat("I like my stomach to be empty"),
    eat("I have the impulse to vomit after meals"),
    EatQuestion {
        text: "I enjoy trying new rich foods",
        reverse: true,
    },
];

static SCOFF_QUESTIONS: [ScoffQuestion; 5] = [
    ScoffQuestion {
        text: "In the past six months, have you had episodes of uncontrollable binge \
               eating where you felt you could not stop?",
    },
    ScoffQuestion {
        text: "In the past six months, have you made yourself vomit to control your \
               weight or shape?",
    },
    ScoffQuestion {
        text: "In the past six months, have you used diuretics, laxatives, or special \
               diet preparations to control your weight or shape?",
    },
    ScoffQuestion {
        text: "In the past six months, have you exercised for more than 60 minutes a \
               day specifically to control your weight or shape?",
    },
    ScoffQuestion {
        text: "In the past six months, have you lost 9 kg (about 20 lb) or more?",
    },
];

/// Number of EAT-26 items.
pub fn eat_len() -> usize {
    EAT_QUESTIONS.len()
}

/// Number of SCOFF items.
pub fn scoff_len() -> usize {
    SCOFF_QUESTIONS.len()
}

/// Look up an EAT-26 item by index. Panics if `index >= 26`.
pub fn eat_question(index: usize) -> &'static EatQuestion {
    &EAT_QUESTIONS[index]
}

/// Look up a SCOFF item by index. Panics if `index >= 5`.
pub fn scoff_question(index: usize) -> &'static ScoffQuestion {
    &SCOFF_QUESTIONS[index]
}
