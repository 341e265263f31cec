//! Threshold-based interpretation of a completed screening.
//!
//! Pure functions over the final EAT-26 total and SCOFF yes-count. The
//! cutoffs are fixed published clinical thresholds and must not drift.

use serde::{Deserialize, Serialize};

/// EAT-26 totals at or above this suggest disordered eating.
pub const EAT_ELEVATED_THRESHOLD: u16 = 20;
/// SCOFF yes-counts at or above this indicate high probability.
pub const SCOFF_HIGH_THRESHOLD: usize = 4;
/// SCOFF yes-counts at or above this warrant attention.
pub const SCOFF_ATTENTION_THRESHOLD: usize = 2;

/// Categorical EAT-26 outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EatBand {
    /// Total >= 20.
    Elevated,
    /// Total < 20.
    NotElevated,
}

/// Categorical SCOFF outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoffBand {
    /// 4-5 yes answers.
    HighProbability,
    /// 2-3 yes answers.
    GroundsForAttention,
    /// 0-1 yes answers.
    NotPronounced,
}

/// The scored outcome of a completed screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub eat_total: u16,
    pub scoff_yes: usize,
    pub eat_band: EatBand,
    pub scoff_band: ScoffBand,
    /// True when either instrument crossed its consultation threshold.
    pub recommend_consultation: bool,
}

/// Interpret a completed screening. `eat_total` is the session's final
/// running score (0-78); `scoff_yes` is the count of "yes" answers (0-5),
/// computed fresh from the recorded answer sequence.
pub fn interpret(eat_total: u16, scoff_yes: usize) -> Interpretation {
    let eat_band = if eat_total >= EAT_ELEVATED_THRESHOLD {
        EatBand::Elevated
    } else {
        EatBand::NotElevated
    };

    let scoff_band = if scoff_yes >= SCOFF_HIGH_THRESHOLD {
        ScoffBand::HighProbability
    } else if scoff_yes >= SCOFF_ATTENTION_THRESHOLD {
        ScoffBand::GroundsForAttention
    } else {
        ScoffBand::NotPronounced
    };

    let recommend_consultation =
        eat_total >= EAT_ELEVATED_THRESHOLD || scoff_yes >= SCOFF_ATTENTION_THRESHOLD;

    Interpretation {
        eat_total,
        scoff_yes,
        eat_band,
        scoff_band,
        recommend_consultation,
    }
}

impl Interpretation {
    /// Render the interpretation as the text block shown to the user.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(match self.eat_band {
            EatBand::Elevated => {
                "EAT-26: score of 20 or more, elevated likelihood of disordered eating."
            }
            EatBand::NotElevated => {
                "EAT-26: score below 20, no elevated indication on this scale."
            }
        });

        lines.push(match self.scoff_band {
            ScoffBand::HighProbability => {
                "SCOFF: 4-5 \"yes\", high probability of an eating-attitude problem."
            }
            ScoffBand::GroundsForAttention => {
                "SCOFF: 2 or more \"yes\", grounds for attention and consultation."
            }
            ScoffBand::NotPronounced => {
                "SCOFF: 0-1 \"yes\", no pronounced indication on this instrument."
            }
        });

        let mut text = lines.join("\n");
        if self.recommend_consultation {
            text.push_str(
                "\n\nRecommendation: discuss this result with an eating-disorder \
                 specialist or a physician.",
            );
        }
        text
    }
}
