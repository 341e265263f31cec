use sova_instruments::EatCode;

/// An inbound event delivered by the transport, already decoded into the
/// core vocabulary. Option codes arrive typed, so an unrecognized code
/// cannot reach the flow controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// /start or /restart: reset the session and show the intro.
    Start,
    /// /help: informational only, no session mutation.
    Help,
    /// The user acknowledged the intro disclaimer.
    Begin,
    /// The user selected an option for an EAT-26 question.
    EatAnswer { index: usize, code: EatCode },
    /// The user answered yes or no to a SCOFF question.
    ScoffAnswer { index: usize, value: bool },
}
