//! sova-core
//!
//! The questionnaire flow state machine: per-conversation session state,
//! the session store, inbound event and outbound render vocabulary, and
//! the flow controller that advances a session through the EAT-26 and
//! SCOFF phases. No transport dependency; the shared vocabulary of the
//! sova system.

pub mod error;
pub mod event;
pub mod flow;
pub mod render;
pub mod session;
pub mod store;

pub use error::FlowError;
pub use event::Event;
pub use flow::FlowController;
pub use render::{Choice, ChoiceData, Render};
pub use session::{Phase, QuestionnaireSession};
pub use store::{ChatId, SessionStore};
