use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// An answer event arrived for a conversation with no active session,
    /// e.g. after a process restart. Not fatal; the transport should
    /// prompt the user to send /start.
    #[error("no active session for this conversation")]
    NoSession,

    /// The event's question index lies outside the catalog. Contract
    /// violation by the event producer; the event is rejected, never
    /// coerced.
    #[error("{instrument} question index {index} out of range (max {max})")]
    IndexOutOfRange {
        instrument: &'static str,
        index: usize,
        max: usize,
    },
}
