use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown EAT-26 option code: {0}")]
    UnknownCode(String),
}
