use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up")]
    DuplicateSignup,
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("invalid seed activity: {0}")]
    InvalidSeed(String),
}

impl RosterError {
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }
}
