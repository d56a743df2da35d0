use thiserror::Error;

/// Broad category of a roster failure, used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound | RosterError::NotRegistered => ErrorKind::NotFound,
            RosterError::AlreadySignedUp | RosterError::ActivityFull => ErrorKind::Conflict,
        }
    }
}

/// A catalog that breaks a roster invariant before any signup happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Activity '{activity}' has no capacity")]
    ZeroCapacity { activity: String },

    #[error("Activity '{activity}' has {participants} participants but room for {max_participants}")]
    OverCapacity {
        activity: String,
        participants: usize,
        max_participants: usize,
    },

    #[error("Activity '{activity}' lists '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },
}
