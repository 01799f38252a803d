use std::sync::Arc;

use tokio::sync::mpsc::error::{SendError, TrySendError};

use crate::{Envelope, ParticipantId, Payload};

/// Errors raised by the supporting components (mailbox, context, catalog, config).
///
/// Signal dispatch itself never fails: unmatched operations and duplicate
/// registrations are reported through `tracing` only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The mailbox has reached its capacity.")]
    MailboxFull,

    #[error("The mailbox is closed: {0}")]
    MailboxClosed(String),

    #[error("Participant with name '{0}' already exists.")]
    ParticipantAlreadyExists(ParticipantId),

    #[error("Participant name must not be blank.")]
    BlankParticipantName,

    #[error("Application context has been shut down.")]
    ContextClosed,

    #[error("No builder registered under '{0}'.")]
    UnknownBuilder(Arc<str>),

    #[error("Builder '{0}' is already registered.")]
    DuplicateBuilder(Arc<str>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("Couldn't decode configuration: {0}")]
    ConfigDecode(#[from] serde_json::Error),
}

impl<P: Payload> From<SendError<Envelope<P>>> for Error {
    fn from(e: SendError<Envelope<P>>) -> Self {
        Error::MailboxClosed(e.to_string())
    }
}

impl<P: Payload> From<TrySendError<Envelope<P>>> for Error {
    fn from(e: TrySendError<Envelope<P>>) -> Self {
        match e {
            TrySendError::Full(_) => Error::MailboxFull,
            TrySendError::Closed(_) => Error::MailboxClosed(e.to_string()),
        }
    }
}
