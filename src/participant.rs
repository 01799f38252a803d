use std::{fmt, ops::Deref, sync::Arc};

/// A lightweight, cheaply cloned name of a participant.
///
/// Envelopes carry the id of the participant that raised them as their source.
/// Ids are usually handed out by [`AppContext::participant_id`](crate::AppContext::participant_id),
/// which keeps them unique within an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantId(Arc<str>);

impl ParticipantId {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the participant's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for ParticipantId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The part a participant plays in the model/view/controller triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Model,
    Controller,
    View,
    #[default]
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Model => write!(f, "model"),
            Role::Controller => write!(f, "controller"),
            Role::View => write!(f, "view"),
            Role::Other => write!(f, "other"),
        }
    }
}

/// Anything that can raise signals: a view, a controller, a model, or some other
/// component of the application.
///
/// This trait is object safe so that the event factory can accept
/// `&dyn Participant`. Receiving signals requires [`Dispatcher`](crate::Dispatcher).
pub trait Participant {
    fn id(&self) -> &ParticipantId;

    fn role(&self) -> Role {
        Role::Other
    }
}
