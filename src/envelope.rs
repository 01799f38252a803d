use crate::{Meta, Operation, OperationName, Origin, ParticipantId, Payload};

/// Signal passed from a participant to its receivers.
///
/// - `meta`: who raised the signal and when (see [`Meta`]).
/// - `origin`: the sender's role at the time of raising.
/// - `operation`: the name receivers are looked up by, ignoring case.
/// - `payload`: optional data for the receiver.
///
/// Envelopes are immutable once built. Use [`create_event`](crate::create_event)
/// to build one from a participant, or the role-specific constructors below when
/// the origin is known up front.
#[derive(Debug, Clone)]
pub struct Envelope<P: Payload = ()> {
    meta: Meta,
    origin: Origin,
    operation: OperationName,
    payload: Option<P>,
}

impl<P: Payload> Envelope<P> {
    /// Create an envelope with an explicit origin.
    ///
    /// Passing [`Origin::Null`] yields a null envelope regardless of the other
    /// arguments.
    pub fn new(origin: Origin, source: ParticipantId, operation: impl Operation) -> Self {
        if origin.is_null() {
            return Self::null();
        }
        Self {
            meta: Meta::new(Some(source)),
            origin,
            operation: OperationName::new(operation),
            payload: None,
        }
    }

    pub fn model(source: ParticipantId, operation: impl Operation) -> Self {
        Self::new(Origin::Model, source, operation)
    }

    pub fn controller(source: ParticipantId, operation: impl Operation) -> Self {
        Self::new(Origin::Controller, source, operation)
    }

    pub fn view(source: ParticipantId, operation: impl Operation) -> Self {
        Self::new(Origin::View, source, operation)
    }

    pub fn generic(source: ParticipantId, operation: impl Operation) -> Self {
        Self::new(Origin::Generic, source, operation)
    }

    /// The no-op envelope. It has no source, no operation and no payload, and
    /// is never valid.
    pub fn null() -> Self {
        Self {
            meta: Meta::new(None),
            origin: Origin::Null,
            operation: OperationName::empty(),
            payload: None,
        }
    }

    /// Attach a payload. Null envelopes stay empty.
    pub fn with_payload(mut self, payload: P) -> Self {
        if !self.origin.is_null() {
            self.payload = Some(payload);
        }
        self
    }

    /// True unless this is a null envelope or the operation name is blank.
    pub fn is_valid(&self) -> bool {
        !self.origin.is_null() && !self.operation.is_blank()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn source(&self) -> Option<&ParticipantId> {
        self.meta.source()
    }

    pub fn operation(&self) -> &OperationName {
        &self.operation
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Shorthand for comparing the operation name, ignoring case.
    pub fn is(&self, operation: impl Operation) -> bool {
        self.operation == *operation.name()
    }
}
