//! Test utilities for code built on Gosling signals.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! gosling = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! [`Probe`] is a participant with a configurable role that records every
//! envelope its update hook sees and counts receiver invocations per operation.
//!
//! ```rust,ignore
//! let mut probe = Probe::new("ctrl", Role::Controller);
//! probe.listen("move");
//! probe.signal("Move");
//! assert_eq!(probe.received("move"), 1);
//! assert_eq!(probe.update_count(), 1);
//! ```

use std::collections::HashMap;

use crate::{
    Dispatcher, Envelope, Operation, OperationName, Participant, ParticipantId, Payload, Registry,
    Role,
};

pub struct Probe<P: Payload = ()> {
    id: ParticipantId,
    role: Role,
    registry: Option<Registry<Probe<P>, P>>,
    received: HashMap<OperationName, usize>,
    updates: Vec<Envelope<P>>,
}

impl<P: Payload> Probe<P> {
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            id: ParticipantId::new(name),
            role,
            registry: Some(Registry::new()),
            received: HashMap::new(),
            updates: Vec::new(),
        }
    }

    /// A probe that has opted out of receiving: it has no registry.
    pub fn without_registry(name: &str, role: Role) -> Self {
        Self {
            registry: None,
            ..Self::new(name, role)
        }
    }

    /// Register a counting receiver under `operation`. Returns whether it was
    /// inserted.
    pub fn listen(&mut self, operation: impl Operation) -> bool {
        let name = OperationName::new(operation);
        let key = name.clone();
        let receiver = crate::Receiver::new(move |probe: &mut Probe<P>, _: &Envelope<P>| {
            *probe.received.entry(key.clone()).or_default() += 1;
        });
        self.register(name, receiver)
    }

    /// How many times a receiver registered for `operation` ran.
    pub fn received(&self, operation: impl Operation) -> usize {
        self.received
            .get(&OperationName::new(operation))
            .copied()
            .unwrap_or_default()
    }

    /// Receiver invocations across all operations.
    pub fn total_received(&self) -> usize {
        self.received.values().sum()
    }

    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    /// Envelopes seen by the update hook, oldest first.
    pub fn updates(&self) -> &[Envelope<P>] {
        &self.updates
    }

    pub fn last_update(&self) -> Option<&Envelope<P>> {
        self.updates.last()
    }

    pub fn reset(&mut self) {
        self.received.clear();
        self.updates.clear();
    }
}

impl<P: Payload> Participant for Probe<P> {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn role(&self) -> Role {
        self.role
    }
}

impl<P: Payload> Dispatcher for Probe<P> {
    type Payload = P;

    fn registry(&self) -> Option<&Registry<Self, P>> {
        self.registry.as_ref()
    }

    fn registry_mut(&mut self) -> Option<&mut Registry<Self, P>> {
        self.registry.as_mut()
    }

    fn on_update(&mut self, envelope: &Envelope<P>) {
        self.updates.push(envelope.clone());
    }
}
