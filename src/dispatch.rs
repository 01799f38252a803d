use tracing::{debug, trace};

use crate::{
    Envelope, Operation, OperationName, Participant, Payload, Receiver, Registry, create_event,
};

/// Signal dispatch capability for participants.
///
/// Implementors only provide access to their [`Registry`] (or `None` to opt out
/// of receiving) and, optionally, an [`on_update`](Dispatcher::on_update) hook.
/// Everything else comes with default implementations:
///
/// ```rust,ignore
/// struct Board {
///     id: ParticipantId,
///     receivers: Registry<Board>,
///     tiles: Vec<Tile>,
/// }
///
/// impl Participant for Board {
///     fn id(&self) -> &ParticipantId { &self.id }
///     fn role(&self) -> Role { Role::Model }
/// }
///
/// impl Dispatcher for Board {
///     type Payload = ();
///     fn registry(&self) -> Option<&Registry<Self>> { Some(&self.receivers) }
///     fn registry_mut(&mut self) -> Option<&mut Registry<Self>> { Some(&mut self.receivers) }
/// }
///
/// board.on("clear", |board, _| board.tiles.clear());
/// board.signal("Clear");
/// ```
///
/// Dispatch is synchronous: the receiver and the update hook have both returned
/// by the time [`send_signal`](Dispatcher::send_signal) returns. The matching
/// receiver is cloned out of the registry before it runs, so it may register,
/// unregister or clear receivers on the same participant. Those changes are seen
/// by the next dispatch.
pub trait Dispatcher: Participant + Sized + 'static {
    type Payload: Payload;

    fn registry(&self) -> Option<&Registry<Self, Self::Payload>>;

    fn registry_mut(&mut self) -> Option<&mut Registry<Self, Self::Payload>>;

    /// Called after every dispatch, whether or not a receiver matched.
    fn on_update(&mut self, _envelope: &Envelope<Self::Payload>) {}

    /// Invoke the receiver registered for the envelope's operation, then the
    /// update hook.
    ///
    /// Unknown operations are not an error: no receiver runs and the update hook
    /// is still called.
    fn send_signal(&mut self, envelope: Envelope<Self::Payload>) {
        let receiver = self
            .registry()
            .and_then(|registry| registry.lookup(envelope.operation()))
            .cloned();

        match receiver {
            Some(receiver) => {
                trace!(
                    participant = %self.id(),
                    operation = %envelope.operation(),
                    origin = %envelope.origin(),
                    "dispatching signal"
                );
                receiver.invoke(self, &envelope);
            }
            None => {
                debug!(
                    participant = %self.id(),
                    operation = %envelope.operation(),
                    "no receiver for signal"
                );
            }
        }

        self.on_update(&envelope);
    }

    /// Build an envelope from `self` and dispatch it.
    fn signal(&mut self, operation: impl Operation) {
        let envelope = create_event(Some(&*self), operation);
        self.send_signal(envelope);
    }

    /// Same as [`signal`](Dispatcher::signal), with a payload.
    fn signal_with(&mut self, operation: impl Operation, payload: Self::Payload) {
        let envelope = create_event(Some(&*self), operation).with_payload(payload);
        self.send_signal(envelope);
    }

    /// Register a receiver unless the name is already taken. Returns whether it
    /// was inserted; participants without a registry always return `false`.
    fn register(
        &mut self,
        operation: impl Operation,
        receiver: Receiver<Self, Self::Payload>,
    ) -> bool {
        match self.registry_mut() {
            Some(registry) => registry.register(operation, receiver),
            None => false,
        }
    }

    /// Wrap `handler` in a receiver and register it. The returned handle can be
    /// passed to [`unregister`](Dispatcher::unregister); `None` when the name was
    /// already taken (or blank, or there is no registry) and nothing was registered.
    fn on<F>(
        &mut self,
        operation: impl Operation,
        handler: F,
    ) -> Option<Receiver<Self, Self::Payload>>
    where
        F: Fn(&mut Self, &Envelope<Self::Payload>) + 'static,
    {
        let receiver = Receiver::new(handler);
        self.register(operation, receiver.clone()).then_some(receiver)
    }

    /// Remove `receiver` and return the name it was registered under.
    fn unregister(&mut self, receiver: &Receiver<Self, Self::Payload>) -> Option<OperationName> {
        self.registry_mut()?.unregister(receiver)
    }

    /// Remove every receiver.
    fn clear_receivers(&mut self) {
        if let Some(registry) = self.registry_mut() {
            registry.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Origin, ParticipantId, Role};
    use std::{cell::RefCell, rc::Rc};

    struct Panel {
        id: ParticipantId,
        receivers: Registry<Panel>,
        moves: u32,
        updates: Vec<String>,
    }

    fn panel() -> Panel {
        Panel {
            id: ParticipantId::new("panel"),
            receivers: Registry::new(),
            moves: 0,
            updates: Vec::new(),
        }
    }

    impl Participant for Panel {
        fn id(&self) -> &ParticipantId {
            &self.id
        }

        fn role(&self) -> Role {
            Role::Controller
        }
    }

    impl Dispatcher for Panel {
        type Payload = ();

        fn registry(&self) -> Option<&Registry<Self>> {
            Some(&self.receivers)
        }

        fn registry_mut(&mut self) -> Option<&mut Registry<Self>> {
            Some(&mut self.receivers)
        }

        fn on_update(&mut self, envelope: &Envelope) {
            self.updates.push(envelope.operation().to_string());
        }
    }

    #[test]
    fn test_dispatch_ignores_case() {
        let mut panel = panel();
        panel.on("move", |p, e| {
            assert_eq!(e.origin(), Origin::Controller);
            p.moves += 1;
        });
        panel.signal("Move");
        assert_eq!(panel.moves, 1);
        assert_eq!(panel.updates, ["Move"]);
    }

    #[test]
    fn test_unmatched_signal_still_updates() {
        let mut panel = panel();
        panel.on("move", |p, _| p.moves += 1);
        panel.signal("jump");
        assert_eq!(panel.moves, 0);
        assert_eq!(panel.updates, ["jump"]);
    }

    #[test]
    fn test_receiver_can_unregister_itself() {
        let mut panel = panel();
        let handle: Rc<RefCell<Option<Receiver<Panel>>>> = Rc::new(RefCell::new(None));
        let slot = handle.clone();
        let receiver = panel.on("once", move |p: &mut Panel, _| {
            p.moves += 1;
            if let Some(me) = slot.borrow_mut().take() {
                assert!(p.unregister(&me).is_some());
            }
        });
        *handle.borrow_mut() = receiver;

        panel.signal("once");
        panel.signal("once");
        assert_eq!(panel.moves, 1);
        assert_eq!(panel.updates.len(), 2);
        assert!(panel.receivers.is_empty());
    }

    #[test]
    fn test_on_reports_taken_name() {
        let mut panel = panel();
        let first = panel.on("move", |p, _| p.moves += 1);
        assert!(first.is_some());
        assert!(panel.on("MOVE", |p, _| p.moves += 10).is_none());
        assert!(panel.on(" ", |p, _| p.moves += 100).is_none());

        panel.signal("move");
        assert_eq!(panel.moves, 1);
        assert_eq!(panel.unregister(&first.unwrap()).unwrap(), "move");
    }
}
