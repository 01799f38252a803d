use tracing::{debug, trace};

use crate::{Operation, OperationName, Payload, Receiver};

/// Per-participant mapping from operation name to receiver.
///
/// Names are compared without regard to case and are unique within a registry:
/// the first receiver registered under a name keeps it, and later registrations
/// under the same name are ignored. Entries are kept in registration order, which
/// decides the "first match" when one receiver is registered under several names.
pub struct Registry<T, P: Payload = ()> {
    entries: Vec<(OperationName, Receiver<T, P>)>,
}

impl<T, P: Payload> Registry<T, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `receiver` under `operation`.
    ///
    /// Returns `false` (and leaves the registry unchanged) when the name is blank
    /// or already taken.
    pub fn register(&mut self, operation: impl Operation, receiver: Receiver<T, P>) -> bool {
        let name = OperationName::new(operation);
        if name.is_blank() {
            debug!("ignoring receiver registered under a blank name");
            return false;
        }
        if self.contains(&name) {
            debug!(operation = %name, "name already registered, keeping the first receiver");
            return false;
        }
        trace!(operation = %name, "receiver registered");
        self.entries.push((name, receiver));
        true
    }

    /// Remove the first entry holding `receiver` and return its name.
    pub fn unregister(&mut self, receiver: &Receiver<T, P>) -> Option<OperationName> {
        let index = self
            .entries
            .iter()
            .position(|(_, r)| r.same_as(receiver))?;
        let (name, _) = self.entries.remove(index);
        trace!(operation = %name, "receiver unregistered");
        Some(name)
    }

    pub fn lookup(&self, operation: &OperationName) -> Option<&Receiver<T, P>> {
        self.entries
            .iter()
            .find(|(name, _)| name == operation)
            .map(|(_, r)| r)
    }

    pub fn contains(&self, operation: &OperationName) -> bool {
        self.lookup(operation).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &OperationName> {
        self.entries.iter().map(|(name, _)| name)
    }
}

impl<T, P: Payload> Default for Registry<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Payload> std::fmt::Debug for Registry<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Counter = Receiver<u32>;

    fn counter() -> Counter {
        Receiver::new(|count: &mut u32, _| *count += 1)
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = Registry::new();
        let first = counter();
        let second = counter();
        assert!(registry.register("move", first.clone()));
        assert!(!registry.register("MOVE", second));
        assert_eq!(registry.len(), 1);

        let found = registry.lookup(&OperationName::from("Move")).unwrap();
        assert!(found.same_as(&first));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let mut registry = Registry::new();
        assert!(!registry.register("  ", counter()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_returns_name() {
        let mut registry = Registry::new();
        let receiver = counter();
        registry.register("Rotate", receiver.clone());
        let name = registry.unregister(&receiver).unwrap();
        assert_eq!(name.as_str(), "Rotate");
        assert!(registry.is_empty());

        // the freed name can be taken again
        assert!(registry.register(name, receiver));
    }

    #[test]
    fn test_unregister_unknown_leaves_registry_unchanged() {
        let mut registry = Registry::new();
        registry.register("a", counter());
        registry.register("b", counter());
        assert!(registry.unregister(&counter()).is_none());
        let names: Vec<_> = registry.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_unregister_removes_first_match_only() {
        let mut registry = Registry::new();
        let shared = counter();
        registry.register("open", shared.clone());
        registry.register("reopen", shared.clone());
        assert_eq!(registry.unregister(&shared).unwrap(), "open");
        assert_eq!(registry.unregister(&shared).unwrap(), "reopen");
        assert!(registry.unregister(&shared).is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = Registry::new();
        registry.register("a", counter());
        registry.register("b", counter());
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains(&OperationName::from("a")));
    }
}
