use std::collections::BTreeSet;

use uuid::Uuid;

/// Marker trait for data attached to an envelope.
///
/// Most signals carry no payload and use `()`. Implement this (or derive it with
/// `#[derive(Payload)]`) for the data your participants exchange. Payloads are
/// cloned when an envelope is copied, so keep them small or wrap them in `Rc`/`Arc`.
///
/// Posting an envelope through a [`Poster`](crate::Poster) additionally requires
/// the payload to be `Send`.
pub trait Payload: Clone + 'static {}

impl Payload for () {}

/// Set of unique identifiers, used by batch operations such as
/// "delete these tiles" or "select these entities".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UidSet(BTreeSet<Uuid>);

impl UidSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id, returning `false` if it was already present.
    pub fn insert(&mut self, uid: Uuid) -> bool {
        self.0.insert(uid)
    }

    pub fn remove(&mut self, uid: &Uuid) -> bool {
        self.0.remove(uid)
    }

    pub fn contains(&self, uid: &Uuid) -> bool {
        self.0.contains(uid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uuid> {
        self.0.iter()
    }
}

impl Payload for UidSet {}

impl FromIterator<Uuid> for UidSet {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Uuid> for UidSet {
    fn extend<I: IntoIterator<Item = Uuid>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for UidSet {
    type Item = Uuid;
    type IntoIter = std::collections::btree_set::IntoIter<Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
