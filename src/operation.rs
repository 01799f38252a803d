use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Anything that can name an operation carried by an envelope.
///
/// Implemented for string types and [`OperationName`]. Derive it on an enum with
/// `#[derive(Operation)]` to use the variant names as operation names:
///
/// ```rust,ignore
/// #[derive(Operation)]
/// enum EditorOp { Move, Rotate }
///
/// controller.signal(EditorOp::Move);
/// ```
pub trait Operation {
    fn name(&self) -> Cow<'_, str>;
}

impl Operation for str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Operation for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: Operation + ?Sized> Operation for &T {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

/// Name of an operation, compared and hashed without regard to case.
///
/// The original spelling is kept for display, so `"Move"`, `"move"` and `"MOVE"`
/// are equal keys but each prints the way it was written.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationName(Arc<str>);

impl OperationName {
    pub fn new(name: impl Operation) -> Self {
        Self(Arc::from(name.name().as_ref()))
    }

    pub(crate) fn empty() -> Self {
        Self(Arc::from(""))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name is empty or consists of whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl Operation for OperationName {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl PartialEq for OperationName {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.folded().eq(other.folded())
    }
}

impl Eq for OperationName {}

impl Hash for OperationName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl PartialEq<str> for OperationName {
    fn eq(&self, other: &str) -> bool {
        self.folded().eq(other.chars().flat_map(char::to_lowercase))
    }
}

impl PartialEq<&str> for OperationName {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl From<&str> for OperationName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for OperationName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
