use std::{collections::BTreeMap, fmt, sync::Arc};

use tracing::trace;

use crate::{Error, Result};

type Builder<T, A> = Box<dyn Fn(&A) -> T>;

/// Explicit registry of builder functions keyed by a stable identifier.
///
/// Menu entries, tools and similar items are registered once at startup and
/// built on demand by id. `A` is whatever the builders need to do their job (a
/// context, a locale, a parent id).
///
/// ```rust
/// use gosling::Catalog;
///
/// let mut menu = Catalog::<String, String>::new();
/// menu.register("file.open", |locale| format!("Open ({locale})")).unwrap();
///
/// let locale = "en".to_string();
/// assert_eq!(menu.build("file.open", &locale).unwrap(), "Open (en)");
/// assert!(menu.build("file.close", &locale).is_err());
/// ```
pub struct Catalog<T, A = ()> {
    builders: BTreeMap<Arc<str>, Builder<T, A>>,
}

impl<T, A> Catalog<T, A> {
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Add a builder. Ids are unique; registering one twice is an error.
    pub fn register<F>(&mut self, id: &str, builder: F) -> Result<()>
    where
        F: Fn(&A) -> T + 'static,
    {
        let id: Arc<str> = Arc::from(id);
        if self.builders.contains_key(&id) {
            return Err(Error::DuplicateBuilder(id));
        }
        trace!(builder = %id, "builder registered");
        self.builders.insert(id, Box::new(builder));
        Ok(())
    }

    pub fn build(&self, id: &str, args: &A) -> Result<T> {
        let builder = self
            .builders
            .get(id)
            .ok_or_else(|| Error::UnknownBuilder(Arc::from(id)))?;
        Ok(builder(args))
    }

    /// Build every registered item, in id order.
    pub fn build_all(&self, args: &A) -> Vec<(Arc<str>, T)> {
        self.builders
            .iter()
            .map(|(id, builder)| (id.clone(), builder(args)))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.builders.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(|id| id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<T, A> Default for Catalog<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for Catalog<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
