//! Ordered set of item identifiers.

use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Ordered sequence of unique item identifiers.
///
/// Defines the index-to-identifier bijection that every relevance vector is
/// laid out against. Lookups in both directions are O(1).
#[derive(Debug, Clone, Default)]
pub struct ItemUniverse {
    items: IndexSet<String>,
}

impl ItemUniverse {
    /// Creates a universe from identifiers in their canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateItem`] if an identifier appears twice.
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let iter = items.into_iter();
        let mut set = IndexSet::with_capacity(iter.size_hint().0);
        for item in iter {
            let item: String = item.into();
            if set.contains(&item) {
                return Err(Error::DuplicateItem(item));
            }
            set.insert(item);
        }
        Ok(Self { items: set })
    }

    /// Number of items in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the universe holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `item`, if present.
    #[must_use]
    pub fn position(&self, item: &str) -> Option<usize> {
        self.items.get_index_of(item)
    }

    /// Identifier at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get_index(index).map(String::as_str)
    }

    /// Returns true if `item` belongs to the universe.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Iterates identifiers in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
