//! `NeighborList`: an insertion-ordered set of non-owning references.
//!
//! Each vertex owns one list holding the handles of its outgoing neighbors.
//! Order of insertion is preserved through deletions, since traversal order
//! is observable by callers.
//!
//! Performance Characteristics:
//! - `append`: O(1) amortized
//! - `find` / `delete`: O(degree)
//! - `get`: O(1), used as a resumable cursor

/// Ordered sequence of copyable references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborList<R> {
    items: Vec<R>,
}

impl<R: Copy + PartialEq> NeighborList<R> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list sized for `capacity_hint` neighbors.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity_hint),
        }
    }

    /// Appends `item` after every existing entry.
    #[inline]
    pub fn append(&mut self, item: R) {
        self.items.push(item);
    }

    /// Returns the stored reference equal to `item`, if any.
    #[inline]
    pub fn find(&self, item: R) -> Option<R> {
        self.items.iter().copied().find(|&r| r == item)
    }

    /// Removes the first entry equal to `item`, keeping the order of the rest.
    ///
    /// Returns `false` (and does nothing) if `item` is absent.
    pub fn delete(&mut self, item: R) -> bool {
        match self.items.iter().position(|&r| r == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Entry at `position` in insertion order.
    #[inline(always)]
    pub fn get(&self, position: usize) -> Option<R> {
        self.items.get(position).copied()
    }

    /// Entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = R> + '_ {
        self.items.iter().copied()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Copy + PartialEq> Default for NeighborList<R> {
    fn default() -> Self {
        Self::new()
    }
}
