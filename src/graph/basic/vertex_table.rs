//! Fixed-capacity vertex table with stable, generation-checked handles.
//!
//! Vertices live densely in `entries[0..len]`; a vertex's `index` is always
//! its current position there. Deletion compacts by moving the last vertex
//! into the freed slot, which renumbers that one vertex.
//!
//! Neighbor lists never store positions. They store [`VertexKey`]s, which
//! resolve through a slot map holding each vertex's *current* position, so
//! compaction only has to patch one slot-map entry and no neighbor reference
//! can go stale. A key whose vertex was deleted stops resolving.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::collections::other::{NeighborList, SlotKey, SlotMap};
use crate::graph::error::GraphError;

/// Largest supported capacity. DFS hands out `2 * len` interval stamps as
/// `i32`, and handles index with `u32`.
pub const MAX_CAPACITY: usize = (i32::MAX / 2) as usize;

/// Stable handle to a vertex.
///
/// Survives compaction of the vertex table. Stops resolving once the vertex
/// is deleted, even if its table slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexKey(SlotKey);

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One row of the table.
pub(crate) struct VertexEntry<T> {
    pub(crate) key: VertexKey,
    pub(crate) index: usize,
    pub(crate) data: T,
    pub(crate) neighbors: NeighborList<VertexKey>,
}

pub(crate) struct VertexTable<T> {
    entries: Vec<VertexEntry<T>>,
    handles: SlotMap<usize>,
    capacity: usize,
}

impl<T> VertexTable<T> {
    /// Reserves room for `capacity` vertices up front; the table never grows.
    pub(crate) fn try_new(capacity: usize) -> Result<Self, GraphError> {
        if capacity > MAX_CAPACITY {
            return Err(GraphError::InvalidCapacity {
                requested: capacity,
            });
        }
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        let handles = SlotMap::try_with_capacity(capacity)?;
        Ok(Self {
            entries,
            handles,
            capacity,
        })
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline(always)]
    pub(crate) fn entries(&self) -> &[VertexEntry<T>] {
        &self.entries
    }

    #[inline(always)]
    pub(crate) fn entry(&self, index: usize) -> Option<&VertexEntry<T>> {
        self.entries.get(index)
    }

    #[inline(always)]
    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut VertexEntry<T>> {
        self.entries.get_mut(index)
    }

    /// Current position of the vertex behind `key`.
    #[inline(always)]
    pub(crate) fn index_of(&self, key: VertexKey) -> Option<usize> {
        self.handles.get(key.0).copied()
    }

    /// Position of the vertex reached through `position`-th neighbor of
    /// vertex `index`.
    #[inline]
    pub(crate) fn neighbor_index(&self, index: usize, position: usize) -> Option<usize> {
        let key = self.entries.get(index)?.neighbors.get(position)?;
        self.index_of(key)
    }

    /// Positions of the neighbors of vertex `index`, in insertion order.
    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .get(index)
            .into_iter()
            .flat_map(|entry| entry.neighbors.iter())
            .filter_map(move |key| self.index_of(key))
    }

    /// Appends a vertex at position `len`.
    ///
    /// Hands `data` back if the table is full or no handle can be issued.
    pub(crate) fn push(&mut self, data: T, neighbor_hint: usize) -> Result<VertexKey, T> {
        if self.is_full() {
            return Err(data);
        }
        let index = self.entries.len();
        let Ok(handle) = self.handles.try_insert(index) else {
            return Err(data);
        };
        let key = VertexKey(handle);
        self.entries.push(VertexEntry {
            key,
            index,
            data,
            neighbors: NeighborList::with_capacity(neighbor_hint),
        });
        Ok(key)
    }

    /// Removes the vertex at `index`, moving the last vertex into its slot.
    ///
    /// `swap` exchanges the two identities. Returns the removed row (its
    /// `index` field set to the freed slot) and the key of the relocated
    /// vertex, if one moved. The removed key no longer resolves afterwards.
    pub(crate) fn remove_compacting(
        &mut self,
        index: usize,
        swap: impl FnOnce(&mut T, &mut T),
    ) -> Option<(VertexEntry<T>, Option<VertexKey>)> {
        let last = self.entries.len().checked_sub(1)?;
        if index > last {
            return None;
        }

        if index != last {
            let (head, tail) = self.entries.split_at_mut(last);
            let hole = &mut head[index];
            let moved = &mut tail[0];
            swap(&mut hole.data, &mut moved.data);
            core::mem::swap(&mut hole.neighbors, &mut moved.neighbors);
            core::mem::swap(&mut hole.key, &mut moved.key);
        }

        let mut removed = self.entries.pop()?;
        removed.index = index;
        self.handles.remove(removed.key.0);

        let relocated = if index == last {
            None
        } else {
            let entry = &mut self.entries[index];
            entry.index = index;
            if let Some(slot) = self.handles.get_mut(entry.key.0) {
                *slot = index;
            }
            Some(entry.key)
        };

        Some((removed, relocated))
    }

    /// Empties the table, invalidating every key.
    pub(crate) fn take_all(&mut self) -> Vec<VertexEntry<T>> {
        self.handles.clear();
        core::mem::take(&mut self.entries)
    }
}

/// Borrowed view of one vertex.
pub struct Vertex<'g, T> {
    table: &'g VertexTable<T>,
    entry: &'g VertexEntry<T>,
}

impl<'g, T> Vertex<'g, T> {
    #[inline(always)]
    pub(crate) fn new(table: &'g VertexTable<T>, entry: &'g VertexEntry<T>) -> Self {
        Self { table, entry }
    }

    /// Identity stored for this vertex.
    #[inline(always)]
    pub fn data(&self) -> &'g T {
        &self.entry.data
    }

    /// Current table slot. Changes when compaction relocates the vertex.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.entry.index
    }

    /// Stable handle.
    #[inline(always)]
    pub fn key(&self) -> VertexKey {
        self.entry.key
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.entry.neighbors.len()
    }

    /// Outgoing neighbors in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = Vertex<'g, T>> + 'g {
        let (table, entry) = (self.table, self.entry);
        entry
            .neighbors
            .iter()
            .filter_map(move |key| table.index_of(key))
            .filter_map(move |idx| table.entry(idx))
            .map(move |entry| Vertex::new(table, entry))
    }
}

impl<T> Clone for Vertex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Vertex<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Vertex<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("key", &self.entry.key)
            .field("index", &self.entry.index)
            .field("data", &self.entry.data)
            .field("degree", &self.entry.neighbors.len())
            .finish()
    }
}
