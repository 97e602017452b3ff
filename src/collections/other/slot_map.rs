//! `SlotMap`: a generational arena keyed by stable handles.
//!
//! Keys pair a slot index with a generation counter. Removing a value bumps
//! the slot's generation, so a key handed out before the removal stops
//! resolving even after the slot is reused (ABA protection).
//!
//! Implementation details:
//! - Free slots form an intrusive singly-linked free list threaded through
//!   the entries themselves.
//! - Generation parity encodes the slot state: even = occupied, odd = free.

use core::fmt;
use serde::{Deserialize, Serialize};

const NO_FREE: u32 = u32::MAX;

/// A key for accessing a [`SlotMap`].
///
/// Contains an index and a generation counter. A key only resolves while the
/// value it was issued for is still stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    index: u32,
    generation: u32,
}

impl SlotKey {
    #[inline(always)]
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot position inside the map.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.index as usize
    }

    /// Generation the slot had when this key was issued.
    #[inline(always)]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

enum Slot<T> {
    Occupied(T),
    Free { next_free: u32 },
}

struct Entry<T> {
    /// Generation counter. Even = occupied, Odd = free.
    generation: u32,
    slot: Slot<T>,
}

/// A generational slot map.
pub struct SlotMap<T> {
    entries: Vec<Entry<T>>,
    free_head: u32,
    len: usize,
}

impl<T> SlotMap<T> {
    /// Creates a new empty slot map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: NO_FREE,
            len: 0,
        }
    }

    /// Creates a slot map with room for `capacity` entries.
    ///
    /// # Errors
    /// Returns the allocator error if the backing storage cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, std::collections::TryReserveError> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self {
            entries,
            free_head: NO_FREE,
            len: 0,
        })
    }

    /// Inserts a value into the map, returning its key.
    ///
    /// # Errors
    /// Hands `value` back if every `u32` slot index is already in use.
    pub fn try_insert(&mut self, value: T) -> Result<SlotKey, T> {
        if self.free_head != NO_FREE {
            let idx = self.free_head;
            let entry = &mut self.entries[idx as usize];
            if let Slot::Free { next_free } = entry.slot {
                self.free_head = next_free;
            }
            entry.slot = Slot::Occupied(value);
            // Odd (free) -> even (occupied).
            entry.generation = entry.generation.wrapping_add(1);
            self.len += 1;
            return Ok(SlotKey::new(idx, entry.generation));
        }

        let Some(idx) = next_index(self.entries.len()) else {
            return Err(value);
        };
        self.entries.push(Entry {
            generation: 0,
            slot: Slot::Occupied(value),
        });
        self.len += 1;
        Ok(SlotKey::new(idx, 0))
    }

    /// Returns a shared reference to the value associated with the key.
    pub fn get(&self, key: SlotKey) -> Option<&T> {
        match self.entries.get(key.slot()) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(value),
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value associated with the key.
    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        match self.entries.get_mut(key.slot()) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(value),
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if the key still resolves.
    #[inline]
    pub fn contains_key(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value for `key`, invalidating every copy of the key.
    pub fn remove(&mut self, key: SlotKey) -> Option<T> {
        if !self.contains_key(key) {
            return None;
        }
        let entry = &mut self.entries[key.slot()];
        let prev = core::mem::replace(
            &mut entry.slot,
            Slot::Free {
                next_free: self.free_head,
            },
        );
        // Even (occupied) -> odd (free).
        entry.generation = entry.generation.wrapping_add(1);
        self.free_head = key.index;
        self.len -= 1;

        match prev {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value. Outstanding keys stop resolving.
    pub fn clear(&mut self) {
        for idx in 0..self.entries.len() {
            let generation = self.entries[idx].generation;
            if generation % 2 == 0 {
                let key = SlotKey::new(idx as u32, generation);
                self.remove(key);
            }
        }
    }

    /// Iterates over live `(key, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| match &entry.slot {
                Slot::Occupied(value) => Some((SlotKey::new(idx as u32, entry.generation), value)),
                Slot::Free { .. } => None,
            })
    }
}

/// Index for a slot appended after `len` existing ones. `NO_FREE` is
/// reserved as the free-list terminator.
#[inline]
fn next_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&i| i != NO_FREE)
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
