//! Leaf containers the graph engine is built from.
//!
//! - `other`: neighbor lists, bounded work-lists and the generational slot map

pub mod other;

// Re-export commonly used types from submodules
pub use other::{BoundedQueue, BoundedStack, NeighborList, SlotKey, SlotMap};
