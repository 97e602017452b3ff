//! Specialized collections backing the graph: per-vertex neighbor storage,
//! traversal work-lists, and stable handles.

pub mod neighbor_list;
pub mod slot_map;
pub mod work_list;

pub use neighbor_list::NeighborList;
pub use slot_map::{SlotKey, SlotMap};
pub use work_list::{BoundedQueue, BoundedStack};
