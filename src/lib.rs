//! # `capgraph` - Capacity-Bounded Generic Graph
//!
//! A directed graph over arbitrary, caller-supplied identities, with a fixed
//! vertex capacity, symmetric and directed edge maintenance, vertex deletion
//! with slot compaction, and breadth-first / depth-first traversals that
//! return per-vertex records.
//!
//! ## Guarantees
//!
//! ### Stable handles
//! - Vertices live densely in a fixed-capacity table; deleting one moves the
//!   last vertex into the freed slot.
//! - Neighbor lists store generation-checked [`VertexKey`]s, not slots, so a
//!   relocated vertex is still reached through every edge pointing at it,
//!   and a deleted vertex's key never resolves again.
//!
//! ### Failure model
//! - Every failure is a [`GraphError`] value; nothing aborts the process.
//! - Mutations check all preconditions first. A failed call, including a
//!   failed symmetric edge insert, leaves the graph unchanged.
//! - The table is reserved in full at construction; if that fails no graph
//!   is returned.
//!
//! ### Element policy
//! Identities are compared, swapped, released and printed through an
//! [`ElementPolicy`] chosen as a type parameter, so the capability set is
//! resolved at compile time.
//!
//! ### Diagnostics
//! Graph events go to an injected [`Diagnostics`] sink. The default sink
//! forwards them to `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use capgraph::BoundedGraph;
//!
//! let mut g = BoundedGraph::new("demo", 3).unwrap();
//! g.add_edge('A', 'B').unwrap();
//! g.add_edge('B', 'C').unwrap();
//! g.add_edge('A', 'C').unwrap();
//!
//! let bfs = g.bfs(&'A').unwrap();
//! let levels: Vec<i32> = bfs.iter().map(|(_, r)| r.level).collect();
//! assert_eq!(levels, vec![0, 1, 1]);
//!
//! // The table is full.
//! assert!(g.add_vertex('D').is_err());
//! assert!(g.find(&'D').is_none());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use graph::{
    BfsRecord, BfsTraversal, BoundedGraph, DfsRecord, DfsTraversal, Diagnostics, ElementPolicy,
    GraphBuilder, GraphError, GraphEvent, GraphSnapshot, NaturalPolicy, Vertex, VertexKey,
};

// Compile-time assertions for layout claims the API relies on.
const _: () = {
    use core::mem;

    // Handles are two `u32`s and stay `Copy`-cheap.
    assert!(mem::size_of::<VertexKey>() == 8);

    // Traversal stamps for a full table fit in `i32`.
    assert!(graph::MAX_CAPACITY * 2 <= i32::MAX as usize);
};
