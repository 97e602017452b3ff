//! Basic graph implementations.
//!
//! This module contains the capacity-bounded adjacency-list graph, its vertex
//! table, and the traversal engines that run over it.

mod bounded_graph;
mod snapshot;
mod traversal;
mod vertex_table;

pub use bounded_graph::{BoundedGraph, GraphBuilder};
pub use snapshot::{GraphSnapshot, VertexSnapshot};
pub use traversal::{BfsRecord, BfsTraversal, DfsRecord, DfsTraversal, Traversal, UNVISITED};
pub use vertex_table::{Vertex, VertexKey, MAX_CAPACITY};
