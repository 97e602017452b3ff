//! Graph engine and the policies it is parameterised over.
//!
//! - `basic`: the bounded graph, its vertex table and traversals
//! - `policy`: how identities are compared, swapped, released and printed
//! - `diagnostics`: where graph events are reported
//! - `error`: failure taxonomy

pub mod basic;
pub mod diagnostics;
pub mod error;
pub mod policy;

// Re-export commonly used types from submodules
pub use basic::{
    BfsRecord, BfsTraversal, BoundedGraph, DfsRecord, DfsTraversal, GraphBuilder, GraphSnapshot,
    Traversal, Vertex, VertexKey, VertexSnapshot, MAX_CAPACITY, UNVISITED,
};
pub use diagnostics::{
    Diagnostics, GraphEvent, NullDiagnostics, RecordingDiagnostics, TracingDiagnostics,
    TraversalKind,
};
pub use error::GraphError;
pub use policy::{ElementPolicy, FloatPolicy, FnPolicy, NaturalPolicy, Printed};
