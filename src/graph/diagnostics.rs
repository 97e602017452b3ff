//! Diagnostics sinks injected into a graph at construction.
//!
//! The graph never logs through global state. Every noteworthy mutation or
//! traversal is reported as a [`GraphEvent`] to the sink the caller supplied.
//! [`TracingDiagnostics`] forwards events to `tracing`; duplicate edges are
//! reported at `debug` and never above.

use std::cell::RefCell;

use crate::graph::basic::VertexKey;

/// Traversal flavour reported in [`GraphEvent::TraversalFinished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Breadth-first.
    Breadth,
    /// Depth-first.
    Depth,
}

/// Something that happened to a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    /// A vertex was appended to the table.
    VertexAdded {
        /// Handle of the new vertex.
        key: VertexKey,
        /// Table slot it occupies.
        index: usize,
    },
    /// A vertex insert was refused because the table is full.
    CapacityExhausted {
        /// Fixed capacity of the table.
        capacity: usize,
    },
    /// An edge insert was refused because the edge exists.
    DuplicateEdge {
        /// Source vertex.
        from: VertexKey,
        /// Target vertex.
        to: VertexKey,
    },
    /// A directed edge was added.
    EdgeAdded {
        /// Source vertex.
        from: VertexKey,
        /// Target vertex.
        to: VertexKey,
    },
    /// A directed edge was removed.
    EdgeRemoved {
        /// Source vertex.
        from: VertexKey,
        /// Target vertex.
        to: VertexKey,
    },
    /// A vertex and all its incident edges were removed.
    VertexDeleted {
        /// Handle of the removed vertex (no longer resolves).
        key: VertexKey,
        /// Slot it occupied.
        index: usize,
        /// Incident edges removed with it.
        edges_removed: usize,
    },
    /// Compaction moved a vertex into a freed slot.
    VertexRelocated {
        /// Handle of the moved vertex (still valid).
        key: VertexKey,
        /// Previous slot.
        from: usize,
        /// New slot.
        to: usize,
    },
    /// A traversal ran to completion.
    TraversalFinished {
        /// BFS or DFS.
        kind: TraversalKind,
        /// Source vertex.
        source: VertexKey,
        /// Vertices reached, source included.
        reached: usize,
    },
    /// The graph released every vertex.
    Destroyed {
        /// Number of identities released.
        released: usize,
    },
}

/// Receiver of graph events.
pub trait Diagnostics {
    /// Handles one event raised by the graph called `graph`.
    fn record(&self, graph: &str, event: &GraphEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, graph: &str, event: &GraphEvent) {
        match *event {
            GraphEvent::VertexAdded { key, index } => {
                tracing::trace!(graph, %key, index, "vertex added");
            }
            GraphEvent::CapacityExhausted { capacity } => {
                tracing::warn!(graph, capacity, "no space left to add vertex");
            }
            GraphEvent::DuplicateEdge { from, to } => {
                tracing::debug!(graph, %from, %to, "edge already present");
            }
            GraphEvent::EdgeAdded { from, to } => {
                tracing::trace!(graph, %from, %to, "edge added");
            }
            GraphEvent::EdgeRemoved { from, to } => {
                tracing::trace!(graph, %from, %to, "edge removed");
            }
            GraphEvent::VertexDeleted {
                key,
                index,
                edges_removed,
            } => {
                tracing::trace!(graph, %key, index, edges_removed, "vertex deleted");
            }
            GraphEvent::VertexRelocated { key, from, to } => {
                tracing::trace!(graph, %key, from, to, "vertex relocated");
            }
            GraphEvent::TraversalFinished {
                kind,
                source,
                reached,
            } => {
                tracing::debug!(graph, ?kind, %source, reached, "traversal finished");
            }
            GraphEvent::Destroyed { released } => {
                tracing::debug!(graph, released, "graph destroyed");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    #[inline(always)]
    fn record(&self, _graph: &str, _event: &GraphEvent) {}
}

/// Keeps every event in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: RefCell<Vec<GraphEvent>>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<GraphEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, _graph: &str, event: &GraphEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    #[inline]
    fn record(&self, graph: &str, event: &GraphEvent) {
        (**self).record(graph, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_diagnostics_keeps_order() {
        let rec = RecordingDiagnostics::new();
        rec.record("g", &GraphEvent::CapacityExhausted { capacity: 1 });
        rec.record("g", &GraphEvent::Destroyed { released: 0 });
        assert_eq!(
            rec.take(),
            vec![
                GraphEvent::CapacityExhausted { capacity: 1 },
                GraphEvent::Destroyed { released: 0 },
            ]
        );
        assert!(rec.events().is_empty());
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let rec = RecordingDiagnostics::new();
        let borrowed = &rec;
        borrowed.record("g", &GraphEvent::Destroyed { released: 2 });
        assert_eq!(rec.events().len(), 1);
    }
}
