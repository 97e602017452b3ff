//! Serializable view of a graph's vertex table and adjacency.
//!
//! A snapshot records identities in table order and neighbors as table
//! indices, which is enough to rebuild an equivalent graph with
//! [`BoundedGraph::restore`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::basic::bounded_graph::{BoundedGraph, GraphBuilder};
use crate::graph::diagnostics::Diagnostics;
use crate::graph::error::GraphError;
use crate::graph::policy::ElementPolicy;

/// Point-in-time copy of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<T> {
    /// Graph name.
    pub name: String,
    /// Vertex capacity.
    pub capacity: usize,
    /// Directed edge count.
    pub edge_count: usize,
    /// Vertices in table order.
    pub vertices: Vec<VertexSnapshot<T>>,
}

/// One vertex of a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSnapshot<T> {
    /// Table slot.
    pub index: usize,
    /// Identity.
    pub data: T,
    /// Table slots of the outgoing neighbors, in insertion order.
    pub neighbors: Vec<usize>,
}

impl<T: Serialize> GraphSnapshot<T> {
    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    /// Fails if an identity cannot be serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: DeserializeOwned> GraphSnapshot<T> {
    /// Parses a snapshot rendered by [`to_json`](Self::to_json).
    ///
    /// # Errors
    /// Fails on malformed JSON or identities that do not deserialize.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<T, P, D> BoundedGraph<T, P, D>
where
    T: Clone,
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    /// Copies the current table and adjacency.
    pub fn snapshot(&self) -> GraphSnapshot<T> {
        let vertices = self
            .table
            .entries()
            .iter()
            .map(|entry| VertexSnapshot {
                index: entry.index,
                data: entry.data.clone(),
                neighbors: self.table.neighbor_indices(entry.index).collect(),
            })
            .collect();

        GraphSnapshot {
            name: self.name().to_owned(),
            capacity: self.capacity(),
            edge_count: self.edge_count(),
            vertices,
        }
    }
}

impl<T, P, D> BoundedGraph<T, P, D>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    /// Rebuilds a graph from `snapshot`, reproducing vertex slots and
    /// neighbor order exactly.
    ///
    /// # Errors
    /// - [`GraphError::InvalidSnapshot`] if it holds more vertices than its
    ///   capacity, indices are not dense, an identity repeats, a neighbor index is out of range, an edge repeats,
    ///   or the edge count disagrees with the adjacency.
    /// - Any construction error of [`GraphBuilder::build`].
    pub fn restore(snapshot: GraphSnapshot<T>, policy: P, diagnostics: D) -> Result<Self, GraphError> {
        if snapshot.vertices.len() > snapshot.capacity {
            return Err(GraphError::InvalidSnapshot {
                reason: "more vertices than capacity",
            });
        }

        let mut graph = GraphBuilder::new(snapshot.name, snapshot.capacity)
            .policy(policy)
            .diagnostics(diagnostics)
            .build()?;

        let mut adjacency = Vec::with_capacity(snapshot.vertices.len());
        for (expected, vertex) in snapshot.vertices.into_iter().enumerate() {
            if vertex.index != expected {
                return Err(GraphError::InvalidSnapshot {
                    reason: "vertex indices are not dense",
                });
            }
            let before = graph.len();
            graph.add_vertex(vertex.data)?;
            if graph.len() == before {
                return Err(GraphError::InvalidSnapshot {
                    reason: "duplicate vertex identity",
                });
            }
            adjacency.push(vertex.neighbors);
        }

        let keys: Vec<_> = graph.iter().map(|v| v.key()).collect();
        for (from, targets) in adjacency.into_iter().enumerate() {
            for to in targets {
                let target = *keys.get(to).ok_or(GraphError::InvalidSnapshot {
                    reason: "neighbor index out of range",
                })?;
                if graph.vertex(keys[from]).is_some_and(|v| v.neighbors().any(|n| n.key() == target)) {
                    return Err(GraphError::InvalidSnapshot {
                        reason: "repeated edge",
                    });
                }
                graph.link(keys[from], target)?;
            }
        }

        if graph.edge_count() != snapshot.edge_count {
            return Err(GraphError::InvalidSnapshot {
                reason: "edge count does not match adjacency",
            });
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::diagnostics::NullDiagnostics;
    use crate::graph::policy::NaturalPolicy;

    fn sample() -> BoundedGraph<String, NaturalPolicy, NullDiagnostics> {
        let mut g = GraphBuilder::new("cities", 4)
            .diagnostics(NullDiagnostics)
            .build()
            .unwrap();
        g.add_edge("oslo".to_string(), "rome".to_string()).unwrap();
        g.add_edge_sym("rome".to_string(), "lima".to_string()).unwrap();
        g
    }

    #[test]
    fn test_snapshot_shape() {
        let snap = sample().snapshot();
        assert_eq!(snap.name, "cities");
        assert_eq!(snap.edge_count, 3);
        assert_eq!(snap.vertices[0].data, "oslo");
        assert_eq!(snap.vertices[0].neighbors, vec![1]);
        assert_eq!(snap.vertices[1].neighbors, vec![2]);
        assert_eq!(snap.vertices[2].neighbors, vec![1]);
    }

    #[test]
    fn test_restore_reproduces_adjacency() {
        let original = sample();
        let json = original.snapshot().to_json().unwrap();
        let parsed: GraphSnapshot<String> = GraphSnapshot::from_json(&json).unwrap();

        let restored = BoundedGraph::restore(parsed, NaturalPolicy, NullDiagnostics).unwrap();
        assert_eq!(restored.to_string(), original.to_string());
        assert_eq!(restored.snapshot(), original.snapshot());
    }

    #[test]
    fn test_restore_rejects_bad_neighbor() {
        let mut snap = sample().snapshot();
        snap.vertices[0].neighbors.push(9);
        let err = BoundedGraph::restore(snap, NaturalPolicy, NullDiagnostics).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidSnapshot {
                reason: "neighbor index out of range"
            }
        );
    }

    #[test]
    fn test_restore_rejects_overfull_snapshot() {
        let mut snap = sample().snapshot();
        snap.capacity = 2;
        let err = BoundedGraph::restore(snap, NaturalPolicy, NullDiagnostics).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidSnapshot {
                reason: "more vertices than capacity"
            }
        );
    }

    #[test]
    fn test_restore_rejects_edge_count_mismatch() {
        let mut snap = sample().snapshot();
        snap.edge_count = 7;
        assert!(matches!(
            BoundedGraph::restore(snap, NaturalPolicy, NullDiagnostics),
            Err(GraphError::InvalidSnapshot { .. })
        ));
    }
}
