//! Breadth-first and depth-first traversal engines.
//!
//! Both engines run over the vertex table as it is at call time and return
//! one record per table slot. Records are owned by the caller; the graph
//! keeps nothing. Work-lists are bounded to the vertex count and dropped
//! when the call returns.
//!
//! Neighbors are visited in insertion order, so the output is fully
//! deterministic for a given sequence of mutations.

use serde::{Deserialize, Serialize};

use crate::collections::other::{BoundedQueue, BoundedStack};
use crate::graph::basic::vertex_table::{VertexKey, VertexTable};
use crate::graph::error::GraphError;

/// Level / pre / post value of a vertex the traversal never reached.
pub const UNVISITED: i32 = -1;

/// Component id given to every vertex reached from the source.
const SOURCE_COMPONENT: i32 = 0;

/// Per-vertex outcome of a breadth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsRecord {
    /// Vertex this one was discovered from. `None` for the source and for
    /// unreached vertices.
    pub parent: Option<VertexKey>,
    /// Hop count from the source, or [`UNVISITED`].
    pub level: i32,
    /// Component id: `0` when reached, [`UNVISITED`] otherwise.
    pub component: i32,
}

impl BfsRecord {
    const UNREACHED: Self = Self {
        parent: None,
        level: UNVISITED,
        component: UNVISITED,
    };

    /// Returns `true` if the traversal reached this vertex.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.level != UNVISITED
    }
}

/// Per-vertex outcome of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsRecord {
    /// Vertex this one was discovered from.
    pub parent: Option<VertexKey>,
    /// Stamp taken on entry, or [`UNVISITED`].
    pub pre: i32,
    /// Stamp taken once every neighbor was explored, or [`UNVISITED`].
    pub post: i32,
    /// Component id: `0` when reached, [`UNVISITED`] otherwise.
    pub component: i32,
    /// Set once the neighbor scan of this vertex is exhausted.
    pub fully_explored: bool,
}

impl DfsRecord {
    const UNREACHED: Self = Self {
        parent: None,
        pre: UNVISITED,
        post: UNVISITED,
        component: UNVISITED,
        fully_explored: false,
    };

    /// Returns `true` if the traversal reached this vertex.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.pre != UNVISITED
    }
}

/// Records produced by one traversal, indexed by table slot at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal<R> {
    source: VertexKey,
    slots: Vec<VertexKey>,
    records: Vec<R>,
    order: Vec<usize>,
}

/// Result of [`BoundedGraph::bfs`](crate::graph::BoundedGraph::bfs).
pub type BfsTraversal = Traversal<BfsRecord>;

/// Result of [`BoundedGraph::dfs`](crate::graph::BoundedGraph::dfs).
pub type DfsTraversal = Traversal<DfsRecord>;

impl<R> Traversal<R> {
    /// Handle of the source vertex.
    pub fn source(&self) -> VertexKey {
        self.source
    }

    /// Number of records (vertex count at call time).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record of table slot `index`.
    pub fn record(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Record of the vertex behind `key`.
    pub fn record_for(&self, key: VertexKey) -> Option<&R> {
        let index = self.slots.iter().position(|&k| k == key)?;
        self.records.get(index)
    }

    /// Handle of the vertex that occupied slot `index`.
    pub fn key_at(&self, index: usize) -> Option<VertexKey> {
        self.slots.get(index).copied()
    }

    /// `(key, record)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexKey, &R)> + '_ {
        self.slots.iter().copied().zip(self.records.iter())
    }

    /// Slots in the order they were discovered.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of vertices reached, source included.
    pub fn reached(&self) -> usize {
        self.order.len()
    }
}

impl BfsTraversal {
    /// Hop count from the source to `key`, if reached.
    pub fn level_of(&self, key: VertexKey) -> Option<i32> {
        self.record_for(key)
            .filter(|r| r.is_visited())
            .map(|r| r.level)
    }

    /// Vertices on the discovered shortest path from the source to `key`,
    /// both ends included.
    pub fn path_to(&self, key: VertexKey) -> Option<Vec<VertexKey>> {
        let mut record = self.record_for(key).filter(|r| r.is_visited())?;
        let mut path = vec![key];
        while let Some(parent) = record.parent {
            path.push(parent);
            record = self.record_for(parent)?;
        }
        path.reverse();
        Some(path)
    }
}

impl DfsTraversal {
    /// Returns `true` if `ancestor` is a proper ancestor of `descendant` in
    /// the DFS tree, read off the nesting of their pre/post intervals.
    pub fn is_ancestor(&self, ancestor: VertexKey, descendant: VertexKey) -> bool {
        match (self.record_for(ancestor), self.record_for(descendant)) {
            (Some(u), Some(v)) if u.is_visited() && v.is_visited() => {
                u.pre < v.pre && v.post < u.post
            }
            _ => false,
        }
    }
}

#[inline(always)]
fn stamp(counter: &mut i32) -> i32 {
    let value = *counter;
    *counter += 1;
    value
}

pub(crate) fn breadth_first<T>(
    table: &VertexTable<T>,
    source: usize,
) -> Result<BfsTraversal, GraphError> {
    let n = table.len();
    let source_key = table.entry(source).ok_or(GraphError::NotFound)?.key;
    let full = |_: usize| GraphError::WorkListFull { capacity: n };

    let mut records = vec![BfsRecord::UNREACHED; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = BoundedQueue::new(n);

    records[source] = BfsRecord {
        parent: None,
        level: 0,
        component: SOURCE_COMPONENT,
    };
    queue.enqueue(source).map_err(full)?;

    while let Some(current) = queue.dequeue() {
        order.push(current);
        let parent = table.entry(current).map(|e| e.key);
        let level = records[current].level + 1;

        for neighbor in table.neighbor_indices(current) {
            if records[neighbor].level == UNVISITED {
                records[neighbor] = BfsRecord {
                    parent,
                    level,
                    component: SOURCE_COMPONENT,
                };
                queue.enqueue(neighbor).map_err(full)?;
            }
        }
    }

    Ok(Traversal {
        source: source_key,
        slots: table.entries().iter().map(|e| e.key).collect(),
        records,
        order,
    })
}

pub(crate) fn depth_first<T>(
    table: &VertexTable<T>,
    source: usize,
) -> Result<DfsTraversal, GraphError> {
    let n = table.len();
    let source_key = table.entry(source).ok_or(GraphError::NotFound)?.key;
    let full = |_: usize| GraphError::WorkListFull { capacity: n };

    let mut records = vec![DfsRecord::UNREACHED; n];
    // Next neighbor position to scan, per slot.
    let mut cursors = vec![0usize; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = BoundedStack::new(n);
    let mut counter = 0;

    records[source].pre = stamp(&mut counter);
    records[source].component = SOURCE_COMPONENT;
    order.push(source);
    stack.push(source).map_err(full)?;

    // Invariant: `current` is the top of the stack.
    let mut current = source;
    loop {
        let degree = table.entry(current).map_or(0, |e| e.neighbors.len());
        let mut descended = false;

        while cursors[current] < degree {
            let position = cursors[current];
            cursors[current] += 1;
            let Some(neighbor) = table.neighbor_index(current, position) else {
                continue;
            };
            if records[neighbor].pre == UNVISITED {
                records[neighbor].parent = table.entry(current).map(|e| e.key);
                records[neighbor].component = SOURCE_COMPONENT;
                stack.push(neighbor).map_err(full)?;
                records[neighbor].pre = stamp(&mut counter);
                order.push(neighbor);
                current = neighbor;
                descended = true;
                break;
            }
        }

        if !descended {
            records[current].fully_explored = true;
        }

        let Some(top) = stack.pop() else {
            break;
        };
        if !records[top].fully_explored {
            stack.push(top).map_err(full)?;
            current = top;
            continue;
        }
        records[top].post = stamp(&mut counter);

        match stack.peek() {
            Some(&next) => current = next,
            None => break,
        }
    }

    Ok(Traversal {
        source: source_key,
        slots: table.entries().iter().map(|e| e.key).collect(),
        records,
        order,
    })
}
