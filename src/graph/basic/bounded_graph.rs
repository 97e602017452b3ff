//! `BoundedGraph`: a capacity-bounded directed graph over arbitrary
//! identities.
//!
//! Vertices are identified by caller-supplied values compared through an
//! [`ElementPolicy`]. Lookup is a linear scan with the policy's comparator;
//! there is no auxiliary index, so every operation that names a vertex by
//! value costs O(n).
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `find` | \(O(n)\) | policy comparisons |
//! | `add_vertex` | \(O(n)\) | lookup, then append |
//! | `add_edge` / `has_edge` | \(O(n + \text{out-degree})\) | |
//! | `del_edge` | \(O(n + \text{out-degree})\) | order-preserving removal |
//! | `delete_vertex` | \(O(n + m)\) | scans every neighbor list, then swap-with-last |
//! | `bfs` / `dfs` | \(O(n + m)\) | |
//!
//! Mutations that can fail check every precondition before touching the
//! graph, so a failed call leaves it unchanged. Symmetric edge operations
//! are applied as one step.

use core::fmt;

use crate::graph::basic::traversal::{self, BfsTraversal, DfsTraversal};
use crate::graph::basic::vertex_table::{Vertex, VertexKey, VertexTable};
use crate::graph::diagnostics::{Diagnostics, GraphEvent, TraversalKind, TracingDiagnostics};
use crate::graph::error::GraphError;
use crate::graph::policy::{ElementPolicy, NaturalPolicy, Printed};

/// Initial room reserved in each vertex's neighbor list.
const NEIGHBOR_HINT: usize = 4;

/// A directed graph holding at most `capacity` vertices.
///
/// The graph owns every identity inserted into it and releases them through
/// the policy when destroyed or dropped. Identities removed with
/// [`delete_vertex`](Self::delete_vertex) are handed back to the caller.
pub struct BoundedGraph<T, P = NaturalPolicy, D = TracingDiagnostics>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    name: String,
    edge_count: usize,
    pub(super) table: VertexTable<T>,
    policy: P,
    diagnostics: D,
}

impl<T: Ord + fmt::Display> BoundedGraph<T> {
    /// Creates an empty graph using `T`'s own ordering and `tracing` for
    /// diagnostics.
    ///
    /// # Errors
    /// Fails if the vertex table cannot be reserved.
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, GraphError> {
        GraphBuilder::new(name, capacity).build()
    }
}

impl<T, P: ElementPolicy<T>> BoundedGraph<T, P> {
    /// Creates an empty graph comparing identities through `policy`.
    ///
    /// # Errors
    /// Fails if the vertex table cannot be reserved.
    pub fn with_policy(
        name: impl Into<String>,
        capacity: usize,
        policy: P,
    ) -> Result<Self, GraphError> {
        GraphBuilder::new(name, capacity).policy(policy).build()
    }
}

impl<T, P, D> BoundedGraph<T, P, D>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    /// Name given at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Maximum number of vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `true` if no further vertex can be added.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Number of directed edges. A symmetric edge counts twice.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Element policy in use.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Diagnostics sink in use.
    #[inline]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    #[inline]
    fn report(&self, event: GraphEvent) {
        self.diagnostics.record(&self.name, &event);
    }

    /// Slot of the first vertex whose identity compares equal to `data`.
    fn position(&self, data: &T) -> Option<usize> {
        self.table
            .entries()
            .iter()
            .position(|entry| self.policy.matches(&entry.data, data))
    }

    fn key_at(&self, index: usize) -> Result<VertexKey, GraphError> {
        self.table
            .entry(index)
            .map(|entry| entry.key)
            .ok_or(GraphError::NotFound)
    }

    /// Returns `true` if vertex `from` has an edge to `to`.
    fn links(&self, from: usize, to: usize) -> bool {
        match (self.table.entry(from), self.table.entry(to)) {
            (Some(a), Some(b)) => a.neighbors.find(b.key).is_some(),
            _ => false,
        }
    }

    // ----- lookup -----

    /// First vertex whose identity compares equal to `data`.
    pub fn find(&self, data: &T) -> Option<Vertex<'_, T>> {
        self.position(data).and_then(|index| self.vertex_at(index))
    }

    /// Returns `true` if a vertex compares equal to `data`.
    #[inline]
    pub fn contains(&self, data: &T) -> bool {
        self.position(data).is_some()
    }

    /// Vertex behind `key`, if it still exists.
    pub fn vertex(&self, key: VertexKey) -> Option<Vertex<'_, T>> {
        self.table.index_of(key).and_then(|index| self.vertex_at(index))
    }

    /// Vertex currently in table slot `index`.
    pub fn vertex_at(&self, index: usize) -> Option<Vertex<'_, T>> {
        self.table
            .entry(index)
            .map(|entry| Vertex::new(&self.table, entry))
    }

    /// Current table slot of the vertex behind `key`.
    #[inline]
    pub fn index_of(&self, key: VertexKey) -> Option<usize> {
        self.table.index_of(key)
    }

    /// Identity of the vertex behind `key`.
    pub fn data(&self, key: VertexKey) -> Option<&T> {
        self.vertex(key).map(|v| v.data())
    }

    /// Vertices in table order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex<'_, T>> + '_ {
        self.table
            .entries()
            .iter()
            .map(move |entry| Vertex::new(&self.table, entry))
    }

    /// Identities of the outgoing neighbors of `data`, in insertion order.
    /// Empty if `data` is not in the graph.
    pub fn neighbors(&self, data: &T) -> impl Iterator<Item = &T> + '_ {
        self.find(data)
            .into_iter()
            .flat_map(|v| v.neighbors())
            .map(|n| n.data())
    }

    // ----- vertices -----

    /// Adds a vertex for `data`.
    ///
    /// Inserting an identity that is already present is not an error: the
    /// existing vertex's key is returned and `data` is dropped.
    ///
    /// # Errors
    /// [`GraphError::CapacityExhausted`] if the table is full.
    pub fn add_vertex(&mut self, data: T) -> Result<VertexKey, GraphError> {
        if let Some(index) = self.position(&data) {
            return self.key_at(index);
        }
        self.insert_new(data)
    }

    fn insert_new(&mut self, data: T) -> Result<VertexKey, GraphError> {
        let index = self.table.len();
        match self.table.push(data, NEIGHBOR_HINT) {
            Ok(key) => {
                self.report(GraphEvent::VertexAdded { key, index });
                Ok(key)
            }
            Err(_rejected) => {
                let capacity = self.capacity();
                self.report(GraphEvent::CapacityExhausted { capacity });
                Err(GraphError::CapacityExhausted { capacity })
            }
        }
    }

    /// Resolves the slots of `a` and `b` and checks that the vertices missing
    /// among them still fit.
    fn plan_endpoints(&self, a: &T, b: &T) -> Result<(Option<usize>, Option<usize>), GraphError> {
        let ia = self.position(a);
        let ib = self.position(b);
        let missing = match (ia, ib) {
            (Some(_), Some(_)) => 0,
            (None, None) if !self.policy.matches(a, b) => 2,
            _ => 1,
        };
        if self.len() + missing > self.capacity() {
            let capacity = self.capacity();
            self.report(GraphEvent::CapacityExhausted { capacity });
            return Err(GraphError::CapacityExhausted { capacity });
        }
        Ok((ia, ib))
    }

    /// Key for an endpoint resolved by [`plan_endpoints`](Self::plan_endpoints).
    fn endpoint(&mut self, slot: Option<usize>, data: T) -> Result<VertexKey, GraphError> {
        match slot {
            Some(index) => self.key_at(index),
            None => self.add_vertex(data),
        }
    }

    /// Appends `to` to the neighbor list of `from`.
    pub(super) fn link(&mut self, from: VertexKey, to: VertexKey) -> Result<(), GraphError> {
        let index = self.table.index_of(from).ok_or(GraphError::NotFound)?;
        let entry = self.table.entry_mut(index).ok_or(GraphError::NotFound)?;
        entry.neighbors.append(to);
        self.edge_count += 1;
        self.report(GraphEvent::EdgeAdded { from, to });
        Ok(())
    }

    /// Removes `to` from the neighbor list of slot `from`, if present.
    fn unlink(&mut self, from: usize, to: VertexKey) -> bool {
        let Some(entry) = self.table.entry_mut(from) else {
            return false;
        };
        if !entry.neighbors.delete(to) {
            return false;
        }
        let from = entry.key;
        self.edge_count -= 1;
        self.report(GraphEvent::EdgeRemoved { from, to });
        true
    }

    /// Removes the vertex comparing equal to `data` and every edge touching
    /// it, returning its identity to the caller.
    ///
    /// The last vertex of the table moves into the freed slot, so its
    /// `index` changes; its [`VertexKey`] stays valid.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if no vertex matches.
    pub fn delete_vertex(&mut self, data: &T) -> Result<T, GraphError> {
        let index = self.position(data).ok_or(GraphError::NotFound)?;
        let key = self.key_at(index)?;

        let mut edges_removed = 0;
        for other in 0..self.table.len() {
            if other == index {
                continue;
            }
            if let Some(entry) = self.table.entry_mut(other) {
                if entry.neighbors.delete(key) {
                    edges_removed += 1;
                }
            }
        }

        let (removed, relocated) = self
            .table
            .remove_compacting(index, |a, b| self.policy.swap(a, b))
            .ok_or(GraphError::NotFound)?;
        edges_removed += removed.neighbors.len();
        self.edge_count -= edges_removed;

        self.report(GraphEvent::VertexDeleted {
            key,
            index,
            edges_removed,
        });
        if let Some(moved) = relocated {
            self.report(GraphEvent::VertexRelocated {
                key: moved,
                from: self.table.len(),
                to: index,
            });
        }

        Ok(removed.data)
    }

    // ----- edges -----

    /// Vertex `b` if the directed edge `a -> b` exists.
    pub fn has_edge(&self, a: &T, b: &T) -> Option<Vertex<'_, T>> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        if self.links(ia, ib) {
            self.vertex_at(ib)
        } else {
            None
        }
    }

    /// Adds the directed edge `a -> b`, creating either endpoint if needed,
    /// and returns the key of `a`.
    ///
    /// # Errors
    /// - [`GraphError::CapacityExhausted`] if a missing endpoint does not fit.
    /// - [`GraphError::DuplicateEdge`] if the edge exists.
    ///
    /// Either way nothing is inserted.
    pub fn add_edge(&mut self, a: T, b: T) -> Result<VertexKey, GraphError> {
        let (ia, ib) = self.plan_endpoints(&a, &b)?;
        if let (Some(i), Some(j)) = (ia, ib) {
            if self.links(i, j) {
                return Err(self.report_duplicate(i, j));
            }
        }

        let from = self.endpoint(ia, a)?;
        let to = self.endpoint(ib, b)?;
        self.link(from, to)?;
        Ok(from)
    }

    /// Removes the directed edge `a -> b` if present and returns the key of
    /// `a`. Removing an absent edge between existing vertices succeeds.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if either vertex is missing.
    pub fn del_edge(&mut self, a: &T, b: &T) -> Result<VertexKey, GraphError> {
        let ia = self.position(a).ok_or(GraphError::NotFound)?;
        let ib = self.position(b).ok_or(GraphError::NotFound)?;
        let (from, to) = (self.key_at(ia)?, self.key_at(ib)?);
        self.unlink(ia, to);
        Ok(from)
    }

    /// Adds `a -> b` and then `b -> a` as one step and returns the key of
    /// `b`.
    ///
    /// An existing `a -> b` is kept and only `b -> a` is added, completing a
    /// half-present symmetric edge.
    ///
    /// # Errors
    /// - [`GraphError::CapacityExhausted`] if a missing endpoint does not fit.
    /// - [`GraphError::DuplicateEdge`] if `b -> a` exists.
    ///
    /// Either way nothing is inserted.
    pub fn add_edge_sym(&mut self, a: T, b: T) -> Result<VertexKey, GraphError> {
        let (ia, ib) = self.plan_endpoints(&a, &b)?;
        let mut forward_present = false;
        if let (Some(i), Some(j)) = (ia, ib) {
            if self.links(j, i) {
                return Err(self.report_duplicate(j, i));
            }
            forward_present = self.links(i, j);
        }

        let ka = self.endpoint(ia, a)?;
        let kb = self.endpoint(ib, b)?;
        if forward_present {
            self.report(GraphEvent::DuplicateEdge { from: ka, to: kb });
        } else {
            self.link(ka, kb)?;
        }
        if ka != kb {
            self.link(kb, ka)?;
        }
        Ok(kb)
    }

    /// Removes `a -> b` and `b -> a` as one step and returns the key of `b`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if either vertex is missing; nothing is
    /// removed then.
    pub fn del_edge_sym(&mut self, a: &T, b: &T) -> Result<VertexKey, GraphError> {
        let ia = self.position(a).ok_or(GraphError::NotFound)?;
        let ib = self.position(b).ok_or(GraphError::NotFound)?;
        let (ka, kb) = (self.key_at(ia)?, self.key_at(ib)?);
        self.unlink(ia, kb);
        if ia != ib {
            self.unlink(ib, ka);
        }
        Ok(kb)
    }

    /// Reports `from -> to` as a duplicate and returns the error to fail with.
    fn report_duplicate(&self, from: usize, to: usize) -> GraphError {
        match (self.key_at(from), self.key_at(to)) {
            (Ok(from), Ok(to)) => {
                self.report(GraphEvent::DuplicateEdge { from, to });
                GraphError::DuplicateEdge
            }
            (Err(err), _) | (_, Err(err)) => err,
        }
    }

    // ----- traversal -----

    /// Breadth-first traversal from the vertex comparing equal to `source`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the source is missing.
    pub fn bfs(&self, source: &T) -> Result<BfsTraversal, GraphError> {
        let index = self.position(source).ok_or(GraphError::NotFound)?;
        let result = traversal::breadth_first(&self.table, index)?;
        self.report(GraphEvent::TraversalFinished {
            kind: TraversalKind::Breadth,
            source: result.source(),
            reached: result.reached(),
        });
        Ok(result)
    }

    /// Depth-first traversal from the vertex comparing equal to `source`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the source is missing.
    pub fn dfs(&self, source: &T) -> Result<DfsTraversal, GraphError> {
        let index = self.position(source).ok_or(GraphError::NotFound)?;
        let result = traversal::depth_first(&self.table, index)?;
        self.report(GraphEvent::TraversalFinished {
            kind: TraversalKind::Depth,
            source: result.source(),
            reached: result.reached(),
        });
        Ok(result)
    }

    // ----- teardown -----

    /// Writes the graph summary and adjacency to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Releases every identity through the policy and returns how many were
    /// released. Consuming `self` rules out a second teardown.
    pub fn destroy(mut self) -> usize {
        let released = self.release_all();
        self.report(GraphEvent::Destroyed { released });
        released
    }

    fn release_all(&mut self) -> usize {
        let entries = self.table.take_all();
        let released = entries.len();
        for entry in entries {
            self.policy.release(entry.data);
        }
        self.edge_count = 0;
        released
    }
}

impl<T, P, D> Drop for BoundedGraph<T, P, D>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T, P, D> fmt::Display for BoundedGraph<T, P, D>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: vertex:{} edges:{}", self.name, self.len(), self.edge_count)?;
        for entry in self.table.entries() {
            write!(f, "{}:{{ ", Printed::new(&self.policy, &entry.data))?;
            for index in self.table.neighbor_indices(entry.index) {
                if let Some(neighbor) = self.table.entry(index) {
                    write!(f, "{} ", Printed::new(&self.policy, &neighbor.data))?;
                }
            }
            f.write_str("}\n")?;
        }
        Ok(())
    }
}

impl<T, P, D> fmt::Debug for BoundedGraph<T, P, D>
where
    P: ElementPolicy<T>,
    D: Diagnostics,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedGraph")
            .field("name", &self.name)
            .field("vertices", &self.len())
            .field("capacity", &self.capacity())
            .field("edges", &self.edge_count)
            .finish_non_exhaustive()
    }
}

/// Configures and builds a [`BoundedGraph`].
///
/// ```rust
/// use capgraph::graph::{GraphBuilder, NullDiagnostics, BoundedGraph};
///
/// let mut g: BoundedGraph<u32, _, _> = GraphBuilder::new("routes", 8)
///     .diagnostics(NullDiagnostics)
///     .build()
///     .unwrap();
/// g.add_edge(1, 2).unwrap();
/// assert_eq!(g.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<P = NaturalPolicy, D = TracingDiagnostics> {
    name: String,
    capacity: usize,
    policy: P,
    diagnostics: D,
}

impl GraphBuilder {
    /// Starts a builder for a graph called `name` holding up to `capacity`
    /// vertices.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            policy: NaturalPolicy,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<P, D> GraphBuilder<P, D> {
    /// Overrides the vertex capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Uses `policy` to compare, swap, release and print identities.
    pub fn policy<Q>(self, policy: Q) -> GraphBuilder<Q, D> {
        GraphBuilder {
            name: self.name,
            capacity: self.capacity,
            policy,
            diagnostics: self.diagnostics,
        }
    }

    /// Sends graph events to `diagnostics`.
    pub fn diagnostics<E: Diagnostics>(self, diagnostics: E) -> GraphBuilder<P, E> {
        GraphBuilder {
            name: self.name,
            capacity: self.capacity,
            policy: self.policy,
            diagnostics,
        }
    }

    /// Builds the empty graph. The vertex table is reserved in full here.
    ///
    /// # Errors
    /// - [`GraphError::InvalidCapacity`] if the capacity is above
    ///   [`MAX_CAPACITY`](crate::graph::MAX_CAPACITY).
    /// - [`GraphError::Allocation`] if the table cannot be reserved.
    pub fn build<T>(self) -> Result<BoundedGraph<T, P, D>, GraphError>
    where
        P: ElementPolicy<T>,
        D: Diagnostics,
    {
        let table = VertexTable::try_new(self.capacity)?;
        Ok(BoundedGraph {
            name: self.name,
            edge_count: 0,
            table,
            policy: self.policy,
            diagnostics: self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::diagnostics::RecordingDiagnostics;

    fn graph(capacity: usize) -> BoundedGraph<char, NaturalPolicy, RecordingDiagnostics> {
        GraphBuilder::new("test", capacity)
            .diagnostics(RecordingDiagnostics::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g = graph(4);
        let k1 = g.add_vertex('a').unwrap();
        let k2 = g.add_vertex('a').unwrap();
        assert_eq!(k1, k2);
        assert_eq!(g.len(), 1);
        assert_eq!(g.find(&'a').unwrap().key(), k1);
    }

    #[test]
    fn test_capacity_exhausted_reported_at_warn_event() {
        let mut g = graph(1);
        g.add_vertex('a').unwrap();
        assert_eq!(
            g.add_vertex('b'),
            Err(GraphError::CapacityExhausted { capacity: 1 })
        );
        assert!(g
            .diagnostics()
            .events()
            .contains(&GraphEvent::CapacityExhausted { capacity: 1 }));
    }

    #[test]
    fn test_add_edge_rejects_duplicate_without_counting() {
        let mut g = graph(4);
        let a = g.add_edge('a', 'b').unwrap();
        assert_eq!(g.find(&'a').unwrap().key(), a);
        assert_eq!(g.add_edge('a', 'b'), Err(GraphError::DuplicateEdge));
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge(&'a', &'b').is_some());
        assert!(g.has_edge(&'b', &'a').is_none());
    }

    #[test]
    fn test_add_edge_capacity_leaves_graph_untouched() {
        let mut g = graph(2);
        g.add_vertex('a').unwrap();
        assert_eq!(
            g.add_edge('b', 'c'),
            Err(GraphError::CapacityExhausted { capacity: 2 })
        );
        assert_eq!(g.len(), 1);
        assert!(!g.contains(&'b'));
    }

    #[test]
    fn test_self_loop_needs_one_slot() {
        let mut g = graph(1);
        g.add_edge('a', 'a').unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_del_edge_decrements_only_when_removed() {
        let mut g = graph(4);
        g.add_edge('a', 'b').unwrap();
        g.del_edge(&'a', &'b').unwrap();
        assert_eq!(g.edge_count(), 0);
        // Absent edge between present vertices is fine.
        assert!(g.del_edge(&'a', &'b').is_ok());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.del_edge(&'a', &'z'), Err(GraphError::NotFound));
    }

    #[test]
    fn test_sym_edges_are_transactional() {
        let mut g = graph(4);
        g.add_edge('b', 'a').unwrap();
        assert_eq!(g.add_edge_sym('a', 'b'), Err(GraphError::DuplicateEdge));
        assert!(g.has_edge(&'a', &'b').is_none());
        assert_eq!(g.edge_count(), 1);

        let kc = g.add_edge_sym('c', 'd').unwrap();
        assert_eq!(g.find(&'d').unwrap().key(), kc);
        assert_eq!(g.edge_count(), 3);

        g.del_edge_sym(&'c', &'d').unwrap();
        assert!(g.has_edge(&'c', &'d').is_none());
        assert!(g.has_edge(&'d', &'c').is_none());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_sym_completes_forward_half() {
        let mut g = graph(4);
        g.add_edge('a', 'b').unwrap();
        let kb = g.add_edge_sym('a', 'b').unwrap();

        assert_eq!(g.find(&'b').unwrap().key(), kb);
        assert!(g.has_edge(&'a', &'b').is_some());
        assert!(g.has_edge(&'b', &'a').is_some());
        assert_eq!(g.edge_count(), 2);
        // The existing direction is not appended twice.
        assert_eq!(g.neighbors(&'a').count(), 1);
        assert_eq!(g.add_edge_sym('a', 'b'), Err(GraphError::DuplicateEdge));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_sym_rejects_reverse_half() {
        let mut g = graph(4);
        g.add_edge('b', 'a').unwrap();
        g.diagnostics().take();

        assert_eq!(g.add_edge_sym('a', 'b'), Err(GraphError::DuplicateEdge));
        assert!(g.has_edge(&'a', &'b').is_none());
        assert_eq!(g.edge_count(), 1);
        let events = g.diagnostics().take();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GraphEvent::DuplicateEdge { .. }));
    }

    #[test]
    fn test_delete_vertex_compacts_and_keeps_handles() {
        let mut g = graph(4);
        g.add_edge('a', 'b').unwrap();
        g.add_edge('c', 'd').unwrap();
        g.add_edge('a', 'd').unwrap();
        g.add_edge('d', 'b').unwrap();
        let kd = g.find(&'d').unwrap().key();

        assert_eq!(g.delete_vertex(&'b'), Ok('b'));
        assert_eq!(g.len(), 3);
        assert!(g.find(&'b').is_none());
        assert_eq!(g.edge_count(), 2);

        // 'd' moved from slot 3 into slot 1.
        assert_eq!(g.index_of(kd), Some(1));
        assert_eq!(g.vertex(kd).unwrap().index(), 1);
        assert!(g.has_edge(&'a', &'d').is_some());
        assert!(g.has_edge(&'c', &'d').is_some());
        assert_eq!(g.neighbors(&'d').count(), 0);

        let events = g.diagnostics().events();
        assert!(events.contains(&GraphEvent::VertexRelocated {
            key: kd,
            from: 3,
            to: 1
        }));
    }

    #[test]
    fn test_display_lists_neighbors_in_order() {
        let mut g = graph(3);
        g.add_edge('a', 'c').unwrap();
        g.add_edge('a', 'b').unwrap();
        assert_eq!(
            g.to_string(),
            "test: vertex:3 edges:2\na:{ c b }\nc:{ }\nb:{ }\n"
        );
    }

    #[test]
    fn test_destroy_releases_everything() {
        let mut g = graph(3);
        g.add_edge_sym('a', 'b').unwrap();
        g.add_vertex('c').unwrap();
        assert_eq!(g.destroy(), 3);
    }
}
