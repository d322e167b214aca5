use std::fmt::Debug;

use fxhash::{FxBuildHasher, FxHashMap};
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::*;
use crate::{
    events::{EventDispatcher, GraphEvent, SubscriptionId},
    ops::*,
    testing::test_graph_ops,
    *,
};

/// A mutable directed graph storing, for every vertex, the list of its **outgoing edges**.
///
/// - Out-edges are stored per vertex in a bucket of type `B`.
/// - All edges are additionally kept in a flat list in insertion order.
/// - Incoming edges are derived on demand by scanning all edges (costly).
/// - Structural changes are announced to subscribers (see [`crate::events`]).
///
/// The graph is not internally synchronized. Wrap it in a lock for shared mutable access.
///
/// # Type parameters
/// - `V`: vertex type, any `Clone + Eq + Hash`.
/// - `E`: edge type implementing [`GraphEdge<V>`]. Defaults to [`Edge<V>`].
/// - `B`: [`EdgeBucket`] implementation used for out-edges. Defaults to `Vec<E>`.
pub struct AdjacencyGraph<V, E = Edge<V>, B = Vec<E>>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    out_edges: FxHashMap<V, B>,
    edges: Vec<E>,
    config: GraphConfig,
    events: EventDispatcher<V, E>,
}

/// Directed graph storing out-edges in small inline vectors (`SmallVec<[E; 4]>`).
pub type SparseAdjacencyGraph<V, E = Edge<V>> = AdjacencyGraph<V, E, SmallVec<[E; 4]>>;

test_graph_ops!(
    test_adjacency_graph,
    AdjacencyGraph,
    (GraphNew, GraphVertexEditing, GraphEdgeEditing, RemoveVertex)
);

test_graph_ops!(
    test_sparse_adjacency_graph,
    SparseAdjacencyGraph,
    (GraphNew, GraphVertexEditing, GraphEdgeEditing, RemoveVertex)
);

impl<V, E, B> AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    /// Creates an empty graph reserving space as given by `config`
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            out_edges: FxHashMap::with_capacity_and_hasher(
                config.get_vertex_capacity(),
                FxBuildHasher::default(),
            ),
            edges: Vec::with_capacity(config.get_edge_capacity()),
            config,
            events: EventDispatcher::default(),
        }
    }

    /// Returns the configuration the graph was created with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the out-edges of `u` as a slice, or `None` if `u` is not a vertex
    pub fn try_get_out_edges(&self, u: &V) -> Option<&[E]> {
        self.out_edges.get(u).map(|bucket| bucket.as_slice())
    }

    /// Releases excess capacity of every bucket and the flat edge list
    pub fn trim_edge_excess(&mut self) {
        self.out_edges
            .values_mut()
            .for_each(|bucket| bucket.shrink_to_fit());
        self.edges.shrink_to_fit();
    }

    /// Returns a reference to the event dispatcher
    pub fn events(&self) -> &EventDispatcher<V, E> {
        &self.events
    }

    /// Detaches a subscription. Returns *false* if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn new_bucket(&self) -> B {
        B::with_capacity(self.config.get_bucket_capacity())
    }

    /// Removes `edge` from the flat edge list. Edges are unique, so the first match suffices.
    fn unlist_edge(&mut self, edge: &E) {
        if let Some(pos) = self.edges.iter().position(|e| e == edge) {
            self.edges.remove(pos);
        }
    }
}

impl<V, E, B> AdjacencyGraph<V, E, B>
where
    V: Vertex + 'static,
    E: EdgeType<V> + 'static,
    B: EdgeBucket<E>,
{
    /// Registers a handler receiving every [`GraphEvent`]
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(GraphEvent<'_, V, E>) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Registers a handler invoked after a vertex was added
    pub fn on_vertex_added<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&V) + 'static,
    {
        self.events.on_vertex_added(handler)
    }

    /// Registers a handler invoked after a vertex was removed
    pub fn on_vertex_removed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&V) + 'static,
    {
        self.events.on_vertex_removed(handler)
    }

    /// Registers a handler invoked after an edge was added
    pub fn on_edge_added<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        self.events.on_edge_added(handler)
    }

    /// Registers a handler invoked after an edge was removed
    pub fn on_edge_removed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        self.events.on_edge_removed(handler)
    }
}

impl<V, E, B> GraphType for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    type Vertex = V;
    type Edge = E;
}

impl<V, E, B> GraphVertexOrder for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn number_of_vertices(&self) -> NumVertices {
        self.out_edges.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.out_edges.keys()
    }
}

impl<V, E, B> GraphEdgeOrder for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn number_of_edges(&self) -> NumEdges {
        let m = self.out_edges.values().map(|bucket| bucket.len()).sum();
        debug_assert_eq!(m, self.edges.len());
        m
    }

    fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    fn is_edges_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<V, E, B> AdjacencyList for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn out_edges_of(&self, u: &V) -> impl Iterator<Item = &E> {
        self.try_get_out_edges(u).unwrap_or_default().iter()
    }

    fn out_degree_of(&self, u: &V) -> NumEdges {
        self.out_edges.get(u).map_or(0, |bucket| bucket.len())
    }
}

impl<V, E, B> AdjacencyTest for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn contains_vertex(&self, v: &V) -> bool {
        self.out_edges.contains_key(v)
    }
}

impl<V, E, B> GraphNew for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<V, E, B> GraphVertexEditing for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn add_vertex(&mut self, v: V) -> bool {
        if self.out_edges.contains_key(&v) {
            return false;
        }

        let bucket = self.new_bucket();
        self.out_edges.insert(v.clone(), bucket);
        trace!(vertices = self.out_edges.len(), "vertex added");

        self.events.emit(GraphEvent::VertexAdded(&v));
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        let Some((vertex, _)) = self.out_edges.remove_entry(v) else {
            return false;
        };

        // out-edges went with the bucket, in-edges still sit in the buckets of their sources
        self.out_edges
            .values_mut()
            .for_each(|bucket| bucket.retain(|e| e.target() != &vertex));

        let (removed, kept): (Vec<E>, Vec<E>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| e.is_incident_to(&vertex));
        self.edges = kept;

        trace!(
            removed_edges = removed.len(),
            vertices = self.out_edges.len(),
            "vertex removed"
        );

        for edge in &removed {
            self.events.emit(GraphEvent::EdgeRemoved(edge));
        }
        self.events.emit(GraphEvent::VertexRemoved(&vertex));
        true
    }

    fn remove_vertices_where<P>(&mut self, mut predicate: P) -> NumVertices
    where
        P: FnMut(&V) -> bool,
    {
        let matching = self
            .out_edges
            .keys()
            .filter(|&v| predicate(v))
            .cloned()
            .collect_vec();

        let removed = matching.iter().filter(|v| self.remove_vertex(v)).count();
        debug!(removed, "removed vertices by predicate");
        removed
    }
}

impl<V, E, B> GraphEdgeEditing for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn add_edge(&mut self, edge: E) -> bool {
        if self.has_edge(edge.source(), edge.target()) {
            trace!("rejected parallel edge");
            return false;
        }

        let source = edge.source().clone();
        self.add_vertex(source.clone());
        self.add_vertex(edge.target().clone());

        let bucket = self.new_bucket();
        self.out_edges
            .entry(source)
            .or_insert(bucket)
            .push(edge.clone());
        self.edges.push(edge);
        trace!(edges = self.edges.len(), "edge added");

        if let Some(edge) = self.edges.last() {
            self.events.emit(GraphEvent::EdgeAdded(edge));
        }
        true
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(bucket) = self.out_edges.get_mut(edge.source()) else {
            return false;
        };
        let Some(pos) = bucket.as_slice().iter().position(|e| e == edge) else {
            return false;
        };

        let removed = bucket.remove(pos);
        self.unlist_edge(&removed);
        trace!(edges = self.edges.len(), "edge removed");

        self.events.emit(GraphEvent::EdgeRemoved(&removed));
        true
    }

    fn remove_out_edges_where<P>(&mut self, u: &V, predicate: P) -> NumEdges
    where
        P: FnMut(&E) -> bool,
    {
        let Some(bucket) = self.out_edges.get_mut(u) else {
            return 0;
        };

        let removed = bucket.extract_where(predicate);
        if !removed.is_empty() {
            self.edges
                .retain(|e| !(e.source() == u && removed.contains(e)));
        }
        debug!(removed = removed.len(), "removed out-edges by predicate");

        for edge in &removed {
            self.events.emit(GraphEvent::EdgeRemoved(edge));
        }
        removed.len()
    }
}

impl<V, E, B> GraphClear for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn clear(&mut self) {
        debug!(
            vertices = self.out_edges.len(),
            edges = self.edges.len(),
            "clearing graph"
        );

        if self.events.is_empty() {
            self.out_edges.clear();
            self.edges.clear();
            return;
        }

        let edges = std::mem::take(&mut self.edges);
        let vertices: Vec<V> = self.out_edges.drain().map(|(v, _)| v).collect();

        for edge in &edges {
            self.events.emit(GraphEvent::EdgeRemoved(edge));
        }
        for vertex in &vertices {
            self.events.emit(GraphEvent::VertexRemoved(vertex));
        }
    }
}

impl<V, E, B> Default for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Clones the structure. Subscribers stay with the original graph.
impl<V, E, B> Clone for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn clone(&self) -> Self {
        Self {
            out_edges: self.out_edges.clone(),
            edges: self.edges.clone(),
            config: self.config,
            events: EventDispatcher::default(),
        }
    }
}

impl<V, E, B> Debug for AdjacencyGraph<V, E, B>
where
    V: Vertex + Debug,
    E: EdgeType<V> + Debug,
    B: EdgeBucket<E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("vertices", &self.out_edges.keys().collect::<Vec<_>>())
            .field("edges", &self.edges)
            .field("events", &self.events)
            .finish()
    }
}

impl<V, E, B> Extend<E> for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

impl<V, E, B> FromIterator<E> for AdjacencyGraph<V, E, B>
where
    V: Vertex,
    E: EdgeType<V>,
    B: EdgeBucket<E>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
