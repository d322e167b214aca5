use tracing::debug;

use crate::{error::Result, *};

/// Associates a graph with the vertex and edge types it stores
pub trait GraphType {
    type Vertex: Vertex;
    type Edge: EdgeType<Self::Vertex>;
}

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphVertexOrder: GraphType {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns an iterator over V. The order is unspecified.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_vertices_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder: GraphType {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over E in insertion order
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Returns *true* if the graph has no edges
    fn is_edges_empty(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for out-edges & neighborhoods.
///
/// Querying an absent vertex is not an error: it simply has no edges.
pub trait AdjacencyList: GraphVertexOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the out-edges of a given vertex
    fn out_edges_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Edge>;

    /// Returns the number of out-edges of `u`
    fn out_degree_of(&self, u: &Self::Vertex) -> NumEdges;

    /// Returns *true* if `u` has no out-edges
    fn is_out_edges_empty(&self, u: &Self::Vertex) -> bool {
        self.out_degree_of(u) == 0
    }

    /// Returns an iterator over the targets of all out-edges of `u`
    fn out_neighbors_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex> {
        self.out_edges_of(u).map(|e| e.target())
    }

    /// Returns an iterator over all edges `(v, u)`.
    ///
    /// Only out-edges are stored, hence this scans every edge of the graph.
    fn in_edges_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Edge> {
        self.edges().filter(move |e| e.target() == u)
    }

    /// Returns the number of edges into `u`
    // Should be avoided as this is very costly
    fn in_degree_of(&self, u: &Self::Vertex) -> NumEdges {
        self.in_edges_of(u).count()
    }

    /// Returns an iterator to all vertices with non-zero out-degree
    fn vertices_with_out_edges(&self) -> impl Iterator<Item = &Self::Vertex> {
        self.vertices().filter(|u| !self.is_out_edges_empty(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> NumEdges {
        self.vertices()
            .map(|u| self.out_degree_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// Trait to test existence of vertices and edges in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if `v` is a vertex of the graph
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    /// Returns *true* if an edge equal to `edge` is stored at its source
    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.out_edges_of(edge.source()).any(|e| e == edge)
    }

    /// Returns *true* if the edge (source,target) exists in the graph
    fn has_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.try_get_edge(source, target).is_some()
    }

    /// Returns the edge (source,target) if it exists
    fn try_get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<&Self::Edge> {
        self.out_edges_of(source).find(|e| e.target() == target)
    }

    /// Returns *true* if a self-loop (u,u) exists
    fn has_self_loop(&self, u: &Self::Vertex) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph
    fn has_bidirected_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphNew + GraphType {
    /// Adds `v` to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Adds all vertices in the collection and returns the number of vertices actually inserted
    fn add_vertices<I>(&mut self, vertices: I) -> NumVertices
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        let added = vertices
            .into_iter()
            .map(|v| self.add_vertex(v))
            .filter(|&added| added)
            .count();
        debug!(added, "added vertex range");
        added
    }

    /// Removes `v` together with all edges into and out of it.
    /// Returns *true* exactly if the vertex was present.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> bool;

    /// Removes all vertices matching `predicate` and returns how many were removed.
    ///
    /// The matching vertices are collected before any of them is removed.
    fn remove_vertices_where<P>(&mut self, predicate: P) -> NumVertices
    where
        P: FnMut(&Self::Vertex) -> bool;

    /// Same as [`GraphVertexEditing::remove_vertices_where`], but fails with
    /// [`GraphError::MissingPredicate`] if no predicate is supplied.
    fn remove_vertices_if<P>(&mut self, predicate: Option<P>) -> Result<NumVertices>
    where
        P: FnMut(&Self::Vertex) -> bool,
    {
        let predicate = predicate.ok_or(error::missing_predicate!("remove_vertices_if"))?;
        Ok(self.remove_vertices_where(predicate))
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphVertexEditing {
    /// Adds `edge` to the graph, inserting missing endpoints first.
    /// Returns *false* if an edge with the same source and target is already present.
    fn add_edge(&mut self, edge: Self::Edge) -> bool;

    /// Adds all edges in the collection and returns the number of edges actually inserted
    fn add_edges<I>(&mut self, edges: I) -> NumEdges
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        let added = edges
            .into_iter()
            .map(|e| self.add_edge(e.into()))
            .filter(|&added| added)
            .count();
        debug!(added, "added edge range");
        added
    }

    /// Removes the edge equal to `edge` from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    fn remove_edge(&mut self, edge: &Self::Edge) -> bool;

    /// Removes all out-edges of `u` matching `predicate` and returns how many were removed
    fn remove_out_edges_where<P>(&mut self, u: &Self::Vertex, predicate: P) -> NumEdges
    where
        P: FnMut(&Self::Edge) -> bool;

    /// Same as [`GraphEdgeEditing::remove_out_edges_where`], but fails with
    /// [`GraphError::MissingPredicate`] if no predicate is supplied.
    fn remove_out_edges_if<P>(&mut self, u: &Self::Vertex, predicate: Option<P>) -> Result<NumEdges>
    where
        P: FnMut(&Self::Edge) -> bool,
    {
        let predicate = predicate.ok_or(error::missing_predicate!("remove_out_edges_if"))?;
        Ok(self.remove_out_edges_where(u, predicate))
    }

    /// Removes all out-edges of `u`
    fn remove_edges_out_of_vertex(&mut self, u: &Self::Vertex) -> NumEdges {
        self.remove_out_edges_where(u, |_| true)
    }
}

/// Trait for resetting a graph to the empty graph
pub trait GraphClear {
    /// Removes all vertices and edges
    fn clear(&mut self);
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphType {
    /// Create a graph from an iterator over edges. Endpoints are inserted on demand and
    /// parallel edges after the first are dropped.
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}
