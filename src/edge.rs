use std::fmt::{Debug, Display};

use crate::vertex::Vertex;

/// Number of edges in a graph
pub type NumEdges = usize;

/// Capability of a value to act as a directed edge between two vertices.
///
/// Two edges are considered *parallel* if they share source and target. A graph rejects
/// parallel edges regardless of any additional payload the edge carries.
pub trait GraphEdge<V> {
    /// Returns the vertex the edge starts at
    fn source(&self) -> &V;

    /// Returns the vertex the edge points to
    fn target(&self) -> &V;

    /// Returns true if both endpoints are equal
    fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }

    /// Returns true if `self` and `other` connect the same ordered pair of vertices
    fn is_parallel_to<F>(&self, other: &F) -> bool
    where
        V: PartialEq,
        F: GraphEdge<V> + ?Sized,
    {
        self.source() == other.source() && self.target() == other.target()
    }

    /// Returns true if the edge connects `source` to `target`
    fn connects(&self, source: &V, target: &V) -> bool
    where
        V: PartialEq,
    {
        self.source() == source && self.target() == target
    }

    /// Returns true if `v` is either endpoint of the edge
    fn is_incident_to(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        self.source() == v || self.target() == v
    }
}

/// A plain directed edge `source -> target`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
}

impl<V> Edge<V> {
    /// Creates a new edge from `source` to `target`
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
        }
    }
}

impl<V> GraphEdge<V> for Edge<V> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{})", self.source, self.target)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}->{:?})", self.source, self.target)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge::new(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<(&V, &V)> for Edge<V> {
    fn from(value: (&V, &V)) -> Self {
        Edge::new(value.0.clone(), value.1.clone())
    }
}

/// A directed edge carrying an additional payload (a weight, a label, a handle, ...).
///
/// The payload takes part in equality, so two tagged edges with the same endpoints but
/// different tags are distinct values. They are still parallel, and a graph holds at most
/// one of them.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct TaggedEdge<V, T> {
    pub source: V,
    pub target: V,
    pub tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    /// Creates a new edge from `source` to `target` carrying `tag`
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    /// Returns a reference to the payload
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Drops the payload and returns the plain edge
    pub fn untagged(self) -> Edge<V> {
        Edge::new(self.source, self.target)
    }
}

impl<V, T> GraphEdge<V> for TaggedEdge<V, T> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Display, T: Display> Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{} [{}])", self.source, self.target, self.tag)
    }
}

impl<V: Debug, T: Debug> Debug for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}->{:?} [{:?}])", self.source, self.target, self.tag)
    }
}

impl<V, T> From<(V, V, T)> for TaggedEdge<V, T> {
    fn from(value: (V, V, T)) -> Self {
        TaggedEdge::new(value.0, value.1, value.2)
    }
}

/// Tuples act as untagged edges so that `(u, v)` can be fed into a graph directly
impl<V> GraphEdge<V> for (V, V) {
    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

/// Bound collecting everything a graph requires of its edge type
pub trait EdgeType<V: Vertex>: GraphEdge<V> + Clone + PartialEq {}

impl<V, E> EdgeType<V> for E
where
    V: Vertex,
    E: GraphEdge<V> + Clone + PartialEq,
{
}
