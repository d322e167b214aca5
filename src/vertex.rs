/*!
# Vertex Representation

Vertices are arbitrary caller-supplied values. The graph never inspects them beyond
equality and hashing, so any `Clone + Eq + Hash` type qualifies: integers, strings,
handles or small structs alike.
*/

use std::hash::Hash;

/// Marker trait for types usable as vertices of a graph.
///
/// Blanket-implemented for every `Clone + Eq + Hash` type.
pub trait Vertex: Clone + Eq + Hash {}

impl<T> Vertex for T where T: Clone + Eq + Hash {}

/// Number of vertices in a graph
pub type NumVertices = usize;
