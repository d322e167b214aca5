/// Capacity settings of an [`AdjacencyGraph`](super::AdjacencyGraph).
///
/// Use the setters to alter the defaults before handing the configuration to
/// [`AdjacencyGraph::with_config`](super::AdjacencyGraph::with_config):
/// ```
/// use adjgraph::prelude::*;
///
/// let config = GraphConfig::new().vertex_capacity(128).bucket_capacity(4);
/// let graph: AdjacencyGraph<u32> = AdjacencyGraph::with_config(config);
/// assert!(graph.is_vertices_empty());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Number of vertices to reserve space for
    vertex_capacity: usize,
    /// Number of edges to reserve space for in the flat edge list
    edge_capacity: usize,
    /// Capacity of each newly created out-edge bucket
    bucket_capacity: usize,
}

impl GraphConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves space for `capacity` vertices on construction
    pub fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// Reserves space for `capacity` edges on construction
    pub fn edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Sets the capacity each new out-edge bucket is created with
    pub fn bucket_capacity(mut self, capacity: usize) -> Self {
        self.bucket_capacity = capacity;
        self
    }

    pub fn get_vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }

    pub fn get_edge_capacity(&self) -> usize {
        self.edge_capacity
    }

    pub fn get_bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }
}
