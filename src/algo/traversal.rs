/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator parameterized by its frontier, giving BFS (queue) and DFS (stack).
- Reachability queries built on top of it.
- Topological ordering for directed acyclic graphs.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

Traversals only follow out-edges and yield references into the graph.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T>: Default {
    /// Pushes a vertex into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next vertex from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of vertices to visit and
/// the set of vertices discovered so far.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyTest,
    S: VertexSequencer<&'a G::Vertex>,
{
    graph: &'a G,
    visited: FxHashSet<&'a G::Vertex>,
    sequencer: S,
    stop_at: Option<&'a G::Vertex>,
}

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given starting vertex.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<&'a <G as GraphType>::Vertex>>;

/// A DFS traversal iterator over the graph, visiting vertices in
/// depth-first order from a given starting vertex.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<&'a <G as GraphType>::Vertex>>;

impl<'a, G, S> Iterator for TraversalSearch<'a, G, S>
where
    G: AdjacencyTest,
    S: VertexSequencer<&'a G::Vertex>,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.out_neighbors_of(u) {
                if self.visited.insert(v) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph
                    .number_of_vertices()
                    .saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyTest,
    S: VertexSequencer<&'a G::Vertex>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` is not a vertex of `graph`, the iterator is empty.
    pub fn new(graph: &'a G, start: &'a G::Vertex) -> Self {
        let mut search = Self {
            graph,
            visited: FxHashSet::default(),
            sequencer: S::default(),
            stop_at: None,
        };

        if graph.contains_vertex(start) {
            search.visited.insert(start);
            search.sequencer.push(start);
        }

        search
    }

    /// Returns the graph being traversed.
    pub fn graph_ref(&self) -> &'a G {
        self.graph
    }

    /// Checks if a given vertex has already been discovered.
    pub fn did_visit_vertex(&self, u: &G::Vertex) -> bool {
        self.visited.contains(u)
    }

    /// Tries to restart the search at an yet unvisited vertex and returns
    /// true iff successful. Only succeeds once the search came to a hold,
    /// i.e. self.next() returned None; returns false while vertices are still pending.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        if self.sequencer.cardinality() > 0 {
            return false;
        }
        let graph = self.graph;
        match graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(x);
                true
            }
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: &'a G::Vertex) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: &'a G::Vertex) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that vertex will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already in the frontier. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_vertex(&mut self, u: &'a G::Vertex) {
        self.visited.insert(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_vertex`].
    pub fn with_vertex_excluded(mut self, u: &'a G::Vertex) -> Self {
        self.exclude_vertex(u);
        self
    }

    /// Exclude multiple vertices from traversal.
    pub fn with_vertices_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = &'a G::Vertex>,
    {
        for u in us {
            self.exclude_vertex(u);
        }
        self
    }

    /// Consumes the traversal search and returns true iff the requested vertex can be visited, i.e.
    /// if there exists a directed path from the start vertex to `u`.
    pub fn is_vertex_reachable(mut self, u: &G::Vertex) -> bool {
        self.any(|v| v == u)
    }
}

/// Computes a topological order with Kahn's algorithm, or `None` if the graph has a cycle.
fn kahn<G: AdjacencyList>(graph: &G) -> Option<Vec<&G::Vertex>> {
    let mut in_degree: FxHashMap<&G::Vertex, usize> =
        graph.vertices().map(|u| (u, 0)).collect();
    for e in graph.edges() {
        if let Some(d) = in_degree.get_mut(e.target()) {
            *d += 1;
        }
    }

    let mut queue: VecDeque<&G::Vertex> = in_degree
        .iter()
        .filter_map(|(u, d)| (*d == 0).then_some(*u))
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in graph.out_neighbors_of(u) {
            if let Some(d) = in_degree.get_mut(v) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(v);
                }
            }
        }
    }

    (order.len() == in_degree.len()).then_some(order)
}

/// Trait exposing traversal algorithms directly on graphs
pub trait Traversal: AdjacencyTest + Sized {
    /// Returns an iterator traversing vertices in breadth-first order from `start`
    fn bfs<'a>(&'a self, start: &'a Self::Vertex) -> Bfs<'a, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator traversing vertices in depth-first order from `start`
    fn dfs<'a>(&'a self, start: &'a Self::Vertex) -> Dfs<'a, Self> {
        Dfs::new(self, start)
    }

    /// Returns *true* if there is a directed path from `source` to `target`
    fn is_reachable(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.contains_vertex(target) && self.bfs(source).is_vertex_reachable(target)
    }

    /// Returns the vertices in an order in which every edge points forward,
    /// or `None` if the graph contains a cycle (self-loops included).
    fn topological_sort(&self) -> Option<Vec<&Self::Vertex>> {
        kahn(self)
    }

    /// Returns *true* if the graph contains no directed cycle
    fn is_acyclic(&self) -> bool {
        self.topological_sort().is_some()
    }
}

impl<G: AdjacencyTest> Traversal for G {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample() -> AdjacencyGraph<u32> {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        AdjacencyGraph::from_edges([(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
    }

    #[test]
    fn bfs_order() {
        let graph = sample();

        {
            let order: Vec<u32> = graph.bfs(&1).copied().collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let order: Vec<u32> = Bfs::new(&graph, &5).copied().collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_order() {
        let graph = sample();

        let order: Vec<u32> = graph.dfs(&1).copied().collect();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(order.iter().copied().sorted().collect_vec(), (0..6).collect_vec());

        let order: Vec<u32> = graph.dfs(&4).copied().collect();
        assert_eq!(order, [4, 3]);
    }

    #[test]
    fn absent_start() {
        let graph = sample();
        assert_eq!(graph.bfs(&42).count(), 0);
        assert!(!graph.is_reachable(&42, &1));
    }

    #[test]
    fn stop_and_exclude() {
        let graph = sample();

        let order: Vec<u32> = graph.bfs(&0).stop_at(&5).copied().collect();
        assert_eq!(order, [0, 5]);

        let order: Vec<u32> = graph
            .bfs(&1)
            .with_vertices_excluded([&2, &5])
            .copied()
            .collect();
        assert_eq!(order, [1, 0]);
    }

    #[test]
    fn restart() {
        let graph = sample();
        let mut search = graph.bfs(&4);
        assert_eq!(search.next(), Some(&4));
        // 3 is still pending
        assert!(!search.try_restart_at_unvisited());
        assert_eq!(search.by_ref().count(), 1);
        assert!(search.did_visit_vertex(&3));
        assert!(!search.did_visit_vertex(&1));

        let mut total = 2;
        while search.try_restart_at_unvisited() {
            total += search.by_ref().count();
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn reachability() {
        let graph = sample();
        assert!(graph.is_reachable(&1, &3));
        assert!(graph.is_reachable(&0, &4));
        assert!(!graph.is_reachable(&3, &1));
        assert!(!graph.is_reachable(&2, &0));
    }

    #[test]
    fn topological_sort() {
        let graph = sample();
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.len(), 6);

        let position = |u: &u32| order.iter().position(|v| *v == u).unwrap();
        for e in graph.edges() {
            assert!(position(&e.source) < position(&e.target));
        }
        assert!(graph.is_acyclic());
    }

    #[test]
    fn cycles_have_no_topological_order() {
        let mut graph = sample();
        graph.add_edge(Edge::new(3, 1));
        assert!(graph.topological_sort().is_none());

        let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges([(0, 1), (1, 1)]);
        assert!(!graph.is_acyclic());

        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        assert_eq!(graph.topological_sort(), Some(vec![]));
    }
}
