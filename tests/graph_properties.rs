//! Property-based tests for the adjacency graph.
//!
//! Every sequence of operations is replayed on both storage backends and on a simple
//! set-based model; the invariants below must hold after each step.

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use adjgraph::{algo::*, prelude::*};
use itertools::Itertools;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
    RemoveOutEdgesTo(u8, u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    let vertex = 0u8..12;
    prop_oneof![
        4 => vertex.clone().prop_map(Op::AddVertex),
        8 => (vertex.clone(), vertex.clone()).prop_map(|(u, v)| Op::AddEdge(u, v)),
        3 => (vertex.clone(), vertex.clone()).prop_map(|(u, v)| Op::RemoveEdge(u, v)),
        2 => vertex.clone().prop_map(Op::RemoveVertex),
        1 => (vertex.clone(), vertex).prop_map(|(u, v)| Op::RemoveOutEdgesTo(u, v)),
        1 => Just(Op::Clear),
    ]
}

#[derive(Default)]
struct Model {
    vertices: BTreeSet<u8>,
    edges: BTreeSet<(u8, u8)>,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::AddVertex(u) => {
                self.vertices.insert(u);
            }
            Op::AddEdge(u, v) => {
                self.vertices.insert(u);
                self.vertices.insert(v);
                self.edges.insert((u, v));
            }
            Op::RemoveEdge(u, v) => {
                self.edges.remove(&(u, v));
            }
            Op::RemoveVertex(u) => {
                self.vertices.remove(&u);
                self.edges.retain(|&(s, t)| s != u && t != u);
            }
            Op::RemoveOutEdgesTo(u, v) => {
                self.edges.remove(&(u, v));
            }
            Op::Clear => {
                self.vertices.clear();
                self.edges.clear();
            }
        }
    }
}

fn apply<G>(graph: &mut G, op: &Op)
where
    G: GraphEdgeEditing + GraphClear + GraphType<Vertex = u8, Edge = Edge<u8>>,
{
    match *op {
        Op::AddVertex(u) => {
            graph.add_vertex(u);
        }
        Op::AddEdge(u, v) => {
            graph.add_edge(Edge::new(u, v));
        }
        Op::RemoveEdge(u, v) => {
            graph.remove_edge(&Edge::new(u, v));
        }
        Op::RemoveVertex(u) => {
            graph.remove_vertex(&u);
        }
        Op::RemoveOutEdgesTo(u, v) => {
            graph.remove_out_edges_where(&u, |e| e.target == v);
        }
        Op::Clear => graph.clear(),
    }
}

fn check<G>(graph: &G, model: &Model) -> Result<(), TestCaseError>
where
    G: AdjacencyTest + GraphType<Vertex = u8, Edge = Edge<u8>>,
{
    let vertices: BTreeSet<u8> = graph.vertices().copied().collect();
    prop_assert_eq!(&vertices, &model.vertices);

    let edges: BTreeSet<(u8, u8)> = graph.edges().map(|e| (e.source, e.target)).collect();
    prop_assert_eq!(&edges, &model.edges);
    prop_assert_eq!(graph.number_of_edges(), graph.edges().count());

    let degree_sum: usize = graph.vertices().map(|u| graph.out_degree_of(u)).sum();
    prop_assert_eq!(graph.number_of_edges(), degree_sum);

    for u in 0u8..12 {
        for v in 0u8..12 {
            prop_assert_eq!(graph.has_edge(&u, &v), model.edges.contains(&(u, v)));
        }
        if !model.vertices.contains(&u) {
            prop_assert!(graph.edges().all(|e| !e.is_incident_to(&u)));
        }
    }

    prop_assert_eq!(graph.is_vertices_empty(), model.vertices.is_empty());
    prop_assert_eq!(graph.is_edges_empty(), model.edges.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn operations_agree_with_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut dense: AdjacencyGraph<u8> = AdjacencyGraph::new();
        let mut sparse: SparseAdjacencyGraph<u8> = SparseAdjacencyGraph::new();
        let mut model = Model::default();

        for op in &ops {
            apply(&mut dense, op);
            apply(&mut sparse, op);
            model.apply(op);

            check(&dense, &model)?;
            check(&sparse, &model)?;
        }
    }

    #[test]
    fn add_vertex_is_idempotent(vertices in prop::collection::vec(0u32..50, 0..100)) {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let added = graph.add_vertices(vertices.iter().copied());
        let distinct = vertices.iter().unique().count();

        prop_assert_eq!(added, distinct);
        prop_assert_eq!(graph.number_of_vertices(), distinct);
        prop_assert_eq!(graph.add_vertices(vertices), 0);
    }

    #[test]
    fn parallel_edges_are_rejected(pairs in prop::collection::vec((0u32..10, 0u32..10), 1..60)) {
        let mut graph: AdjacencyGraph<u32, TaggedEdge<u32, usize>> = AdjacencyGraph::new();
        for (i, &(u, v)) in pairs.iter().enumerate() {
            let fresh = !graph.has_edge(&u, &v);
            prop_assert_eq!(graph.add_edge(TaggedEdge::new(u, v, i)), fresh);
        }
        prop_assert_eq!(graph.number_of_edges(), pairs.iter().unique().count());

        // the first payload per pair survives
        for e in graph.edges() {
            let first = pairs.iter().position(|&p| p == (e.source, e.target));
            prop_assert_eq!(first, Some(e.tag));
        }
    }

    #[test]
    fn every_addition_is_announced(pairs in prop::collection::vec((0u32..8, 0u32..8), 0..40)) {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let counts = Rc::new(RefCell::new((0usize, 0usize)));
        {
            let counts = counts.clone();
            graph.subscribe(move |event| {
                let mut counts = counts.borrow_mut();
                match event {
                    GraphEvent::VertexAdded(_) => counts.0 += 1,
                    GraphEvent::EdgeAdded(_) => counts.1 += 1,
                    _ => {}
                }
            });
        }

        graph.add_edges(pairs);
        prop_assert_eq!(*counts.borrow(), (graph.number_of_vertices(), graph.number_of_edges()));
    }

    #[test]
    fn topological_order_respects_edges(pairs in prop::collection::vec((0u32..15, 0u32..15), 0..40)) {
        // orient every edge from smaller to larger id so the graph is acyclic
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(
            pairs.into_iter().filter(|(u, v)| u != v).map(|(u, v)| (u.min(v), u.max(v))),
        );

        let order = graph.topological_sort();
        prop_assert!(order.is_some());
        let order = order.unwrap_or_default();
        prop_assert_eq!(order.len(), graph.number_of_vertices());
        for e in graph.edges() {
            let s = order.iter().position(|u| **u == e.source);
            let t = order.iter().position(|u| **u == e.target);
            prop_assert!(s < t);
        }
    }
}

#[test]
fn remove_vertex_drops_all_incident_edges() {
    let mut graph: AdjacencyGraph<&str> =
        AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(graph.remove_vertex(&"A"));

    assert_eq!(graph.vertices().copied().sorted().collect_vec(), ["B", "C"]);
    assert_eq!(
        graph.edges().map(|e| (e.source, e.target)).collect_vec(),
        [("B", "C")]
    );
    assert!(!graph.remove_vertex(&"A"));
}
