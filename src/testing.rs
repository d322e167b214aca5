/// Runs the common graph-operation tests against a representation.
///
/// Each test mirrors random edits in a reference model (`BTreeSet` of vertices and
/// `(source, target)` pairs) and compares the graph against it after every step.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;
            use std::collections::BTreeSet;

            type Graph = $graph<u32>;

            /// Creates a list of at most `m_ub` random edges for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Vec<Edge<u32>> {
                (0..m_ub)
                    .map(|_| Edge::new(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Asserts that `graph` stores exactly the given vertices and edges
            fn assert_matches(graph: &Graph, vertices: &BTreeSet<u32>, edges: &BTreeSet<(u32, u32)>) {
                assert_eq!(graph.number_of_vertices(), vertices.len());
                assert_eq!(graph.number_of_edges(), edges.len());
                assert_eq!(graph.vertices().copied().collect::<BTreeSet<_>>(), *vertices);
                assert_eq!(
                    graph.edges().map(|e| (e.source, e.target)).collect::<BTreeSet<_>>(),
                    *edges
                );

                let degree_sum: usize = graph.vertices().map(|u| graph.out_degree_of(u)).sum();
                assert_eq!(degree_sum, graph.number_of_edges());

                for &(u, v) in edges {
                    assert!(graph.has_edge(&u, &v));
                    assert!(graph.contains_vertex(&u) && graph.contains_vertex(&v));
                }
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = Graph::new();

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_vertices(), 0);
            assert!(graph.is_vertices_empty());
            assert!(graph.is_edges_empty());
            assert_eq!(graph.vertices().count(), 0);
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                let mut graph = Graph::new();
                let mut vertices = BTreeSet::new();

                for _ in 0..(3 * n) {
                    let u = rng.random_range(0..n);
                    assert_eq!(graph.add_vertex(u), vertices.insert(u));
                }
                assert_matches(&graph, &vertices, &BTreeSet::new());

                for _ in 0..n {
                    let u = rng.random_range(0..n);
                    assert_eq!(graph.remove_vertex(&u), vertices.remove(&u));
                }
                assert_matches(&graph, &vertices, &BTreeSet::new());
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n as usize * 2, n as usize * 5] {
                    let mut graph = Graph::new();
                    let mut vertices = BTreeSet::new();
                    let mut edges = BTreeSet::new();

                    for e in random_edges(rng, n, m_ub) {
                        let added = graph.add_edge(e);
                        assert_eq!(added, edges.insert((e.source, e.target)));
                        vertices.insert(e.source);
                        vertices.insert(e.target);
                    }
                    assert_matches(&graph, &vertices, &edges);

                    let m = graph.number_of_edges();
                    for _ in 0..(m / 2) {
                        let e = Edge::new(rng.random_range(0..n), rng.random_range(0..n));
                        assert_eq!(graph.remove_edge(&e), edges.remove(&(e.source, e.target)));
                    }
                    assert_matches(&graph, &vertices, &edges);

                    for u in 0..n {
                        let expected = edges.iter().filter(|(s, _)| *s == u).count();
                        assert_eq!(graph.remove_edges_out_of_vertex(&u), expected);
                        edges.retain(|(s, _)| *s != u);
                    }
                    assert!(graph.is_edges_empty());
                    assert_matches(&graph, &vertices, &edges);
                }
            }
        }
    };
    ($graph:ident: RemoveVertex) => {
        #[test]
        fn test_remove_vertex() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10u32, 20, 50] {
                let edges_in = random_edges(rng, n, n as usize * 4);

                let mut graph = Graph::from_edges(edges_in.iter().copied());
                let mut vertices: BTreeSet<u32> = edges_in.iter().flat_map(|e| [e.source, e.target]).collect();
                let mut edges: BTreeSet<(u32, u32)> = edges_in.iter().map(|e| (e.source, e.target)).collect();

                for _ in 0..(n / 2) {
                    let u = rng.random_range(0..n);
                    assert_eq!(graph.remove_vertex(&u), vertices.remove(&u));
                    edges.retain(|&(s, t)| s != u && t != u);

                    assert!(graph.edges().all(|e| !e.is_incident_to(&u)));
                    assert_matches(&graph, &vertices, &edges);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
