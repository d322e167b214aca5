/*!
`adjgraph` is a mutable **directed** graph container over arbitrary vertex and edge types that
announces every structural change to its subscribers.

# Representation

**Vertices** can be any `Clone + Eq + Hash` value: integers, strings, handles, small structs.
**Edges** are any type implementing [`GraphEdge<V>`](edge::GraphEdge), i.e. anything that
can name a `source` and a `target` vertex. The crate ships
- [`Edge<V>`](edge::Edge), a plain directed pair,
- [`TaggedEdge<V, T>`](edge::TaggedEdge), a directed pair carrying a payload,
- `(V, V)` tuples.

The graph stores, per vertex, a bucket of its out-edges (an *adjacency list*), together with a
flat list of all edges in insertion order. At most one edge per ordered pair `(source, target)`
can exist at any time; edges carrying different payloads are still considered parallel.

See the [`repr`] module for the available storage backends:

- [`AdjacencyGraph`](crate::repr::AdjacencyGraph) (buckets are `Vec<E>`)
- [`SparseAdjacencyGraph`](crate::repr::SparseAdjacencyGraph) (buckets are `SmallVec<[E; 4]>`)

# Notifications

Subscribers can listen for `VertexAdded`, `VertexRemoved`, `EdgeAdded` and `EdgeRemoved`.
Handlers run synchronously after the mutation completed. See [`events`] for the exact order.

```
use adjgraph::prelude::*;
use std::{cell::RefCell, rc::Rc};

let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
let seen = Rc::new(RefCell::new(Vec::new()));
{
    let seen = seen.clone();
    graph.subscribe(move |event| seen.borrow_mut().push(format!("{event:?}")));
}

assert!(graph.add_edge(Edge::new("X", "Y")));
assert_eq!(
    *seen.borrow(),
    vec!["VertexAdded(\"X\")", "VertexAdded(\"Y\")", "EdgeAdded((\"X\"->\"Y\"))"]
);
```

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes vertex and edge definitions, all basic graph operation traits and all representations,
- [`algo`] includes traversal algorithms implemented on graphs directly (`graph.bfs(&start)`, `graph.topological_sort()`, ...),
- [`io`] includes readers and writers for edge lists and a writer for the GraphViz DOT format,
- [`events`] includes the subscription machinery.

In most use-cases, `use adjgraph::{prelude::*, algo::*};` suffices for your needs.

# Concurrency

Graphs are not internally synchronized and must not be mutated from several threads at once.
Wrap them in a `Mutex` (or similar) for shared mutable access.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod events;
pub mod io;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::GraphError;
pub use vertex::*;

/// `adjgraph::prelude` includes definitions for vertices and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, events::*, ops::*, repr::*, vertex::*};
}
