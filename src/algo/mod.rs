/*!
# Graph Algorithms

This module provides **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraph::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod traversal;

use crate::prelude::*;
use fxhash::{FxHashMap, FxHashSet};

pub use traversal::*;
