/*!
# Graph Representations

The graph keeps one out-edge *bucket* per vertex plus a flat list of all edges. The
bucket storage is pluggable through [`EdgeBucket`]:

- [`AdjacencyGraph`] stores buckets as `Vec<E>`,
- [`SparseAdjacencyGraph`] stores buckets as `SmallVec<[E; 4]>`, avoiding a heap
  allocation per vertex for graphs of small out-degree.
*/

use smallvec::{Array, SmallVec};

mod adjacency;
mod config;

pub use adjacency::*;
pub use config::*;

/// Trait for the per-vertex list of out-edges
pub trait EdgeBucket<E>: Clone {
    /// Creates an empty bucket able to hold `capacity` edges without reallocating
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the edges in the bucket in insertion order
    fn as_slice(&self) -> &[E];

    /// Returns the number of edges in the bucket
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns *true* if the bucket holds no edges
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an edge without checking for parallel edges
    fn push(&mut self, edge: E);

    /// Removes and returns the edge at position `index`, keeping the order of the rest
    /// ** Panics if `index >= len` **
    fn remove(&mut self, index: usize) -> E;

    /// Keeps only the edges for which `keep` returns *true*
    fn retain<F: FnMut(&E) -> bool>(&mut self, keep: F);

    /// Releases excess capacity
    fn shrink_to_fit(&mut self);

    /// Removes all edges matching `predicate` and returns them in bucket order
    fn extract_where<F: FnMut(&E) -> bool>(&mut self, mut predicate: F) -> Vec<E> {
        let mut extracted = Vec::new();
        let mut i = 0;
        while i < self.len() {
            if predicate(&self.as_slice()[i]) {
                extracted.push(self.remove(i));
            } else {
                i += 1;
            }
        }
        extracted
    }
}

impl<E: Clone> EdgeBucket<E> for Vec<E> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn as_slice(&self) -> &[E] {
        self
    }

    fn push(&mut self, edge: E) {
        Vec::push(self, edge)
    }

    fn remove(&mut self, index: usize) -> E {
        Vec::remove(self, index)
    }

    fn retain<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        Vec::retain(self, keep)
    }

    fn shrink_to_fit(&mut self) {
        Vec::shrink_to_fit(self)
    }
}

impl<A> EdgeBucket<A::Item> for SmallVec<A>
where
    A: Array,
    A::Item: Clone,
{
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }

    fn as_slice(&self) -> &[A::Item] {
        self
    }

    fn push(&mut self, edge: A::Item) {
        SmallVec::push(self, edge)
    }

    fn remove(&mut self, index: usize) -> A::Item {
        SmallVec::remove(self, index)
    }

    fn retain<F: FnMut(&A::Item) -> bool>(&mut self, mut keep: F) {
        SmallVec::retain(self, |e| keep(e))
    }

    fn shrink_to_fit(&mut self) {
        SmallVec::shrink_to_fit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_bucket<B: EdgeBucket<u32>>() {
        let mut bucket = B::with_capacity(2);
        assert!(bucket.is_empty());

        for x in 0..10 {
            bucket.push(x);
        }
        assert_eq!(bucket.len(), 10);

        assert_eq!(bucket.remove(0), 0);
        assert_eq!(bucket.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(bucket.extract_where(|x| x % 3 == 0), vec![3, 6, 9]);
        assert_eq!(bucket.as_slice(), &[1, 2, 4, 5, 7, 8]);

        bucket.retain(|x| *x > 4);
        bucket.shrink_to_fit();
        assert_eq!(bucket.as_slice(), &[5, 7, 8]);
    }

    #[test]
    fn vec_bucket() {
        exercise_bucket::<Vec<u32>>();
    }

    #[test]
    fn smallvec_bucket() {
        exercise_bucket::<SmallVec<[u32; 4]>>();
    }
}
