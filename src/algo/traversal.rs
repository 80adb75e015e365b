//! Traversal orders over the graph: depth-first and breadth-first.
//!
//! Both traversals take a 1-based start vertex and return the 1-based
//! order in which vertices are discovered. The order covers exactly the
//! set reachable from the start, which is not necessarily the whole
//! graph.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo, Graph};
//!
//! let graph = Graph::parse("3\n0 1 1\n1 0 0\n1 0 0\n").unwrap();
//!
//! assert_eq!(algo::depth_first(&graph, 1).unwrap(), vec![1, 2, 3]);
//! assert_eq!(algo::breadth_first(&graph, 1).unwrap(), vec![1, 2, 3]);
//! ```

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{
    common::{Queue, Stack},
    graph::Graph,
};

/// The error encountered during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The start vertex is outside `[1, N]`.
    #[error("vertex index is out of range")]
    InvalidVertex,
}

/// Depth-first discovery order from `start` (1-based).
///
/// Neighbors are pushed in descending index order so that they pop in
/// ascending order, matching natural reading order.
pub fn depth_first(graph: &Graph, start: usize) -> Result<Vec<usize>, Error> {
    let n = graph.vertex_count();

    if start < 1 || start > n {
        return Err(Error::InvalidVertex);
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut order = Vec::new();
    let mut stack = Stack::new();

    stack.push(start - 1);

    while let Some(vertex) = stack.pop() {
        if visited.contains(vertex) {
            // The vertex was pushed before an earlier pop discovered it.
            continue;
        }

        visited.insert(vertex);
        order.push(vertex + 1);

        for next in (0..n).rev() {
            if graph.matrix()[(vertex, next)] != 0 && !visited.contains(next) {
                stack.push(next);
            }
        }
    }

    Ok(order)
}

/// Breadth-first discovery order from `start` (1-based).
///
/// Vertices are marked visited at enqueue time to avoid duplicate
/// entries in the queue; neighbors are scanned in ascending index
/// order.
pub fn breadth_first(graph: &Graph, start: usize) -> Result<Vec<usize>, Error> {
    let n = graph.vertex_count();

    if start < 1 || start > n {
        return Err(Error::InvalidVertex);
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut order = Vec::new();
    let mut queue = Queue::new();

    queue.push(start - 1);
    visited.insert(start - 1);

    while let Some(vertex) = queue.pop() {
        order.push(vertex + 1);

        for next in 0..n {
            if graph.matrix()[(vertex, next)] != 0 && !visited.contains(next) {
                queue.push(next);
                visited.insert(next);
            }
        }
    }

    Ok(order)
}
