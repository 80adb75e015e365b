//! Minimum spanning tree for undirected graphs.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo, Graph};
//!
//! let graph = Graph::parse("4\n0 3 4 2\n3 0 1 0\n4 1 0 4\n2 0 4 0\n").unwrap();
//! let tree = algo::prim(&graph).unwrap();
//!
//! let tree = &tree;
//! let total: u64 = (0..4)
//!     .flat_map(|i| (i..4).map(move |j| u64::from(tree[(i, j)])))
//!     .sum();
//! assert_eq!(total, 6);
//! ```

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{common::Matrix, graph::Graph};

/// The error encountered during spanning tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph is directed; the algorithm deals with undirected
    /// graphs only.
    #[error("the algorithm deals with undirected graphs only")]
    Directed,

    /// The graph has fewer than two vertices.
    #[error("the graph is smaller than the algorithm requires")]
    GraphTooSmall,

    /// The graph is not connected, so no spanning tree exists.
    #[error("the graph is not connected")]
    Disconnected,
}

/// Greedy minimum spanning tree. Returns a symmetric matrix containing
/// the selected tree edges and zero elsewhere.
///
/// Growth starts with vertex 0 in the tree; each round picks the first
/// globally minimum positive edge between the tree and the rest, in
/// row-then-column scan order, so ties are broken by scan order alone.
pub fn prim(graph: &Graph) -> Result<Matrix<u32>, Error> {
    if graph.is_directed() {
        return Err(Error::Directed);
    }

    let n = graph.vertex_count();

    if n < 2 {
        return Err(Error::GraphTooSmall);
    }

    let mut in_tree = FixedBitSet::with_capacity(n);
    let mut tree = Matrix::new(n, 0u32);

    in_tree.insert(0);

    for _ in 0..n - 1 {
        let mut best: Option<(u32, usize, usize)> = None;

        for i in (0..n).filter(|&i| in_tree.contains(i)) {
            for j in (0..n).filter(|&j| !in_tree.contains(j)) {
                let weight = graph.matrix()[(i, j)];

                if weight != 0 && best.is_none_or(|(min, ..)| weight < min) {
                    best = Some((weight, i, j));
                }
            }
        }

        let (weight, i, j) = best.ok_or(Error::Disconnected)?;

        tree[(i, j)] = weight;
        tree[(j, i)] = weight;
        in_tree.insert(j);
    }

    Ok(tree)
}
