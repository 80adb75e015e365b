//! Shortest distances in the graph: single-pair and all-pairs.
//!
//! The single-pair search is a priority-driven relaxation over non-zero
//! edges with early termination at the target; the all-pairs variant is
//! a dynamic-programming relaxation over intermediate vertices.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo, Graph};
//!
//! let graph = Graph::parse("4\n0 3 4 2\n3 0 1 0\n4 1 0 4\n2 0 4 0\n").unwrap();
//!
//! assert_eq!(algo::dijkstra(&graph, 2, 4).unwrap(), Some(5));
//!
//! let all = algo::floyd_warshall(&graph).unwrap();
//! assert_eq!(all[(1, 3)], 5);
//! ```

use thiserror::Error;

mod dijkstra;
mod floyd_warshall;

pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;

/// The error encountered during a shortest paths run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An endpoint vertex is outside `[1, N]`.
    #[error("vertex index is out of range")]
    InvalidVertex,

    /// The graph is smaller than the all-pairs algorithm requires.
    #[error("the graph is smaller than the algorithm requires")]
    GraphTooSmall,
}
