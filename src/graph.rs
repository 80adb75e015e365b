//! Dense weighted graph and its load/export boundary.
//!
//! The graph is a square matrix of non-negative integer weights where
//! `0` at position `(i, j)` means there is no edge `i → j`. Once
//! constructed, the matrix never changes; reloading a file produces a
//! new value that replaces the old one wholesale.
//!
//! # Examples
//!
//! ```
//! use gravel::Graph;
//!
//! let graph = Graph::parse("3\n0 1 2\n1 0 3\n2 3 0\n").unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.weight(0, 2), Ok(2));
//! assert!(!graph.is_directed());
//! ```

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::common::Matrix;

/// Immutable weighted graph over a dense adjacency matrix.
///
/// See [module](self) documentation for more details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    matrix: Matrix<u32>,
}

/// The error encountered when loading a graph.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("open file error: {0}")]
    Open(#[from] io::Error),

    /// The size header is missing or not a positive integer.
    #[error("graph size error")]
    Size,

    /// A weight token contains something other than base-10 digits.
    #[error("non-digit edge weights in graph")]
    NonDigitWeight,

    /// Fewer weight tokens than the declared size requires.
    #[error("count of edges less than shape of graph")]
    MissingWeights,

    /// More weight tokens than the declared size requires.
    #[error("count of edges greater than shape of graph")]
    TrailingInput,

    /// The in-memory matrix is empty or not square.
    #[error("adjacency matrix must be square and non-empty")]
    NotSquare,
}

/// The error returned by [`Graph::weight`] for indices outside `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph index out of range")]
pub struct IndexError;

impl Graph {
    /// Builds a graph from an already-validated in-memory matrix.
    pub fn from_matrix(rows: Vec<Vec<u32>>) -> Result<Self, LoadError> {
        let matrix = Matrix::from_rows(rows).ok_or(LoadError::NotSquare)?;
        Ok(Self { matrix })
    }

    /// Parses the adjacency matrix text format: a size header `N > 0` on
    /// the first line, followed by exactly `N²` whitespace-separated
    /// non-negative integer tokens, nothing more.
    pub fn parse(input: &str) -> Result<Self, LoadError> {
        let (header, body) = input.split_once('\n').ok_or(LoadError::Size)?;
        let size = header
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(LoadError::Size)?;

        let mut matrix = Matrix::new(size, 0u32);
        let mut tokens = body.split_whitespace();

        for row in 0..size {
            for col in 0..size {
                let token = tokens.next().ok_or(LoadError::MissingWeights)?;

                if token.bytes().any(|b| !b.is_ascii_digit()) {
                    return Err(LoadError::NonDigitWeight);
                }

                matrix[(row, col)] = token.parse().map_err(|_| LoadError::NonDigitWeight)?;
            }
        }

        if tokens.next().is_some() {
            return Err(LoadError::TrailingInput);
        }

        Ok(Self { matrix })
    }

    /// Reads and parses a graph file. See [`Graph::parse`] for the
    /// format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    /// Weight of the edge `row → col` (0-based), where `0` means the
    /// edge is absent. Fails when either index is outside `[0, N)`.
    pub fn weight(&self, row: usize, col: usize) -> Result<u32, IndexError> {
        self.matrix.get(row, col).copied().ok_or(IndexError)
    }

    /// The underlying adjacency matrix.
    pub fn matrix(&self) -> &Matrix<u32> {
        &self.matrix
    }

    /// True iff any pair of weights is asymmetric. Derived from the
    /// matrix, not stored.
    pub fn is_directed(&self) -> bool {
        let n = self.matrix.size();

        (0..n).any(|i| (i + 1..n).any(|j| self.matrix[(i, j)] != self.matrix[(j, i)]))
    }

    /// Renders the graph in the dot edge-list format with 1-based vertex
    /// numbering. Directed graphs collapse equal-direction pairs into a
    /// single `dir="both"` edge.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        let n = self.matrix.size();

        if self.is_directed() {
            out.push_str("digraph DirectedGraph {\n");

            for i in 0..n {
                for j in i..n {
                    let forward = self.matrix[(i, j)];
                    let backward = self.matrix[(j, i)];

                    if forward > 0 && backward == 0 {
                        out.push_str(&format!("\t{} -> {} [weight = {}];\n", i + 1, j + 1, forward));
                    } else if forward == 0 && backward > 0 {
                        out.push_str(&format!("\t{} -> {} [weight = {}];\n", j + 1, i + 1, backward));
                    } else if forward > 0 && backward > 0 {
                        out.push_str(&format!(
                            "\t{} -> {} [weight = {} dir=\"both\"];\n",
                            i + 1,
                            j + 1,
                            forward
                        ));
                    }
                }
            }
        } else {
            out.push_str("graph UndirectedGraph {\n");

            for i in 0..n {
                for j in i..n {
                    let weight = self.matrix[(i, j)];

                    if weight > 0 {
                        out.push_str(&format!("\t{} -- {} [weight = {}];\n", i + 1, j + 1, weight));
                    }
                }
            }
        }

        out.push_str("}\n");
        out
    }

    /// Writes the dot rendering into `out`. See [`Graph::to_dot`].
    pub fn export_dot<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_dot().as_bytes())
    }
}
