#![allow(dead_code)]

use fastrand::Rng;
use gravel::Graph;

pub const RANDOM_SEED: u64 = 0x51c26d6cf5b3d7e6;

/// Fully-connected symmetric graph with random weights in `[1, 100)`.
pub fn random_complete(n: usize, rng: &mut Rng) -> Graph {
    let mut rows = vec![vec![0u32; n]; n];

    for i in 0..n {
        for j in i + 1..n {
            let weight = rng.u32(1..100);
            rows[i][j] = weight;
            rows[j][i] = weight;
        }
    }

    Graph::from_matrix(rows).expect("matrix is square by construction")
}

/// Symmetric graph where each pair is connected with probability `p`,
/// plus a ring through all vertices so the graph stays connected.
pub fn random_sparse(n: usize, p: f32, rng: &mut Rng) -> Graph {
    let mut rows = vec![vec![0u32; n]; n];

    for i in 0..n {
        for j in i + 1..n {
            if rng.f32() < p {
                let weight = rng.u32(1..100);
                rows[i][j] = weight;
                rows[j][i] = weight;
            }
        }
    }

    for i in 0..n {
        let j = (i + 1) % n;
        if rows[i][j] == 0 {
            let weight = rng.u32(1..100);
            rows[i][j] = weight;
            rows[j][i] = weight;
        }
    }

    Graph::from_matrix(rows).expect("matrix is square by construction")
}
