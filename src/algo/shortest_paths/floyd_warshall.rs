use super::Error;
use crate::{common::Matrix, graph::Graph};

const INF: u64 = u64::MAX;

/// All-pairs shortest distances. `0` in an off-diagonal entry of the
/// output means the pair is unreachable.
///
/// Off-diagonal zeros of the input are promoted to an internal infinity
/// before relaxation so that a missing edge is never mistaken for a
/// zero-cost one, and demoted back to `0` afterwards.
pub fn floyd_warshall(graph: &Graph) -> Result<Matrix<u64>, Error> {
    let n = graph.vertex_count();

    if n <= 2 {
        return Err(Error::GraphTooSmall);
    }

    let mut dist = Matrix::new(n, 0u64);

    for i in 0..n {
        for j in 0..n {
            let weight = graph.matrix()[(i, j)];

            dist[(i, j)] = if i != j && weight == 0 {
                INF
            } else {
                u64::from(weight)
            };
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let (through_a, through_b) = (dist[(i, k)], dist[(k, j)]);

                if through_a != INF && through_b != INF {
                    let through = through_a + through_b;

                    if through < dist[(i, j)] {
                        dist[(i, j)] = through;
                    }
                }
            }
        }
    }

    for i in 0..n {
        for j in 0..n {
            if i != j && dist[(i, j)] == INF {
                dist[(i, j)] = 0;
            }
        }
    }

    Ok(dist)
}
