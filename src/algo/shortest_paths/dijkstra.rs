use std::{cmp::Reverse, collections::BinaryHeap};

use super::Error;
use crate::graph::Graph;

/// Shortest distance between `from` and `to` (both 1-based), or `None`
/// when `to` is unreachable. Unreachability is a defined outcome, not
/// an error.
pub fn dijkstra(graph: &Graph, from: usize, to: usize) -> Result<Option<u64>, Error> {
    let n = graph.vertex_count();

    if from < 1 || from > n || to < 1 || to > n {
        return Err(Error::InvalidVertex);
    }

    let (source, target) = (from - 1, to - 1);

    let mut dist = vec![u64::MAX; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0;
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((vertex_dist, vertex))) = heap.pop() {
        if vertex == target {
            return Ok(Some(vertex_dist));
        }

        // A stale entry left behind by a later relaxation of `vertex`.
        if vertex_dist > dist[vertex] {
            continue;
        }

        for next in 0..n {
            let weight = graph.matrix()[(vertex, next)];

            if weight == 0 {
                continue;
            }

            let next_dist = vertex_dist + u64::from(weight);

            if next_dist < dist[next] {
                dist[next] = next_dist;
                // A textbook version would decrease the priority of
                // `next` in place. Pushing a duplicate is fine, the
                // stale one is skipped when popped.
                heap.push(Reverse((next_dist, next)));
            }
        }
    }

    Ok(None)
}
