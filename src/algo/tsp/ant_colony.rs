//! Ant colony optimization.
//!
//! A run consists of a fixed number of independent colonies. Every
//! colony resets the pheromone matrix to a uniform constant and then
//! performs a fixed number of bypass rounds: one ant per vertex, each
//! extending its path stochastically with probability proportional to
//! `pheromone^alpha * (1/weight)^beta` over the feasible candidates.
//! After a round, the shortest completed bypass may become the colony
//! best, pheromones evaporate, and every traversed edge is reinforced
//! proportionally to the inverse length of the path that crossed it.

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::{Error, Params, Solver, Tour};
use crate::{common::Matrix, graph::Graph};

/// TSP solver simulating pheromone-guided ant colonies.
#[derive(Debug)]
pub struct AntColony<'g> {
    graph: &'g Graph,
    params: Params,
    rng: fastrand::Rng,
    best: Option<(Vec<usize>, u64)>,
}

impl<'g> AntColony<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            params: Params::default(),
            rng: fastrand::Rng::new(),
            best: None,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    fn run_colony(&mut self) -> Option<(Vec<usize>, u64)> {
        let n = self.graph.vertex_count();
        let graph = self.graph;
        let params = &self.params;
        let rng = &mut self.rng;

        let mut pheromones = Matrix::new(n, params.initial_pheromone);
        let mut best: Option<(Vec<usize>, u64)> = None;

        for _ in 0..params.bypasses {
            let mut ants = Vec::with_capacity(n);

            for start in 0..n {
                let mut ant = Ant::new(graph, start);
                ant.bypass(&pheromones, params, rng);
                ants.push(ant);
            }

            // Only a completed bypass (all vertices plus the closing
            // edge) can become the round best.
            for ant in &ants {
                if ant.complete && best.as_ref().is_none_or(|(_, best)| ant.distance < *best) {
                    best = Some((ant.path.clone(), ant.distance));
                }
            }

            for level in pheromones.values_mut() {
                *level *= 1.0 - params.evaporation;
            }

            for ant in &ants {
                if ant.distance == 0 {
                    continue;
                }

                let reinforcement = params.deposit / ant.distance as f64;

                for &(i, j) in &ant.traversed {
                    pheromones[(i, j)] += reinforcement;
                    pheromones[(j, i)] = pheromones[(i, j)];
                }
            }
        }

        best
    }
}

impl Solver for AntColony<'_> {
    fn run(&mut self) {
        self.best = None;

        for colony in 0..self.params.colonies {
            if let Some((path, distance)) = self.run_colony() {
                if self.best.as_ref().is_none_or(|(_, best)| distance < *best) {
                    debug!(colony, distance, "new best tour");
                    self.best = Some((path, distance));
                }
            }
        }
    }

    fn result(&self) -> Result<Tour, Error> {
        let (path, distance) = self.best.as_ref().ok_or(Error::NoTourFound)?;

        Ok(Tour {
            vertices: path.iter().map(|v| v + 1).collect(),
            distance: *distance,
        })
    }
}

/// One ant's attempt to construct a tour, with its private tabu set and
/// the set of edges it traversed.
struct Ant<'g> {
    graph: &'g Graph,
    path: Vec<usize>,
    tabu: FixedBitSet,
    traversed: FxHashSet<(usize, usize)>,
    distance: u64,
    complete: bool,
}

impl<'g> Ant<'g> {
    fn new(graph: &'g Graph, start: usize) -> Self {
        let mut tabu = FixedBitSet::with_capacity(graph.vertex_count());
        tabu.insert(start);

        Self {
            graph,
            path: vec![start],
            tabu,
            traversed: FxHashSet::default(),
            distance: 0,
            complete: false,
        }
    }

    fn bypass(&mut self, pheromones: &Matrix<f64>, params: &Params, rng: &mut fastrand::Rng) {
        let n = self.graph.vertex_count();

        while self.path.len() < n {
            let current = self.path[self.path.len() - 1];

            let Some(next) = self.choose_next(current, pheromones, params, rng) else {
                // No feasible candidate left; the bypass stays
                // incomplete.
                return;
            };

            self.traversed.insert((current, next));
            self.distance += u64::from(self.graph.matrix()[(current, next)]);
            self.path.push(next);
            self.tabu.insert(next);
        }

        // The bypass counts as a tour only if the cycle can be closed.
        let first = self.path[0];
        let last = self.path[self.path.len() - 1];
        let closing = self.graph.matrix()[(last, first)];

        if closing != 0 {
            self.traversed.insert((last, first));
            self.distance += u64::from(closing);
            self.complete = true;
        }
    }

    /// Samples the next vertex among feasible (edge-present, non-tabu)
    /// candidates via a cumulative roulette over their desirabilities.
    fn choose_next(
        &self,
        current: usize,
        pheromones: &Matrix<f64>,
        params: &Params,
        rng: &mut fastrand::Rng,
    ) -> Option<usize> {
        let n = self.graph.vertex_count();
        let mut candidates = Vec::with_capacity(n);
        let mut total = 0.0;

        for next in 0..n {
            let weight = self.graph.matrix()[(current, next)];

            if weight == 0 || self.tabu.contains(next) {
                continue;
            }

            let desirability = pheromones[(current, next)].powf(params.alpha)
                * (1.0 / f64::from(weight)).powf(params.beta);

            total += desirability;
            candidates.push((next, desirability));
        }

        if total <= 0.0 {
            return None;
        }

        let draw = rng.f64() * total;
        let mut cumulative = 0.0;

        for &(next, desirability) in &candidates {
            cumulative += desirability;

            if draw < cumulative {
                return Some(next);
            }
        }

        // Floating-point slack can leave the draw above the last
        // cumulative bound.
        candidates.last().map(|&(next, _)| next)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::super::tests::assert_valid_tour;
    use super::*;

    fn create_complete_graph() -> Graph {
        Graph::from_matrix(vec![
            vec![0, 2, 9, 10, 7],
            vec![2, 0, 6, 4, 3],
            vec![9, 6, 0, 8, 5],
            vec![10, 4, 8, 0, 6],
            vec![7, 3, 5, 6, 0],
        ])
        .unwrap()
    }

    fn brute_force_optimum(graph: &Graph) -> u64 {
        let n = graph.vertex_count();
        let mut best = u64::MAX;
        let mut path: Vec<usize> = (0..n).collect();

        permute(&mut path, 1, graph, &mut best);
        best
    }

    fn permute(path: &mut Vec<usize>, at: usize, graph: &Graph, best: &mut u64) {
        if at == path.len() {
            if let Some(distance) = super::super::cycle_distance(graph, path) {
                *best = (*best).min(distance);
            }
            return;
        }

        for i in at..path.len() {
            path.swap(at, i);
            permute(path, at + 1, graph, best);
            path.swap(at, i);
        }
    }

    #[test]
    fn finds_optimum_on_complete_graph() {
        let graph = create_complete_graph();
        let optimum = brute_force_optimum(&graph);

        let mut solver = AntColony::new(&graph).with_seed(7);
        solver.run();
        let tour = solver.result().unwrap();

        assert_valid_tour(&graph, &tour);
        assert_eq!(tour.distance, optimum);
    }

    #[test]
    fn repeated_runs_converge() {
        let graph = create_complete_graph();
        let optimum = brute_force_optimum(&graph);
        let mut solver = AntColony::new(&graph).with_seed(42);

        for _ in 0..3 {
            solver.run();
            assert_eq!(solver.result().unwrap().distance, optimum);
        }
    }

    #[test]
    fn no_hamiltonian_cycle_is_an_error() {
        // A directed chain has no cycle through all vertices.
        let graph = Graph::from_matrix(vec![
            vec![0, 1, 0],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ])
        .unwrap();

        let mut solver = AntColony::new(&graph).with_seed(1);
        solver.run();

        assert_matches!(solver.result(), Err(Error::NoTourFound));
    }

    #[test]
    fn result_before_any_run_is_an_error() {
        let graph = create_complete_graph();
        let solver = AntColony::new(&graph);

        assert_matches!(solver.result(), Err(Error::NoTourFound));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let graph = create_complete_graph();

        let mut first = AntColony::new(&graph).with_seed(123);
        let mut second = AntColony::new(&graph).with_seed(123);
        first.run();
        second.run();

        assert_eq!(first.result().unwrap(), second.result().unwrap());
    }
}
