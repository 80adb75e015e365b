//! Genetic search with steady-state replacement.
//!
//! The population holds random vertex permutations ordered by fitness,
//! where fitness is the cyclic tour distance and a missing edge makes
//! the individual maximally unfit. Each generation the two fittest
//! individuals produce two offspring by order-preserving crossover,
//! both offspring are mutated by a fixed number of random swaps and
//! inserted, and the two least-fit individuals are evicted, keeping the
//! population size constant.

use tracing::debug;

use super::{cycle_distance, Error, Params, Solver, Tour};
use crate::graph::Graph;

/// Fitness of an individual whose tour misses a required edge.
const UNFIT: u64 = u64::MAX;

/// TSP solver evolving a population of vertex permutations.
#[derive(Debug)]
pub struct Genetic<'g> {
    graph: &'g Graph,
    params: Params,
    rng: fastrand::Rng,
    best: Option<(Vec<usize>, u64)>,
}

impl<'g> Genetic<'g> {
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

    fn fitness(&self, individual: &[usize]) -> u64 {
        cycle_distance(self.graph, individual).unwrap_or(UNFIT)
    }

    fn swaps_per_offspring(&self) -> usize {
        if self.params.mutation_factor == 0 {
            0
        } else {
            self.graph.vertex_count() / self.params.mutation_factor
        }
    }
}

impl Solver for Genetic<'_> {
    fn run(&mut self) {
        let n = self.graph.vertex_count();
        // Procreation needs two parents.
        let size = self.params.population.max(2);

        let mut population: Vec<(u64, Vec<usize>)> = Vec::with_capacity(size + 2);
        let mut genes: Vec<usize> = (0..n).collect();

        for _ in 0..size {
            self.rng.shuffle(&mut genes);
            population.push((self.fitness(&genes), genes.clone()));
        }

        population.sort_by_key(|(fitness, _)| *fitness);

        let swaps = self.swaps_per_offspring();

        for _ in 0..self.params.generations {
            let (mut first, mut second) =
                crossover(&population[0].1, &population[1].1, &mut self.rng);

            mutate(&mut first, swaps, &mut self.rng);
            mutate(&mut second, swaps, &mut self.rng);

            population.push((self.fitness(&first), first));
            population.push((self.fitness(&second), second));

            // Steady-state replacement: the stable sort keeps insertion
            // order on equal fitness, truncation evicts the two least
            // fit.
            population.sort_by_key(|(fitness, _)| *fitness);
            population.truncate(size);
        }

        let (fitness, individual) = &population[0];
        debug!(fitness, "genetic search finished");

        self.best = (*fitness != UNFIT).then(|| (individual.clone(), *fitness));
    }

    fn result(&self) -> Result<Tour, Error> {
        let (path, distance) = self.best.as_ref().ok_or(Error::NoTourFound)?;

        Ok(Tour {
            vertices: path.iter().map(|v| v + 1).collect(),
            distance: *distance,
        })
    }
}

/// Order-preserving crossover: each offspring copies a random-length
/// prefix from one parent and fills the remaining positions with the
/// other parent's genes in order, skipping duplicates.
fn crossover(
    mother: &[usize],
    father: &[usize],
    rng: &mut fastrand::Rng,
) -> (Vec<usize>, Vec<usize>) {
    let cut = rng.usize(1..=mother.len());

    let mut first = mother[..cut].to_vec();
    let mut second = father[..cut].to_vec();

    for &gene in father {
        if !first.contains(&gene) {
            first.push(gene);
        }
    }

    for &gene in mother {
        if !second.contains(&gene) {
            second.push(gene);
        }
    }

    (first, second)
}

fn mutate(individual: &mut [usize], swaps: usize, rng: &mut fastrand::Rng) {
    for _ in 0..swaps {
        let i = rng.usize(0..individual.len());
        let j = rng.usize(0..individual.len());
        individual.swap(i, j);
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

    #[test]
    fn returns_a_valid_tour() {
        let graph = create_complete_graph();
        let mut solver = Genetic::new(&graph).with_seed(9);

        solver.run();

        assert_valid_tour(&graph, &solver.result().unwrap());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let graph = create_complete_graph();

        let mut first = Genetic::new(&graph).with_seed(21);
        let mut second = Genetic::new(&graph).with_seed(21);
        first.run();
        second.run();

        assert_eq!(first.result().unwrap(), second.result().unwrap());
    }

    #[test]
    fn infeasible_graph_is_an_error() {
        // No Hamiltonian cycle: vertex 3 has no outgoing edges.
        let graph = Graph::from_matrix(vec![
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![0, 0, 0],
        ])
        .unwrap();

        let mut solver = Genetic::new(&graph).with_seed(2);
        solver.run();

        assert_matches!(solver.result(), Err(Error::NoTourFound));
    }

    #[test]
    fn crossover_keeps_permutations() {
        let mut rng = fastrand::Rng::with_seed(17);
        let mother = vec![0, 1, 2, 3, 4];
        let father = vec![4, 3, 2, 1, 0];

        for _ in 0..20 {
            let (first, second) = crossover(&mother, &father, &mut rng);

            for offspring in [first, second] {
                let mut sorted = offspring.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, mother);
            }
        }
    }

    #[test]
    fn mutation_preserves_genes() {
        let mut rng = fastrand::Rng::with_seed(8);
        let mut individual = vec![0, 1, 2, 3, 4];

        mutate(&mut individual, 3, &mut rng);

        let mut sorted = individual.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }
}
