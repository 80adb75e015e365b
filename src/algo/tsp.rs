//! Heuristic solvers for the traveling salesman problem.
//!
//! Three independently-stateful heuristics attempt to find a
//! Hamiltonian cycle of minimal total weight: [`AntColony`],
//! [`Annealing`] and [`Genetic`]. None of them guarantees global
//! optimality. All of them share the [`Solver`] capability (run the
//! search, retrieve the best tour found so far) and read the graph
//! through a shared reference; the working state of a run is owned
//! exclusively by its solver instance.
//!
//! Every solver threads a single [`fastrand::Rng`] through the whole
//! run. Unseeded solvers draw entropy at construction; pass a seed via
//! `with_seed` for reproducible runs.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo::tsp, Graph};
//!
//! let graph = Graph::parse("4\n0 3 4 2\n3 0 1 0\n4 1 0 4\n2 0 4 0\n").unwrap();
//! let tour = tsp::solve(&graph, tsp::Algo::AntColony).unwrap();
//!
//! assert_eq!(tour.vertices.len(), 4);
//! assert_eq!(tour.distance, 10);
//! ```

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::graph::Graph;

mod annealing;
mod ant_colony;
mod genetic;

pub use annealing::Annealing;
pub use ant_colony::AntColony;
pub use genetic::Genetic;

/// The best route found by a heuristic: an open sequence of 1-based
/// vertices visiting every vertex exactly once, plus the total cyclic
/// distance including the closing edge back to the first vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub vertices: Vec<usize>,
    pub distance: u64,
}

/// Heuristic constants shared read-only by all solver instances.
#[derive(Debug, Clone)]
pub struct Params {
    /// Initial annealing temperature.
    pub start_temp: f64,
    /// Temperature below which annealing stops.
    pub min_temp: f64,
    /// Geometric cooling factor applied per temperature step.
    pub cooling: f64,
    /// Pheromone importance in ant transition probabilities.
    pub alpha: f64,
    /// Inverse-weight importance in ant transition probabilities.
    pub beta: f64,
    /// Pheromone amount deposited per unit of tour quality.
    pub deposit: f64,
    /// Uniform pheromone level at the start of each colony.
    pub initial_pheromone: f64,
    /// Fraction of pheromone evaporating per bypass round.
    pub evaporation: f64,
    /// Number of independent ant colonies per run.
    pub colonies: usize,
    /// Bypass rounds per colony.
    pub bypasses: usize,
    /// Generations per genetic run.
    pub generations: usize,
    /// Population size kept constant by steady-state replacement.
    pub population: usize,
    /// Each offspring receives `N / mutation_factor` random swaps.
    pub mutation_factor: usize,
    /// Annealing neighbor trials per vertex per temperature step.
    pub attempts: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            start_temp: 1000.0,
            min_temp: 0.01,
            cooling: 0.9,
            alpha: 1.0,
            beta: 1.0,
            deposit: 4.0,
            initial_pheromone: 0.2,
            evaporation: 0.5,
            colonies: 100,
            bypasses: 10,
            generations: 1000,
            population: 5,
            mutation_factor: 4,
            attempts: 100,
        }
    }
}

/// The error encountered by a TSP solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No full Hamiltonian cycle was found. Known only after a run has
    /// completed, hence reported at result-retrieval time.
    #[error("no full tour through the graph was found")]
    NoTourFound,

    /// The comparison trial count is outside `[1, 1000]`.
    #[error("number of trials must be between 1 and 1000")]
    InvalidTrials,
}

/// Common capability of the TSP heuristics.
pub trait Solver {
    /// Runs one full search. Mutates only solver-private state and may
    /// be invoked again for another independent trial.
    fn run(&mut self);

    /// The best tour found by the last run, or [`Error::NoTourFound`]
    /// when the search never completed a full cycle.
    fn result(&self) -> Result<Tour, Error>;
}

/// Heuristic selector for [`solve`] and [`solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    AntColony,
    Annealing,
    Genetic,
}

/// Creates a fresh solver of the chosen kind for the graph.
pub fn solver(graph: &Graph, algo: Algo) -> Box<dyn Solver + '_> {
    match algo {
        Algo::AntColony => Box::new(AntColony::new(graph)),
        Algo::Annealing => Box::new(Annealing::new(graph)),
        Algo::Genetic => Box::new(Genetic::new(graph)),
    }
}

/// Runs the chosen heuristic once on a fresh solver instance.
pub fn solve(graph: &Graph, algo: Algo) -> Result<Tour, Error> {
    let mut solver = solver(graph, algo);
    solver.run();
    solver.result()
}

/// Best distance over all trials of one heuristic and the wall-clock
/// time the trial loop took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub best_distance: u64,
    pub elapsed: Duration,
}

/// Side-by-side measurement of the three heuristics, as returned by
/// [`compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub ant_colony: Trial,
    pub annealing: Trial,
    pub genetic: Trial,
}

/// Runs every heuristic `trials` times, reusing one solver instance per
/// heuristic across all its trials, and records the best distance found
/// together with the elapsed time around the trial loop only.
pub fn compare(graph: &Graph, trials: usize) -> Result<Comparison, Error> {
    if trials == 0 || trials > 1000 {
        return Err(Error::InvalidTrials);
    }

    Ok(Comparison {
        ant_colony: run_trials(&mut AntColony::new(graph), trials)?,
        annealing: run_trials(&mut Annealing::new(graph), trials)?,
        genetic: run_trials(&mut Genetic::new(graph), trials)?,
    })
}

fn run_trials<S: Solver>(solver: &mut S, trials: usize) -> Result<Trial, Error> {
    let started = Instant::now();
    let mut best_distance = u64::MAX;

    for _ in 0..trials {
        solver.run();
        best_distance = best_distance.min(solver.result()?.distance);
    }

    Ok(Trial {
        best_distance,
        elapsed: started.elapsed(),
    })
}

/// Total length of the cycle visiting `path` (0-based) in order and
/// returning to its first vertex, or `None` when any required edge is
/// absent.
pub(crate) fn cycle_distance(graph: &Graph, path: &[usize]) -> Option<u64> {
    let mut total = 0u64;

    for i in 0..path.len() {
        let from = path[i];
        let to = path[(i + 1) % path.len()];
        let weight = graph.matrix()[(from, to)];

        if weight == 0 {
            return None;
        }

        total += u64::from(weight);
    }

    Some(total)
}
