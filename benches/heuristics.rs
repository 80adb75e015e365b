mod common;

use common::{random_complete, random_sparse, RANDOM_SEED};
use fastrand::Rng;
use gravel::algo::{
    self,
    tsp::{Annealing, AntColony, Genetic, Params, Solver},
};

fn main() {
    divan::main();
}

fn bench_params() -> Params {
    // Trimmed iteration budgets so that a single sample stays cheap.
    Params {
        colonies: 10,
        generations: 100,
        attempts: 10,
        ..Params::default()
    }
}

#[divan::bench(args = [8, 16])]
fn ant_colony(bencher: divan::Bencher, n: usize) {
    let graph = random_complete(n, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut solver = AntColony::new(&graph)
            .with_params(bench_params())
            .with_seed(RANDOM_SEED);
        solver.run();
        solver.result()
    });
}

#[divan::bench(args = [8, 16])]
fn annealing(bencher: divan::Bencher, n: usize) {
    let graph = random_complete(n, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut solver = Annealing::new(&graph)
            .with_params(bench_params())
            .with_seed(RANDOM_SEED);
        solver.run();
        solver.result()
    });
}

#[divan::bench(args = [8, 16])]
fn genetic(bencher: divan::Bencher, n: usize) {
    let graph = random_complete(n, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut solver = Genetic::new(&graph)
            .with_params(bench_params())
            .with_seed(RANDOM_SEED);
        solver.run();
        solver.result()
    });
}

#[divan::bench(args = [64, 256])]
fn dijkstra_sparse(bencher: divan::Bencher, n: usize) {
    let graph = random_sparse(n, 0.25, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algo::dijkstra(&graph, 1, n));
}

#[divan::bench(args = [64, 256])]
fn floyd_warshall(bencher: divan::Bencher, n: usize) {
    let graph = random_sparse(n, 0.25, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algo::floyd_warshall(&graph));
}

#[divan::bench(args = [64, 256])]
fn prim(bencher: divan::Bencher, n: usize) {
    let graph = random_complete(n, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algo::prim(&graph));
}
