pub mod shortest_paths;
pub mod spanning_tree;
pub mod traversal;
pub mod tsp;

pub use shortest_paths::{dijkstra, floyd_warshall};
pub use spanning_tree::prim;
pub use traversal::{breadth_first, depth_first};
