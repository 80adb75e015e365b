pub mod algo;
pub mod common;
pub mod graph;

pub use graph::Graph;
