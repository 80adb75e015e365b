pub mod buffer;
pub mod matrix;

pub use buffer::{Queue, Stack};
pub use matrix::Matrix;
