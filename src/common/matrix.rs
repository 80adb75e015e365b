use std::ops::{Index, IndexMut};

/// Square matrix stored in a contiguous, row-major buffer.
///
/// This is the shared substrate for the adjacency matrix itself as well
/// as for algorithm outputs (all-pairs distances, spanning trees) and
/// solver state (pheromone levels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size` × `size` matrix filled with `value`.
    pub fn new(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from nested rows, or `None` if the input is empty
    /// or not square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();

        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }

        Some(Self {
            size,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    /// The `row`-th row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.size.max(1))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.size && col < self.size);
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.size && col < self.size);
        &mut self.data[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_filled() {
        let m = Matrix::new(3, 7u32);

        assert_eq!(m.size(), 3);
        assert!(m.rows().all(|row| row == [7, 7, 7]));
    }

    #[test]
    fn from_rows_square() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();

        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(1), [3, 4]);
    }

    #[test]
    fn from_rows_rejects_non_square() {
        assert_eq!(Matrix::from_rows(vec![vec![1, 2], vec![3]]), None);
        assert_eq!(Matrix::<u32>::from_rows(Vec::new()), None);
    }

    #[test]
    fn get_respects_bounds() {
        let m = Matrix::new(2, 0u32);

        assert_eq!(m.get(1, 1), Some(&0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut m = Matrix::new(2, 0u32);
        m[(0, 1)] = 5;

        assert_eq!(m.row(0), [0, 5]);
        assert_eq!(m.row(1), [0, 0]);
    }
}
