use core::fmt;
use std::ops::{Index, IndexMut, Mul};

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::{FixedVector, Scalar};

/// Dense row-major matrix with an immutable `rows x cols` shape.
///
/// Cells are addressed `(row, col)`. Both coordinates are checked against
/// their own dimension on every access.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedMatrix<T> {
    data: Array2<T>,
}

impl<T: Scalar> FixedMatrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> FixedMatrix<T> {
        FixedMatrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Builds a matrix from equally long rows.
    #[track_caller]
    pub fn from_rows(rows: &[Vec<T>]) -> FixedMatrix<T> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut m = FixedMatrix::zeros(rows.len(), cols);

        for (r, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                cols,
                "row {} has {} columns, expected {}",
                r,
                row.len(),
                cols
            );
            for (c, v) in row.iter().enumerate() {
                m.data[(r, c)] = *v;
            }
        }

        m
    }

    /// Fills every cell uniformly from `[low, high)`.
    #[track_caller]
    pub fn random_using<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> FixedMatrix<T> {
        assert!(low < high, "empty sampling range [{}, {})", low, high);

        FixedMatrix {
            data: Array2::random_using((rows, cols), Uniform::new(low, high), rng),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[track_caller]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.check(row, col);
        self.data[(row, col)]
    }

    #[track_caller]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.check(row, col);
        &mut self.data[(row, col)]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get((row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut((row, col))
    }

    #[track_caller]
    pub fn row(&self, row: usize) -> FixedVector<T> {
        assert!(
            row < self.rows(),
            "row {} out of bounds for {}x{} FixedMatrix",
            row,
            self.rows(),
            self.cols()
        );
        self.data.row(row).iter().copied().collect()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    pub(crate) fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    #[track_caller]
    fn check(&self, row: usize, col: usize) {
        assert!(
            row < self.rows(),
            "row {} out of bounds for {}x{} FixedMatrix",
            row,
            self.rows(),
            self.cols()
        );
        assert!(
            col < self.cols(),
            "column {} out of bounds for {}x{} FixedMatrix",
            col,
            self.rows(),
            self.cols()
        );
    }
}

impl<T: Scalar> Index<(usize, usize)> for FixedMatrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.check(row, col);
        &self.data[(row, col)]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for FixedMatrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.check(row, col);
        &mut self.data[(row, col)]
    }
}

impl<T: Scalar> Mul for &FixedMatrix<T> {
    type Output = FixedMatrix<T>;

    #[track_caller]
    fn mul(self, rhs: &FixedMatrix<T>) -> FixedMatrix<T> {
        assert_eq!(
            self.cols(),
            rhs.rows(),
            "matrix * matrix: inner dimensions differ ({}x{} * {}x{})",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols()
        );

        FixedMatrix {
            data: self.data.dot(&rhs.data),
        }
    }
}

impl<T: Scalar> Mul<T> for &FixedMatrix<T> {
    type Output = FixedMatrix<T>;

    fn mul(self, rhs: T) -> FixedMatrix<T> {
        FixedMatrix {
            data: self.data.mapv(|v| v * rhs),
        }
    }
}

impl<T: Scalar> fmt::Display for FixedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            write!(f, "[ ")?;
            for v in row.iter() {
                write!(f, "{:.6} ", v)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
