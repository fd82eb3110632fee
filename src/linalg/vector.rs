use core::fmt;
use std::ops::{Index, IndexMut, Mul, Sub};

use ndarray::Array1;

use super::{FixedMatrix, Scalar};

/// Dense vector whose length is fixed when it is built.
///
/// Every element access is bounds-checked, in release builds too. A failed
/// check panics at the caller's location.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedVector<T> {
    data: Array1<T>,
}

impl<T: Scalar> FixedVector<T> {
    pub fn zeros(len: usize) -> FixedVector<T> {
        FixedVector {
            data: Array1::zeros(len),
        }
    }

    pub fn from_vec(values: Vec<T>) -> FixedVector<T> {
        FixedVector {
            data: Array1::from_vec(values),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        self.check(index);
        self.data[index]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Applies `f` to every element, producing a vector of the same length.
    pub fn map(&self, f: impl Fn(T) -> T) -> FixedVector<T> {
        FixedVector {
            data: self.data.mapv(f),
        }
    }

    pub fn sum(&self) -> T {
        self.data.sum()
    }

    pub fn magnitude_squared(&self) -> T {
        self.data.fold(T::zero(), |a, v| a + *v * *v)
    }

    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Index of the largest element.
    ///
    /// The scan starts from a zero baseline at index 0 and an element takes
    /// over whenever it is `>=` the running maximum, so the last of several
    /// equal maxima wins and a vector with no element `>= 0` reports 0.
    pub fn argmax(&self) -> usize {
        let mut max_ix = 0;
        let mut max = T::zero();

        for (i, v) in self.data.iter().enumerate() {
            if *v >= max {
                max_ix = i;
                max = *v;
            }
        }

        max_ix
    }

    /// Copies this vector and appends `value`, e.g. the constant bias feature.
    pub fn augmented(&self, value: T) -> FixedVector<T> {
        let mut data = Array1::zeros(self.len() + 1);
        data.slice_mut(ndarray::s![..self.len()]).assign(&self.data);
        data[self.len()] = value;
        FixedVector { data }
    }

    /// Row vector times matrix: `result[c] = Σ_r self[r] * matrix[(r, c)]`.
    #[track_caller]
    pub fn dot(&self, matrix: &FixedMatrix<T>) -> FixedVector<T> {
        assert_eq!(
            self.len(),
            matrix.rows(),
            "vector * matrix: vector length {} does not match {} matrix rows",
            self.len(),
            matrix.rows()
        );

        FixedVector {
            data: self.data.dot(matrix.as_array()),
        }
    }

    #[track_caller]
    fn check(&self, index: usize) {
        assert!(
            index < self.len(),
            "index {} out of bounds for FixedVector of length {}",
            index,
            self.len()
        );
    }
}

impl<T: Scalar> Index<usize> for FixedVector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.check(index);
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for FixedVector<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.check(index);
        &mut self.data[index]
    }
}

impl<T: Scalar> Sub for &FixedVector<T> {
    type Output = FixedVector<T>;

    #[track_caller]
    fn sub(self, rhs: &FixedVector<T>) -> FixedVector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "vector - vector: lengths {} and {} differ",
            self.len(),
            rhs.len()
        );

        FixedVector {
            data: &self.data - &rhs.data,
        }
    }
}

impl<T: Scalar> Sub for FixedVector<T> {
    type Output = FixedVector<T>;

    #[track_caller]
    fn sub(self, rhs: FixedVector<T>) -> FixedVector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Mul<T> for &FixedVector<T> {
    type Output = FixedVector<T>;

    fn mul(self, rhs: T) -> FixedVector<T> {
        self.map(|v| v * rhs)
    }
}

impl<T: Scalar> Mul<&FixedMatrix<T>> for &FixedVector<T> {
    type Output = FixedVector<T>;

    #[track_caller]
    fn mul(self, rhs: &FixedMatrix<T>) -> FixedVector<T> {
        self.dot(rhs)
    }
}

impl<T: Scalar> From<Vec<T>> for FixedVector<T> {
    fn from(values: Vec<T>) -> Self {
        FixedVector::from_vec(values)
    }
}

impl<T: Scalar> From<&[T]> for FixedVector<T> {
    fn from(values: &[T]) -> Self {
        FixedVector::from_vec(values.to_vec())
    }
}

impl<T: Scalar> FromIterator<T> for FixedVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FixedVector {
            data: Array1::from_iter(iter),
        }
    }
}

impl<T: Scalar> fmt::Display for FixedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for v in self.data.iter() {
            write!(f, "{:.6} ", v)?;
        }
        write!(f, " ]")
    }
}
