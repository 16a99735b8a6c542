//! Dense augmented matrix storage
//!
//! A system of `n` equations is stored as one contiguous row-major buffer of
//! `n * (n + 1)` values: the coefficients followed by the right-hand side.

use gauss_core::{Error, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Lower bound (inclusive) of randomly generated values
pub const RANDOM_MIN: f64 = 1.0;
/// Upper bound (exclusive) of randomly generated values
pub const RANDOM_MAX: f64 = 10.0;

/// Augmented `size x (size + 1)` matrix in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) data: Vec<f64>,
    pub(crate) size: usize,
    pub(crate) columns: usize,
}

impl Matrix {
    /// Create a zeroed matrix for a system of `size` equations
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::zero_size());
        }

        let columns = size + 1;
        Ok(Self {
            data: vec![0.0; size * columns],
            size,
            columns,
        })
    }

    /// Build a matrix from explicit rows of `size + 1` values each
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let mut matrix = Self::new(rows.len())?;
        let columns = matrix.columns;

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::size_mismatch(columns, row.len(), &format!("row {i}")));
            }
            matrix.row_mut(i).copy_from_slice(row);
        }

        Ok(matrix)
    }

    /// Number of equations (and unknowns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of columns, always `size + 1`
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The whole buffer in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Fill every cell, right-hand side included, with uniform values in `[1, 10)`
    ///
    /// The generator is seeded from OS entropy, so runs are not reproducible.
    pub fn generate_random(&mut self) {
        let mut rng = StdRng::from_entropy();
        self.generate_random_with(&mut rng);
    }

    /// Fill every cell with uniform values in `[1, 10)` drawn from `rng`
    pub fn generate_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let distribution = Uniform::new(RANDOM_MIN, RANDOM_MAX);
        for value in self.data.iter_mut() {
            *value = distribution.sample(rng);
        }
    }

    /// Value at row `r`, column `c`
    ///
    /// # Panics
    /// Panics if `r >= size` or `c >= columns` lands outside the buffer.
    #[inline]
    pub fn at(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.columns + c]
    }

    /// Mutable reference to the value at row `r`, column `c`
    #[inline]
    pub fn at_mut(&mut self, r: usize, c: usize) -> &mut f64 {
        &mut self.data[r * self.columns + c]
    }

    /// Row `r` as a slice of `columns` values
    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.columns;
        &self.data[start..start + self.columns]
    }

    /// Row `r` as a mutable slice of `columns` values
    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let start = r * self.columns;
        &mut self.data[start..start + self.columns]
    }

    /// The trailing column of every row
    ///
    /// Only meaningful once elimination has reduced the left block to the identity.
    pub fn solution_vector(&self) -> Vec<f64> {
        self.data
            .chunks_exact(self.columns)
            .map(|row| row[self.columns - 1])
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.columns + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[r * self.columns + c]
    }
}

/// Tab-separated rows with two decimals per value
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.columns) {
            for value in row {
                write!(f, "{value:.2}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
