//! Dense row-major matrix: element at (row, col) = data[row * width + col].
//!
//! Transforms are always 4×4, but nothing here is specialised to that size.
//! Determinants use recursive cofactor expansion, which is O(N!) in the
//! dimension. That is fine for the 2×2..4×4 matrices a renderer builds and is
//! a deliberate limit: larger systems want LU decomposition instead.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use log::debug;

use crate::error::{MatrixError, Result};
use crate::float::approx_eq;
use crate::tuple::Tuple;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

// ─── Construction ─────────────────────────────────────────────────────────────

impl Matrix {
    /// Zero-filled `height`×`width` matrix.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0.0; width * height] }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size, size);
        for i in 0..size {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build from nested rows. Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(MatrixError::Ragged { row, len: r.len(), expected: width });
            }
            data.extend_from_slice(r);
        }
        Ok(Self { width, height: rows.len(), data })
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn is_square(&self) -> bool { self.width == self.height }

    #[inline] pub fn get(&self, row: usize, col: usize) -> f64 { self[(row, col)] }

    #[inline] pub fn set(&mut self, row: usize, col: usize, v: f64) { self[(row, col)] = v; }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.width.max(1))
    }

    /// Element-wise comparison within `epsilon`. Matrices of different shape
    /// are never equal.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.data.iter().zip(&other.data).all(|(&a, &b)| approx_eq(a, b, epsilon))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.height && col < self.width,
            "index ({row}, {col}) out of range for {}x{} matrix", self.height, self.width);
        &self.data[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.height && col < self.width,
            "index ({row}, {col}) out of range for {}x{} matrix", self.height, self.width);
        &mut self.data[row * self.width + col]
    }
}

// ─── Products ─────────────────────────────────────────────────────────────────

impl Matrix {
    /// `self · other`. Needs `self.width == other.height`; the result is
    /// `self.height`×`other.width`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            return Err(MatrixError::DimensionMismatch {
                lhs_height: self.height,
                lhs_width: self.width,
                rhs_height: other.height,
                rhs_width: other.width,
            });
        }
        let mut c = Self::new(other.width, self.height);
        for i in 0..self.height {
            for j in 0..other.width {
                let mut sum = 0.0;
                for k in 0..self.width {
                    sum += self[(i, k)] * other[(k, j)];
                }
                c[(i, j)] = sum;
            }
        }
        Ok(c)
    }

    /// Apply a 4×4 transform to a column tuple. `w` passes through its own
    /// row, so translations move points and leave vectors alone.
    pub fn mul_tuple(&self, t: Tuple) -> Result<Tuple> {
        if self.width != 4 || self.height != 4 {
            return Err(MatrixError::DimensionMismatch {
                lhs_height: self.height,
                lhs_width: self.width,
                rhs_height: 4,
                rhs_width: 1,
            });
        }
        let v = t.to_array();
        let mut out = [0.0f64; 4];
        for (r, row) in self.rows().enumerate() {
            out[r] = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
        }
        Ok(Tuple::from_array(out))
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::new(self.height, self.width);
        for i in 0..self.height {
            for j in 0..self.width {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }
}

/// Fail-fast product. Panics when the shapes do not line up; use
/// [`Matrix::multiply`] to get the error instead.
impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Self) -> Matrix {
        match self.multiply(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Fail-fast transform of a tuple. Panics unless the matrix is 4×4.
impl Mul<Tuple> for &Matrix {
    type Output = Tuple;
    fn mul(self, rhs: Tuple) -> Tuple {
        match self.mul_tuple(rhs) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }
}

// ─── Determinant and inverse ──────────────────────────────────────────────────

impl Matrix {
    /// Copy with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(row < self.height && col < self.width,
            "submatrix ({row}, {col}) out of range for {}x{} matrix", self.height, self.width);
        let mut out = Self::new(self.width - 1, self.height - 1);
        let mut idx = 0;
        for r in (0..self.height).filter(|&r| r != row) {
            for c in (0..self.width).filter(|&c| c != col) {
                out.data[idx] = self[(r, c)];
                idx += 1;
            }
        }
        out
    }

    /// Cofactor expansion along the first row, with closed forms at 1×1
    /// and 2×2. Panics on a non-square matrix.
    pub fn determinant(&self) -> f64 {
        assert!(self.is_square(),
            "determinant of non-square {}x{} matrix", self.height, self.width);
        match self.width {
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n).map(|c| self[(0, c)] * self.cofactor(0, c)).sum(),
        }
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    /// Minor with the checkerboard sign: negated when `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { -minor } else { minor }
    }

    pub fn is_invertible(&self, epsilon: f64) -> bool {
        self.is_square() && !approx_eq(self.determinant(), 0.0, epsilon)
    }

    /// Adjugate over determinant. Fails with [`MatrixError::Singular`] when
    /// the determinant is within `epsilon` of zero.
    pub fn inverse(&self, epsilon: f64) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { height: self.height, width: self.width });
        }
        let det = self.determinant();
        if approx_eq(det, 0.0, epsilon) {
            debug!("refusing to invert {}x{} matrix, determinant {det}", self.height, self.width);
            return Err(MatrixError::Singular { determinant: det });
        }
        let n = self.width;
        let mut inv = Self::new(n, n);
        for r in 0..n {
            for c in 0..n {
                // Writing at (c, r) transposes the cofactor matrix into the adjugate.
                inv[(c, r)] = self.cofactor(r, c) / det;
            }
        }
        Ok(inv)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for v in row {
                write!(f, " {v:>10.5} |")?;
            }
        }
        Ok(())
    }
}
