//! Dense row-major matrices.
//!
//! Every batch in this crate is a `Matrix` with one column per example, so the
//! operations here are exactly the primitives the forward/backward passes
//! need: matrix products (including transposed operands), a column-broadcast
//! add for biases, per-row sums for bias gradients, and a per-column argmax
//! for predictions.
//!
//! Shapes are validated at the API boundary; incompatible operands return
//! [`Error::ShapeMismatch`] instead of panicking.

use crate::matmul::gemm_f32;
use crate::{Error, Result};

/// A dense `(rows, cols)` matrix of `f32`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// A matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch(format!(
                "buffer length {} does not match rows * cols ({rows} * {cols})",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Copy of column `col` (one example's feature vector).
    ///
    /// Panics if `col >= cols`.
    pub fn column(&self, col: usize) -> Vec<f32> {
        assert!(col < self.cols, "column {col} out of range ({})", self.cols);
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// `self * rhs`.
    ///
    /// Shapes: `(m, k) * (k, n) -> (m, n)`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch(format!(
                "cannot multiply ({}, {}) by ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let (m, n, k) = (self.rows, rhs.cols, self.cols);
        let mut out = Matrix::zeros(m, n);
        if m > 0 && n > 0 && k > 0 {
            gemm_f32(
                m, n, k, 1.0, &self.data, k, 1, &rhs.data, n, 1, 0.0, &mut out.data, n, 1,
            );
        }
        Ok(out)
    }

    /// `self * rhs^T`.
    ///
    /// Shapes: `(m, k) * (n, k)^T -> (m, n)`. The transpose is a stride swap;
    /// `rhs` is never materialized transposed.
    pub fn matmul_transpose_rhs(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.cols {
            return Err(Error::ShapeMismatch(format!(
                "cannot multiply ({}, {}) by ({}, {})^T",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let (m, n, k) = (self.rows, rhs.rows, self.cols);
        let mut out = Matrix::zeros(m, n);
        if m > 0 && n > 0 && k > 0 {
            gemm_f32(
                m, n, k, 1.0, &self.data, k, 1, &rhs.data, 1, k, 0.0, &mut out.data, n, 1,
            );
        }
        Ok(out)
    }

    /// `self^T * rhs`.
    ///
    /// Shapes: `(k, m)^T * (k, n) -> (m, n)`.
    pub fn matmul_transpose_lhs(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows {
            return Err(Error::ShapeMismatch(format!(
                "cannot multiply ({}, {})^T by ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let (m, n, k) = (self.cols, rhs.cols, self.rows);
        let mut out = Matrix::zeros(m, n);
        if m > 0 && n > 0 && k > 0 {
            gemm_f32(
                m,
                n,
                k,
                1.0,
                &self.data,
                1,
                self.cols,
                &rhs.data,
                n,
                1,
                0.0,
                &mut out.data,
                n,
                1,
            );
        }
        Ok(out)
    }

    /// Add a `(rows, 1)` column vector to every column of `self`.
    ///
    /// This is the explicit form of the bias broadcast across the examples
    /// axis.
    pub fn add_col_broadcast(&mut self, bias: &Matrix) -> Result<()> {
        if bias.rows != self.rows || bias.cols != 1 {
            return Err(Error::ShapeMismatch(format!(
                "cannot broadcast-add ({}, {}) to ({}, {})",
                bias.rows, bias.cols, self.rows, self.cols
            )));
        }

        for r in 0..self.rows {
            let b = bias.data[r];
            let start = r * self.cols;
            for v in &mut self.data[start..start + self.cols] {
                *v += b;
            }
        }
        Ok(())
    }

    /// Sum across the examples axis: a `(rows, 1)` column vector of per-row
    /// sums.
    pub fn row_sums(&self) -> Matrix {
        let mut out = Matrix::zeros(self.rows, 1);
        for r in 0..self.rows {
            let start = r * self.cols;
            let mut sum = 0.0_f32;
            for &v in &self.data[start..start + self.cols] {
                sum += v;
            }
            out.data[r] = sum;
        }
        out
    }

    /// Apply `f` to every entry, producing a new matrix.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Element-wise multiply by `other`, in place.
    pub fn hadamard_in_place(&mut self, other: &Matrix) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::ShapeMismatch(format!(
                "cannot element-wise multiply ({}, {}) by ({}, {})",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        for (v, &o) in self.data.iter_mut().zip(&other.data) {
            *v *= o;
        }
        Ok(())
    }

    /// Multiply every entry by `scale`, in place.
    pub fn scale_in_place(&mut self, scale: f32) {
        for v in &mut self.data {
            *v *= scale;
        }
    }

    /// `self -= alpha * other`, in place.
    pub fn scaled_sub_in_place(&mut self, other: &Matrix, alpha: f32) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::ShapeMismatch(format!(
                "cannot subtract ({}, {}) from ({}, {})",
                other.rows, other.cols, self.rows, self.cols
            )));
        }
        for (v, &o) in self.data.iter_mut().zip(&other.data) {
            *v -= alpha * o;
        }
        Ok(())
    }

    /// Index of the maximum entry in each column (first index on ties).
    ///
    /// For a matrix of per-class scores this is the predicted class of each
    /// example.
    pub fn argmax_columns(&self) -> Vec<usize> {
        let mut out = vec![0_usize; self.cols];
        for (c, slot) in out.iter_mut().enumerate() {
            let mut best = f32::NEG_INFINITY;
            for r in 0..self.rows {
                let v = self.get(r, c);
                if v > best {
                    best = v;
                    *slot = r;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_validates_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn matmul_small_case() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.data(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn matmul_rejects_incompatible_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn transposed_products_match_explicit_transpose() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(4, 3, (0..12).map(|v| v as f32).collect()).unwrap();

        // a * b^T against a naive reference.
        let c = a.matmul_transpose_rhs(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 4);
        for i in 0..2 {
            for j in 0..4 {
                let mut expected = 0.0;
                for p in 0..3 {
                    expected += a.get(i, p) * b.get(j, p);
                }
                assert!((c.get(i, j) - expected).abs() < 1e-6);
            }
        }

        // a^T * d where d has a's row count.
        let d = Matrix::from_vec(2, 4, (0..8).map(|v| v as f32).collect()).unwrap();
        let e = a.matmul_transpose_lhs(&d).unwrap();
        assert_eq!(e.rows(), 3);
        assert_eq!(e.cols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                let mut expected = 0.0;
                for p in 0..2 {
                    expected += a.get(p, i) * d.get(p, j);
                }
                assert!((e.get(i, j) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn add_col_broadcast_adds_bias_to_every_column() {
        let mut m = Matrix::zeros(2, 3);
        let bias = Matrix::from_vec(2, 1, vec![1.0, -2.0]).unwrap();
        m.add_col_broadcast(&bias).unwrap();
        assert_eq!(m.data(), &[1.0, 1.0, 1.0, -2.0, -2.0, -2.0]);

        let wrong = Matrix::zeros(3, 1);
        assert!(m.add_col_broadcast(&wrong).is_err());
    }

    #[test]
    fn row_sums_sum_across_examples() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, -1.0, 0.0, 1.0]).unwrap();
        let sums = m.row_sums();
        assert_eq!(sums.rows(), 2);
        assert_eq!(sums.cols(), 1);
        assert_eq!(sums.data(), &[6.0, 0.0]);
    }

    #[test]
    fn scaled_sub_subtracts_scaled_entries() {
        let mut m = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
        let g = Matrix::from_vec(1, 2, vec![10.0, 20.0]).unwrap();
        m.scaled_sub_in_place(&g, 0.1).unwrap();
        assert!((m.get(0, 0) - 0.0).abs() < 1e-6);
        assert!((m.get(0, 1) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn argmax_columns_picks_max_per_column() {
        let m = Matrix::from_vec(3, 2, vec![0.1, 0.9, 0.7, 0.05, 0.2, 0.05]).unwrap();
        assert_eq!(m.argmax_columns(), vec![1, 0]);
    }

    #[test]
    fn argmax_of_empty_batch_is_empty() {
        let m = Matrix::zeros(3, 0);
        assert!(m.argmax_columns().is_empty());
    }
}
