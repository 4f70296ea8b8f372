//! Activation functions.
//!
//! The hidden layer uses ReLU; the output layer uses a per-column softmax so
//! each example's scores become a probability distribution over classes.
//!
//! ReLU's derivative is taken as 0 at the kink (`x == 0`), the usual
//! convention for the backprop gate.

use crate::Matrix;

/// Element-wise `max(x, 0)`.
pub fn relu(x: &Matrix) -> Matrix {
    x.map(|v| v.max(0.0))
}

/// Element-wise ReLU derivative: 1 where `x > 0`, else 0.
pub fn relu_derivative(x: &Matrix) -> Matrix {
    x.map(|v| if v > 0.0 { 1.0 } else { 0.0 })
}

/// Per-column softmax.
///
/// Each column is treated as one example's score vector: the column max is
/// subtracted before exponentiating (so large scores cannot overflow), then
/// the column is divided by its sum. Every output column sums to 1.
///
/// A column made entirely of `-inf` produces NaN; this is surfaced as-is.
pub fn softmax(x: &Matrix) -> Matrix {
    let mut out = x.clone();
    for c in 0..x.cols() {
        let mut max = f32::NEG_INFINITY;
        for r in 0..x.rows() {
            max = max.max(x.get(r, c));
        }

        let mut sum = 0.0_f32;
        for r in 0..x.rows() {
            let e = (x.get(r, c) - max).exp();
            out.set(r, c, e);
            sum += e;
        }

        let inv_sum = 1.0 / sum;
        for r in 0..x.rows() {
            out.set(r, c, out.get(r, c) * inv_sum);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn relu_clamps_negatives() {
        let x = Matrix::from_vec(2, 2, vec![-2.0, 0.0, 3.0, -0.5]).unwrap();
        let y = relu(&x);
        assert_eq!(y.data(), &[0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn relu_derivative_gates_on_strictly_positive() {
        let x = Matrix::from_vec(1, 3, vec![-1.0, 0.0, 2.0]).unwrap();
        let g = relu_derivative(&x);
        assert_eq!(g.data(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn softmax_columns_sum_to_one_with_entries_in_unit_interval() {
        let x = Matrix::from_vec(3, 2, vec![1.0, -3.0, 2.0, 0.5, -1.0, 4.0]).unwrap();
        let y = softmax(&x);
        for c in 0..y.cols() {
            let mut sum = 0.0;
            for r in 0..y.rows() {
                let v = y.get(r, c);
                assert!((0.0..=1.0).contains(&v));
                sum += v;
            }
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn softmax_of_equal_scores_is_uniform() {
        let x = Matrix::zeros(4, 2);
        let y = softmax(&x);
        for c in 0..y.cols() {
            for r in 0..y.rows() {
                assert!((y.get(r, c) - 0.25).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn softmax_is_stable_for_large_scores() {
        let x = Matrix::from_vec(2, 1, vec![1000.0, 999.0]).unwrap();
        let y = softmax(&x);
        assert!(y.data().iter().all(|v| v.is_finite()));
        assert!(y.get(0, 0) > y.get(1, 0));
    }
}
