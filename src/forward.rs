//! Forward propagation.

use crate::activation::{relu, softmax};
use crate::{Error, Matrix, Params, Result};

/// All intermediate matrices of one forward pass.
///
/// Each matrix has one column per example. `a2` is the per-class probability
/// distribution consumed by prediction and by the backward pass; `z1` is kept
/// because the backward pass gates through the hidden ReLU.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// Hidden-layer pre-activations, `w1 * x + b1`.
    pub z1: Matrix,
    /// Hidden-layer activations, `relu(z1)`.
    pub a1: Matrix,
    /// Output-layer pre-activations, `w2 * a1 + b2`.
    pub z2: Matrix,
    /// Output probabilities, `softmax(z2)` per column.
    pub a2: Matrix,
}

impl Params {
    /// Run forward propagation on a `(features, examples)` batch.
    ///
    /// Pure: neither `self` nor `x` is modified. Fails with
    /// [`Error::ShapeMismatch`] if the batch's feature count does not match
    /// this store's input size.
    pub fn forward(&self, x: &Matrix) -> Result<ForwardPass> {
        if x.rows() != self.input_size() {
            return Err(Error::ShapeMismatch(format!(
                "batch has {} features, parameters expect {}",
                x.rows(),
                self.input_size()
            )));
        }

        let mut z1 = self.w1.matmul(x)?;
        z1.add_col_broadcast(&self.b1)?;
        let a1 = relu(&z1);

        let mut z2 = self.w2.matmul(&a1)?;
        z2.add_col_broadcast(&self.b2)?;
        let a2 = softmax(&z2);

        Ok(ForwardPass { z1, a1, z2, a2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OUTPUT_SIZE;

    #[test]
    fn forward_shapes_follow_the_batch() {
        let params = Params::init_with_seed(6, 0).unwrap();
        let x = Matrix::zeros(6, 5);
        let fwd = params.forward(&x).unwrap();

        for m in [&fwd.z1, &fwd.a1] {
            assert_eq!(m.rows(), crate::params::HIDDEN_SIZE);
            assert_eq!(m.cols(), 5);
        }
        for m in [&fwd.z2, &fwd.a2] {
            assert_eq!(m.rows(), OUTPUT_SIZE);
            assert_eq!(m.cols(), 5);
        }
    }

    #[test]
    fn forward_rejects_feature_count_mismatch() {
        let params = Params::init_with_seed(6, 0).unwrap();
        let x = Matrix::zeros(7, 3);
        let err = params.forward(&x).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn probabilities_sum_to_one_per_example() {
        let params = Params::init_with_seed(4, 3).unwrap();
        let x = Matrix::from_fn(4, 7, |r, c| ((r * 7 + c) as f32) / 28.0);
        let fwd = params.forward(&x).unwrap();

        for c in 0..fwd.a2.cols() {
            let mut sum = 0.0;
            for r in 0..fwd.a2.rows() {
                let v = fwd.a2.get(r, c);
                assert!((0.0..=1.0).contains(&v));
                sum += v;
            }
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_input_with_zero_biases_gives_uniform_probabilities() {
        // With x = 0, z2 collapses to the biases; zero biases mean equal
        // scores, and softmax of equal scores is uniform (1 / num_classes).
        let params = Params::from_parts(
            Matrix::from_fn(crate::params::HIDDEN_SIZE, 4, |r, c| {
                0.1 * ((r + c) as f32) - 0.3
            }),
            Matrix::zeros(crate::params::HIDDEN_SIZE, 1),
            Matrix::zeros(OUTPUT_SIZE, crate::params::HIDDEN_SIZE),
            Matrix::zeros(OUTPUT_SIZE, 1),
        )
        .unwrap();

        let x = Matrix::zeros(4, 5);
        let fwd = params.forward(&x).unwrap();
        let uniform = 1.0 / OUTPUT_SIZE as f32;
        for c in 0..fwd.a2.cols() {
            for r in 0..fwd.a2.rows() {
                assert!((fwd.a2.get(r, c) - uniform).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn zero_input_columns_are_indistinguishable() {
        // With x = 0 every example produces the same scores, whatever the
        // parameters are, so all probability columns must match.
        let params = Params::init_with_seed(4, 8).unwrap();
        let x = Matrix::zeros(4, 5);
        let fwd = params.forward(&x).unwrap();

        for c in 1..fwd.a2.cols() {
            for r in 0..fwd.a2.rows() {
                assert!((fwd.a2.get(r, c) - fwd.a2.get(r, 0)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn forward_is_pure() {
        let params = Params::init_with_seed(3, 9).unwrap();
        let x = Matrix::from_fn(3, 2, |r, c| (r + c) as f32 * 0.25);

        let before = params.clone();
        let a = params.forward(&x).unwrap();
        let b = params.forward(&x).unwrap();
        assert_eq!(params, before);
        assert_eq!(a.a2, b.a2);
    }
}
