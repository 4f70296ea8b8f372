//! Backward propagation: gradients of the training loss with respect to every
//! parameter, averaged over the batch.
//!
//! The output-layer term is `dz2 = 2 * (a2 - one_hot_y)`, a squared-error
//! convention. This is deliberately NOT the canonical softmax+cross-entropy
//! gradient (`a2 - one_hot_y`); do not "fix" it, the trained behavior
//! depends on it.

use crate::activation::relu_derivative;
use crate::forward::ForwardPass;
use crate::{Error, Matrix, Params, Result};

/// Parameter gradients, shaped exactly like their parameters.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}

/// Compute gradients for one full-batch step.
///
/// `x` is the `(features, m)` input batch, `one_hot_y` the `(num_classes, m)`
/// target matrix, and `fwd` the forward pass computed from `x` with `params`.
///
/// Chain rule through both layers:
/// - `dz2 = 2 * (a2 - one_hot_y)`
/// - `dw2 = (1/m) * dz2 * a1^T`, `db2 = (1/m) * row_sums(dz2)`
/// - `dz1 = (w2^T * dz2) .* relu'(z1)`
/// - `dw1 = (1/m) * dz1 * x^T`, `db1 = (1/m) * row_sums(dz1)`
///
/// An empty batch (`m == 0`) is a [`Error::DegenerateBatch`] configuration
/// error, not a silent NaN.
pub fn backward(
    x: &Matrix,
    one_hot_y: &Matrix,
    fwd: &ForwardPass,
    params: &Params,
) -> Result<Gradients> {
    let m = x.cols();
    if m == 0 {
        return Err(Error::DegenerateBatch(
            "cannot backpropagate over zero examples".to_owned(),
        ));
    }

    if one_hot_y.rows() != fwd.a2.rows() || one_hot_y.cols() != m {
        return Err(Error::ShapeMismatch(format!(
            "one-hot targets are ({}, {}), expected ({}, {m})",
            one_hot_y.rows(),
            one_hot_y.cols(),
            fwd.a2.rows()
        )));
    }
    if fwd.a1.cols() != m || fwd.a2.cols() != m || fwd.z1.cols() != m {
        return Err(Error::ShapeMismatch(format!(
            "forward pass covers {} examples, batch has {m}",
            fwd.a2.cols()
        )));
    }
    if x.rows() != params.w1.cols() {
        return Err(Error::ShapeMismatch(format!(
            "batch has {} features, parameters expect {}",
            x.rows(),
            params.w1.cols()
        )));
    }

    let inv_m = 1.0 / m as f32;

    // dz2 = 2 * (a2 - one_hot_y)
    let mut dz2 = fwd.a2.clone();
    dz2.scaled_sub_in_place(one_hot_y, 1.0)?;
    dz2.scale_in_place(2.0);

    let mut dw2 = dz2.matmul_transpose_rhs(&fwd.a1)?;
    dw2.scale_in_place(inv_m);

    let mut db2 = dz2.row_sums();
    db2.scale_in_place(inv_m);

    // dz1 = (w2^T * dz2) gated by the hidden ReLU.
    let mut dz1 = params.w2.matmul_transpose_lhs(&dz2)?;
    dz1.hadamard_in_place(&relu_derivative(&fwd.z1))?;

    let mut dw1 = dz1.matmul_transpose_rhs(x)?;
    dw1.scale_in_place(inv_m);

    let mut db1 = dz1.row_sums();
    db1.scale_in_place(inv_m);

    Ok(Gradients { dw1, db1, dw2, db2 })
}
