//! The parameter store: two weight matrices and two bias vectors.
//!
//! The topology is fixed by design: one hidden layer of [`HIDDEN_SIZE`] ReLU
//! units feeding an output layer of [`OUTPUT_SIZE`] softmax units. Only the
//! input dimension varies (784 for 28x28 images).
//!
//! Initialization draws every entry i.i.d. uniform over [-0.5, 0.5). Use
//! [`Params::init_with_seed`] for reproducible runs; tests inject a seed and
//! assert shape/range invariants rather than exact values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Matrix, Result};

/// Number of hidden-layer units.
pub const HIDDEN_SIZE: usize = 10;

/// Number of output classes.
pub const OUTPUT_SIZE: usize = 10;

/// Weights and biases of the two-layer network.
///
/// Shapes:
/// - `w1`: `(HIDDEN_SIZE, input_size)`
/// - `b1`: `(HIDDEN_SIZE, 1)`
/// - `w2`: `(OUTPUT_SIZE, HIDDEN_SIZE)`
/// - `b2`: `(OUTPUT_SIZE, 1)`
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub(crate) w1: Matrix,
    pub(crate) b1: Matrix,
    pub(crate) w2: Matrix,
    pub(crate) b2: Matrix,
}

impl Params {
    /// Random initialization with a deterministic seed.
    pub fn init_with_seed(input_size: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::init_with_rng(input_size, &mut rng)
    }

    /// Random initialization using the provided RNG.
    pub fn init_with_rng<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Result<Self> {
        if input_size == 0 {
            return Err(Error::InvalidConfig("input_size must be > 0".to_owned()));
        }

        let mut uniform = |rows: usize, cols: usize| {
            Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-0.5..0.5))
        };

        let w1 = uniform(HIDDEN_SIZE, input_size);
        let b1 = uniform(HIDDEN_SIZE, 1);
        let w2 = uniform(OUTPUT_SIZE, HIDDEN_SIZE);
        let b2 = uniform(OUTPUT_SIZE, 1);

        Ok(Self { w1, b1, w2, b2 })
    }

    /// Rebuild a parameter store from its four matrices, validating the fixed
    /// topology. Used by deserialization.
    pub fn from_parts(w1: Matrix, b1: Matrix, w2: Matrix, b2: Matrix) -> Result<Self> {
        if w1.rows() != HIDDEN_SIZE || w1.cols() == 0 {
            return Err(Error::ShapeMismatch(format!(
                "w1 must be ({HIDDEN_SIZE}, input_size > 0), got ({}, {})",
                w1.rows(),
                w1.cols()
            )));
        }
        if b1.rows() != HIDDEN_SIZE || b1.cols() != 1 {
            return Err(Error::ShapeMismatch(format!(
                "b1 must be ({HIDDEN_SIZE}, 1), got ({}, {})",
                b1.rows(),
                b1.cols()
            )));
        }
        if w2.rows() != OUTPUT_SIZE || w2.cols() != HIDDEN_SIZE {
            return Err(Error::ShapeMismatch(format!(
                "w2 must be ({OUTPUT_SIZE}, {HIDDEN_SIZE}), got ({}, {})",
                w2.rows(),
                w2.cols()
            )));
        }
        if b2.rows() != OUTPUT_SIZE || b2.cols() != 1 {
            return Err(Error::ShapeMismatch(format!(
                "b2 must be ({OUTPUT_SIZE}, 1), got ({}, {})",
                b2.rows(),
                b2.cols()
            )));
        }

        Ok(Self { w1, b1, w2, b2 })
    }

    /// The input dimension this store was initialized for.
    #[inline]
    pub fn input_size(&self) -> usize {
        self.w1.cols()
    }

    #[inline]
    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    #[inline]
    pub fn b1(&self) -> &Matrix {
        &self.b1
    }

    #[inline]
    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    #[inline]
    pub fn b2(&self) -> &Matrix {
        &self.b2
    }
}
