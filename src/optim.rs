//! The update rule: fixed-learning-rate gradient descent.
//!
//! There is deliberately no schedule, momentum, or per-parameter adaptation;
//! every step is `param -= alpha * grad`, in place, for all four parameters.

use crate::{Error, Gradients, Params, Result};

/// Gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    alpha: f32,
}

/// Default learning rate.
pub const DEFAULT_ALPHA: f32 = 0.15;

impl GradientDescent {
    /// Construct the update rule.
    ///
    /// `alpha` must be finite and non-negative. Zero is allowed: a zero step
    /// is a defined no-op.
    pub fn new(alpha: f32) -> Result<Self> {
        if !(alpha.is_finite() && alpha >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and >= 0, got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Apply one descent step to all parameters, in place.
    pub fn step(&self, params: &mut Params, grads: &Gradients) -> Result<()> {
        params.w1.scaled_sub_in_place(&grads.dw1, self.alpha)?;
        params.b1.scaled_sub_in_place(&grads.db1, self.alpha)?;
        params.w2.scaled_sub_in_place(&grads.dw2, self.alpha)?;
        params.b2.scaled_sub_in_place(&grads.db2, self.alpha)?;
        Ok(())
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}
