//! The training loop: repeated forward, backward, update cycles over the full
//! batch, with periodic accuracy reporting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backward::backward;
use crate::encode::one_hot;
use crate::optim::{GradientDescent, DEFAULT_ALPHA};
use crate::params::OUTPUT_SIZE;
use crate::predict::accuracy;
use crate::{Error, Matrix, Params, Result};

/// Training configuration.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Fixed learning rate. Must be finite and >= 0.
    pub alpha: f32,
    /// Number of full-batch steps. Zero is allowed and returns the freshly
    /// initialized parameters untouched.
    pub iterations: usize,
    /// Steps between accuracy reports. `None` derives `iterations / 10`,
    /// clamped to at least 1 so short runs still report. `Some(0)` is
    /// rejected.
    pub report_every: Option<usize>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            iterations: 200,
            report_every: None,
        }
    }
}

/// Train a fresh parameter store on a labeled batch, seeding initialization
/// deterministically.
pub fn train_with_seed(
    x: &Matrix,
    labels: &[usize],
    cfg: &FitConfig,
    seed: u64,
) -> Result<Params> {
    let mut rng = StdRng::seed_from_u64(seed);
    train_with_rng(x, labels, cfg, &mut rng)
}

/// Train a fresh parameter store on a labeled batch.
///
/// `x` is `(features, examples)` with values in [0, 1]; `labels` holds one
/// class per column. The loop owns the parameters exclusively for its whole
/// duration and hands them back when the fixed iteration count is done.
/// There is no convergence check, early stopping, or gradient clipping.
pub fn train_with_rng<R: Rng + ?Sized>(
    x: &Matrix,
    labels: &[usize],
    cfg: &FitConfig,
    rng: &mut R,
) -> Result<Params> {
    if labels.len() != x.cols() {
        return Err(Error::ShapeMismatch(format!(
            "{} labels for {} examples",
            labels.len(),
            x.cols()
        )));
    }
    if x.cols() == 0 {
        return Err(Error::DegenerateBatch(
            "cannot train on zero examples".to_owned(),
        ));
    }
    if cfg.report_every == Some(0) {
        return Err(Error::InvalidConfig(
            "report_every must be > 0 when set".to_owned(),
        ));
    }

    let opt = GradientDescent::new(cfg.alpha)?;
    let one_hot_y = one_hot(labels, OUTPUT_SIZE)?;
    let mut params = Params::init_with_rng(x.rows(), rng)?;

    // Integer truncation of iterations / 10 must never yield interval 0, or
    // short runs would divide by zero at the cadence check.
    let report_every = cfg
        .report_every
        .unwrap_or_else(|| (cfg.iterations / 10).max(1));

    for step in 0..cfg.iterations {
        let fwd = params.forward(x)?;
        let grads = backward(x, &one_hot_y, &fwd, &params)?;
        opt.step(&mut params, &grads)?;

        if (step + 1) % report_every == 0 {
            // Accuracy of the pass the step was computed from.
            let predicted = fwd.a2.argmax_columns();
            let acc = accuracy(&predicted, labels)?;
            log::info!(
                "iteration {}/{}: training accuracy {:.3}",
                step + 1,
                cfg.iterations,
                acc
            );
        }
    }

    Ok(params)
}
