//! Inference and evaluation helpers.

use crate::{Error, Matrix, Params, Result};

impl Params {
    /// Predict a class label for every column of `x`.
    ///
    /// Runs forward propagation only and takes the per-column argmax of the
    /// output probabilities. Holds no hidden state: identical inputs and
    /// parameters always yield identical predictions.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<usize>> {
        let fwd = self.forward(x)?;
        Ok(fwd.a2.argmax_columns())
    }
}

/// Fraction of predictions that match the true labels.
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> Result<f32> {
    if predicted.len() != actual.len() {
        return Err(Error::ShapeMismatch(format!(
            "{} predictions for {} labels",
            predicted.len(),
            actual.len()
        )));
    }
    if predicted.is_empty() {
        return Err(Error::DegenerateBatch(
            "cannot compute accuracy over zero examples".to_owned(),
        ));
    }

    let correct = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(correct as f32 / predicted.len() as f32)
}

/// One example's data, prepared for an external renderer: its pixel column,
/// the model's prediction, and the true label.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamplePrediction {
    pub pixels: Vec<f32>,
    pub predicted: usize,
    pub label: usize,
}

/// Look up example `index` in the batch, predict it, and bundle the data a
/// visualization layer needs. Rendering itself is out of scope here.
pub fn example_prediction(
    x: &Matrix,
    labels: &[usize],
    index: usize,
    params: &Params,
) -> Result<ExamplePrediction> {
    if labels.len() != x.cols() {
        return Err(Error::ShapeMismatch(format!(
            "{} labels for {} examples",
            labels.len(),
            x.cols()
        )));
    }
    if index >= x.cols() {
        return Err(Error::InvalidData(format!(
            "example index {index} out of range for batch of {}",
            x.cols()
        )));
    }

    let pixels = x.column(index);
    let single = Matrix::from_vec(x.rows(), 1, pixels.clone())?;
    let predicted = params.predict(&single)?[0];

    Ok(ExamplePrediction {
        pixels,
        predicted,
        label: labels[index],
    })
}
