//! One-hot label encoding.

use crate::{Error, Matrix, Result};

/// Encode integer class labels as a `(num_classes, m)` one-hot matrix.
///
/// Column `i` has a single 1 at row `labels[i]`. A label outside
/// `[0, num_classes)` is an error; labels are never silently truncated to
/// fit.
pub fn one_hot(labels: &[usize], num_classes: usize) -> Result<Matrix> {
    if num_classes == 0 {
        return Err(Error::InvalidConfig("num_classes must be > 0".to_owned()));
    }

    let mut out = Matrix::zeros(num_classes, labels.len());
    for (i, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(Error::ClassOutOfRange(format!(
                "label {label} at index {i} does not fit in {num_classes} classes"
            )));
        }
        out.set(label, i, 1.0);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_places_single_one_per_column() {
        let y = one_hot(&[0, 1, 2], 3).unwrap();
        assert_eq!(y.rows(), 3);
        assert_eq!(y.cols(), 3);
        // Identity matrix.
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(y.get(r, c), expected);
            }
        }
    }

    #[test]
    fn one_hot_argmax_round_trips_labels() {
        let labels = [3_usize, 0, 9, 9, 5, 1];
        let y = one_hot(&labels, 10).unwrap();
        assert_eq!(y.argmax_columns(), labels.to_vec());
    }

    #[test]
    fn one_hot_rejects_out_of_range_labels() {
        let err = one_hot(&[0, 3], 3).unwrap_err();
        assert!(matches!(err, Error::ClassOutOfRange(_)));
    }

    #[test]
    fn one_hot_rejects_zero_classes() {
        assert!(one_hot(&[], 0).is_err());
    }

    #[test]
    fn one_hot_of_empty_labels_is_an_empty_batch() {
        let y = one_hot(&[], 4).unwrap();
        assert_eq!(y.rows(), 4);
        assert_eq!(y.cols(), 0);
    }
}
