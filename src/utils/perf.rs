// src/utils/perf.rs

use crate::core::{InterpretError, Result};
use crate::unify::unify_vector;
use ndarray::{ArrayBase, ArrayView1, Data, Dimension, Ix2};
use serde::{Deserialize, Serialize};

/// Actual and predicted outcome for one sample.
///
/// In regression mode scores and labels share a scale, so `actual_score` is
/// the label itself and `predicted_score` the prediction. In classification
/// mode both scores are class probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub actual: f64,
    pub predicted: f64,
    pub actual_score: f64,
    pub predicted_score: f64,
}

/// Builds one [`PerformanceRecord`] per sample, in input order.
///
/// Regression expects one score per sample (trailing singleton dimensions are
/// accepted). Classification expects an `n x k` matrix of class
/// probabilities and integer class labels in `0..k`.
pub fn gen_perf_dicts<S, D, T, E>(
    scores: &ArrayBase<S, D>,
    y: &ArrayBase<T, E>,
    is_classification: bool,
) -> Result<Vec<PerformanceRecord>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    let y = unify_vector(y)?;
    let n_samples = scores.shape().first().copied().unwrap_or(0);
    if n_samples != y.len() {
        return Err(InterpretError::length_mismatch("score rows", y.len(), n_samples));
    }

    if !is_classification {
        let scores = unify_vector(scores)?;
        return Ok(scores
            .iter()
            .zip(y.iter())
            .map(|(&score, &actual)| PerformanceRecord {
                actual,
                predicted: score,
                actual_score: actual,
                predicted_score: score,
            })
            .collect());
    }

    if scores.ndim() != 2 {
        return Err(InterpretError::Shape(format!(
            "classification scores must be 2-D (samples x classes), got shape {:?}",
            scores.shape()
        )));
    }
    let scores = scores.view().into_dimensionality::<Ix2>()?;
    let n_classes = scores.ncols();

    scores
        .rows()
        .into_iter()
        .zip(y.iter())
        .enumerate()
        .map(|(row, (probs, &actual))| {
            let (predicted, predicted_score) = argmax(probs).ok_or_else(|| {
                InterpretError::Shape("classification scores have no class columns".to_string())
            })?;
            let class = class_index(actual, n_classes).ok_or(InterpretError::InvalidLabel {
                row,
                label: actual,
                n_classes,
            })?;
            Ok(PerformanceRecord {
                actual,
                predicted: predicted as f64,
                actual_score: probs[class],
                predicted_score,
            })
        })
        .collect()
}

/// Index and value of the largest entry; the first one wins ties.
fn argmax(row: ArrayView1<f64>) -> Option<(usize, f64)> {
    row.iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if v <= b || v.is_nan() => best,
            _ => Some((i, v)),
        })
}

fn class_index(label: f64, n_classes: usize) -> Option<usize> {
    if label >= 0.0 && label.fract() == 0.0 && (label as usize) < n_classes {
        Some(label as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_gen_perf_dicts_regression() -> Result<()> {
        let y = array![0.0, 0.5];
        let scores = array![0.9, 0.1];
        let expected_predicted = [0.9, 0.1];
        let expected_actual_score = [0.0, 0.5];
        let expected_predicted_score = [0.9, 0.1];

        let records = gen_perf_dicts(&scores, &y, false)?;
        assert_eq!(records.len(), 2);
        for (i, di) in records.iter().enumerate() {
            assert_abs_diff_eq!(di.actual, y[i]);
            assert_abs_diff_eq!(di.predicted, expected_predicted[i]);
            assert_abs_diff_eq!(di.actual_score, expected_actual_score[i]);
            assert_abs_diff_eq!(di.predicted_score, expected_predicted_score[i]);
        }
        Ok(())
    }

    #[test]
    fn test_gen_perf_dicts_classification() -> Result<()> {
        let y = array![0.0, 2.0];
        let scores = array![[0.9, 0.06, 0.04], [0.1, 0.5, 0.4]];
        let expected_predicted = [0.0, 1.0];
        let expected_actual_score = [0.9, 0.4];
        let expected_predicted_score = [0.9, 0.5];

        let records = gen_perf_dicts(&scores, &y, true)?;
        assert_eq!(records.len(), 2);
        for (i, di) in records.iter().enumerate() {
            assert_abs_diff_eq!(di.actual, y[i]);
            assert_abs_diff_eq!(di.predicted, expected_predicted[i]);
            assert_abs_diff_eq!(di.actual_score, expected_actual_score[i]);
            assert_abs_diff_eq!(di.predicted_score, expected_predicted_score[i]);
        }
        Ok(())
    }

    #[test]
    fn test_argmax_first_maximum_wins() {
        let row = array![0.2, 0.4, 0.4];
        assert_eq!(argmax(row.view()), Some((1, 0.4)));
        assert_eq!(argmax(ndarray::Array1::<f64>::zeros(0).view()), None);
    }

    #[test]
    fn test_regression_accepts_column_scores() -> Result<()> {
        let records = gen_perf_dicts(&array![[1.5], [2.5]], &array![1.0, 3.0], false)?;
        assert_abs_diff_eq!(records[1].predicted, 2.5);
        assert_abs_diff_eq!(records[1].actual_score, 3.0);
        Ok(())
    }

    #[test]
    fn test_classification_rejects_bad_labels() {
        let scores = array![[0.7, 0.3], [0.4, 0.6]];
        for bad in [2.0, -1.0, 0.5] {
            let res = gen_perf_dicts(&scores, &array![0.0, bad], true);
            assert!(matches!(
                res,
                Err(InterpretError::InvalidLabel { row: 1, n_classes: 2, .. })
            ));
        }
    }

    #[test]
    fn test_shape_and_length_errors() {
        assert!(matches!(
            gen_perf_dicts(&array![0.1, 0.9], &array![0.0, 1.0], true),
            Err(InterpretError::Shape(_))
        ));
        assert!(matches!(
            gen_perf_dicts(&array![[0.1, 0.9]], &array![0.0], false),
            Err(InterpretError::Shape(_))
        ));
        assert!(matches!(
            gen_perf_dicts(&array![0.1, 0.9, 0.3], &array![0.0, 1.0], false),
            Err(InterpretError::LengthMismatch { expected: 2, got: 3, .. })
        ));
    }

    #[test]
    fn test_records_serialize_with_field_names() {
        let record = PerformanceRecord {
            actual: 0.0,
            predicted: 1.0,
            actual_score: 0.25,
            predicted_score: 0.75,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["actual"], 0.0);
        assert_eq!(json["predicted"], 1.0);
        assert_eq!(json["actual_score"], 0.25);
        assert_eq!(json["predicted_score"], 0.75);
    }
}
