// src/traits.rs

use crate::core::{Features, InterpretError, Result};
use ndarray::{Array1, Array2, Axis};

/// A fitted model that can score a batch of samples.
pub trait PredictModel {
    /// One prediction per row of `instances`.
    fn predict(&self, instances: &Features) -> Result<Array1<f64>>;

    /// Class probabilities, one row per instance and one column per class.
    fn predict_proba(&self, _instances: &Features) -> Result<Array2<f64>> {
        Err(InterpretError::Model(
            "model does not provide class probabilities".to_string(),
        ))
    }

    fn num_features(&self) -> usize;
}

/// Boxed scoring function returned by [`unify_predict_fn`].
pub type PredictFn<'a> = Box<dyn Fn(&Features) -> Result<Array1<f64>> + 'a>;

/// Wraps `model` into a function returning one score per sample.
///
/// For classification the score is the probability of the positive class,
/// so the model must be binary. For regression it is the raw prediction.
pub fn unify_predict_fn<'a, M>(model: &'a M, is_classification: bool) -> PredictFn<'a>
where
    M: PredictModel + ?Sized,
{
    Box::new(move |instances: &Features| {
        if instances.ncols() != model.num_features() {
            return Err(InterpretError::length_mismatch(
                "features",
                model.num_features(),
                instances.ncols(),
            ));
        }

        if !is_classification {
            return model.predict(instances);
        }

        let proba = model.predict_proba(instances)?;
        if proba.ncols() != 2 {
            return Err(InterpretError::Shape(format!(
                "expected probabilities for 2 classes, got {} columns",
                proba.ncols()
            )));
        }
        Ok(proba.index_axis(Axis(1), 1).to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // Define a simple linear model for testing
    struct SimpleLinearModel {
        coefficients: Array1<f64>,
        intercept: f64,
    }

    impl PredictModel for SimpleLinearModel {
        fn predict(&self, instances: &Features) -> Result<Array1<f64>> {
            Ok(instances.dot(&self.coefficients) + self.intercept)
        }

        fn num_features(&self) -> usize {
            self.coefficients.len()
        }
    }

    /// Logistic wrapper around the linear model.
    struct SimpleLogisticModel(SimpleLinearModel);

    impl PredictModel for SimpleLogisticModel {
        fn predict(&self, instances: &Features) -> Result<Array1<f64>> {
            Ok(self.0.predict(instances)?.mapv(|z| if z > 0.0 { 1.0 } else { 0.0 }))
        }

        fn predict_proba(&self, instances: &Features) -> Result<Array2<f64>> {
            let p1 = self.0.predict(instances)?.mapv(|z| 1.0 / (1.0 + (-z).exp()));
            let mut proba = Array2::zeros((instances.nrows(), 2));
            proba.column_mut(0).assign(&p1.mapv(|p| 1.0 - p));
            proba.column_mut(1).assign(&p1);
            Ok(proba)
        }

        fn num_features(&self) -> usize {
            self.0.num_features()
        }
    }

    fn linear() -> SimpleLinearModel {
        SimpleLinearModel {
            coefficients: array![2.0, 3.0],
            intercept: 5.0,
        }
    }

    #[test]
    fn test_regression_returns_predictions() -> Result<()> {
        let model = linear();
        let predict_fn = unify_predict_fn(&model, false);
        let scores = predict_fn(&array![[0.0, 0.0], [2.0, 1.0]])?;
        assert_abs_diff_eq!(scores[0], 5.0);
        assert_abs_diff_eq!(scores[1], 12.0);
        Ok(())
    }

    #[test]
    fn test_classification_returns_positive_class_probability() -> Result<()> {
        let model = SimpleLogisticModel(SimpleLinearModel {
            coefficients: array![1.0],
            intercept: 0.0,
        });
        let predict_fn = unify_predict_fn(&model, true);
        let scores = predict_fn(&array![[0.0], [100.0]])?;
        assert_abs_diff_eq!(scores[0], 0.5);
        assert_abs_diff_eq!(scores[1], 1.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_classification_needs_probabilities() {
        let model = linear();
        let predict_fn = unify_predict_fn(&model, true);
        assert!(matches!(
            predict_fn(&array![[1.0, 1.0]]),
            Err(InterpretError::Model(_))
        ));
    }

    #[test]
    fn test_feature_count_is_checked() {
        let model = linear();
        let predict_fn = unify_predict_fn(&model, false);
        assert!(matches!(
            predict_fn(&array![[1.0, 1.0, 1.0]]),
            Err(InterpretError::LengthMismatch { expected: 2, got: 3, .. })
        ));
    }
}
