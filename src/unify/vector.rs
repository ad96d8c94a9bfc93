// src/unify/vector.rs

use crate::core::{InterpretError, Result};
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Collapses an array whose trailing dimensions all have length 1 into a
/// 1-D vector, keeping the logical element order.
///
/// A 1-D input is copied unchanged. Inputs of rank 0, or with any trailing
/// dimension of length other than 1 (e.g. shape `(4, 2)`), fail with
/// [`InterpretError::Shape`].
pub fn unify_vector<A, S, D>(y: &ArrayBase<S, D>) -> Result<Array1<A>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let shape = y.shape();
    if shape.is_empty() {
        return Err(InterpretError::Shape(
            "cannot unify a 0-dimensional array into a vector".to_string(),
        ));
    }

    if let Some((axis, len)) = shape
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, &len)| len != 1)
    {
        return Err(InterpretError::Shape(format!(
            "expected a vector, but array of shape {:?} has length {} along axis {}",
            shape, len, axis
        )));
    }

    Ok(y.iter().cloned().collect())
}
