// src/utils/selector.rs

//! Tabular summaries used to pick samples and features for display.

use crate::core::{FeatureType, InterpretError, Result};
use crate::unify::UnifiedData;
use crate::utils::perf::PerformanceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One sample of a local explanation selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalSelectorRow {
    pub index: usize,
    pub actual: f64,
    pub predicted: f64,
    /// Absolute residual for regression, predicted-class probability for classification.
    pub score: f64,
}

/// One feature of a global explanation selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSelectorRow {
    pub name: String,
    pub feature_type: FeatureType,
    pub num_unique: usize,
    /// Fraction of samples whose value is non-zero.
    pub pct_non_zero: f64,
    pub importance: f64,
}

pub fn gen_local_selector(
    records: &[PerformanceRecord],
    is_classification: bool,
) -> Vec<LocalSelectorRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| LocalSelectorRow {
            index,
            actual: r.actual,
            predicted: r.predicted,
            score: if is_classification {
                r.predicted_score
            } else {
                (r.actual - r.predicted).abs()
            },
        })
        .collect()
}

/// Summarizes every feature of `data` together with its importance score.
pub fn gen_global_selector(data: &UnifiedData, importances: &[f64]) -> Result<Vec<GlobalSelectorRow>> {
    let n_features = data.n_features();
    if importances.len() != n_features {
        return Err(InterpretError::length_mismatch("importances", n_features, importances.len()));
    }

    let n_samples = data.n_samples();
    let rows = data
        .features
        .columns()
        .into_iter()
        .zip(data.feature_names.iter().zip(&data.feature_types))
        .zip(importances)
        .map(|((col, (name, &feature_type)), &importance)| {
            let num_unique = col
                .iter()
                .map(|&v| {
                    // -0.0 and 0.0 count once.
                    let v = if v == 0.0 { 0.0f64 } else { v };
                    v.to_bits()
                })
                .collect::<HashSet<_>>()
                .len();
            let non_zero = col.iter().filter(|&&v| v != 0.0).count();
            let pct_non_zero = if n_samples == 0 {
                0.0
            } else {
                non_zero as f64 / n_samples as f64
            };
            GlobalSelectorRow {
                name: name.clone(),
                feature_type,
                num_unique,
                pct_non_zero,
                importance,
            }
        })
        .collect();
    Ok(rows)
}
