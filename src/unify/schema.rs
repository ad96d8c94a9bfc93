// src/unify/schema.rs

//! Feature name and feature type inference for raw tabular input.

use crate::core::{column_kind, ColumnKind, FeatureType, InterpretError, RawFeatures, Result, Value};
use crate::unify::data::{raw_columns, RawColumns};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for schema inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// A numeric column with at most this many distinct values is categorical;
    /// with more it is continuous.
    pub max_categorical_levels: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        SchemaConfig {
            max_categorical_levels: 2,
        }
    }
}

/// Positional name given to column `index` when no names are supplied.
pub fn placeholder_name(index: usize) -> String {
    format!("feature_{:04}", index)
}

/// Infers the type of a single column from its cells.
///
/// Any text makes the column categorical. A numeric column is continuous only
/// when it holds more than `config.max_categorical_levels` distinct values.
/// Missing entries are ignored.
pub fn infer_feature_type(values: &[Value], config: &SchemaConfig) -> FeatureType {
    if column_kind(values) == ColumnKind::Object {
        return FeatureType::Categorical;
    }

    let mut distinct = HashSet::new();
    for v in values.iter().filter(|v| !v.is_missing()) {
        if let Some(x) = v.as_f64() {
            // -0.0 and 0.0 are the same level.
            let x = if x == 0.0 { 0.0 } else { x };
            distinct.insert(x.to_bits());
            if distinct.len() > config.max_categorical_levels {
                return FeatureType::Continuous;
            }
        }
    }
    FeatureType::Categorical
}

/// Returns feature names and feature types aligned with the columns of
/// `features`, synthesizing whichever of the two the caller did not supply.
///
/// A frame's own column names are used when `feature_names` is `None`; arrays
/// and nested rows get positional placeholders.
pub fn autogen_schema(
    features: &RawFeatures,
    feature_names: Option<Vec<String>>,
    feature_types: Option<Vec<FeatureType>>,
    config: &SchemaConfig,
) -> Result<(Vec<String>, Vec<FeatureType>)> {
    let columns = raw_columns(features)?;
    schema_for_columns(&columns, feature_names, feature_types, config)
}

pub(crate) fn schema_for_columns(
    columns: &RawColumns,
    feature_names: Option<Vec<String>>,
    feature_types: Option<Vec<FeatureType>>,
    config: &SchemaConfig,
) -> Result<(Vec<String>, Vec<FeatureType>)> {
    let n_cols = columns.n_cols();

    let names = match feature_names {
        Some(names) => {
            if names.len() != n_cols {
                return Err(InterpretError::length_mismatch("feature names", n_cols, names.len()));
            }
            names
        }
        None => match &columns.names {
            Some(frame_names) => frame_names.clone(),
            None => {
                debug!("Generating {} positional feature names", n_cols);
                (0..n_cols).map(placeholder_name).collect()
            }
        },
    };

    let types = match feature_types {
        Some(types) => {
            if types.len() != n_cols {
                return Err(InterpretError::length_mismatch("feature types", n_cols, types.len()));
            }
            types
        }
        None => {
            debug!(
                "Inferring feature types for {} columns (max categorical levels: {})",
                n_cols, config.max_categorical_levels
            );
            columns
                .values
                .iter()
                .zip(&names)
                .map(|(col, name)| {
                    let ty = infer_feature_type(col, config);
                    trace!("Feature '{}' inferred as {}", name, ty);
                    ty
                })
                .collect()
        }
    };

    Ok((names, types))
}
