// src/unify/data.rs

use crate::core::{
    column_kind, ColumnKind, DataFrame, FeatureType, Features, InterpretError, Labels,
    RawFeatures, Result, Value,
};
use crate::unify::schema::{schema_for_columns, SchemaConfig};
use crate::unify::vector::unify_vector;
use log::debug;
use ndarray::{Array2, ArrayBase, ArrayD, Axis, Data, Dimension, Ix2};
use std::collections::HashMap;
use std::fmt;

/// Canonical form of a feature matrix plus labels and schema.
#[derive(Debug, Clone)]
pub struct UnifiedData {
    /// Samples x features. Text columns hold category codes, see `levels`.
    pub features: Features,
    pub labels: Labels,
    pub feature_names: Vec<String>,
    pub feature_types: Vec<FeatureType>,
    /// For each column holding text, the level behind each code (code `i` is
    /// `levels[col][i]`). `None` for purely numeric columns.
    pub levels: Vec<Option<Vec<String>>>,
}

impl UnifiedData {
    /// Splits into `(features, labels, feature_names, feature_types)`.
    pub fn into_parts(self) -> (Features, Labels, Vec<String>, Vec<FeatureType>) {
        (self.features, self.labels, self.feature_names, self.feature_types)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

impl fmt::Display for UnifiedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UnifiedData:")?;
        writeln!(f, "  Samples:  {}", self.n_samples())?;
        writeln!(f, "  Features: {}", self.n_features())?;
        for (i, (name, ty)) in self.feature_names.iter().zip(&self.feature_types).enumerate() {
            match self.levels.get(i).and_then(Option::as_ref) {
                Some(levels) => writeln!(f, "    {}: {} ({} levels)", name, ty, levels.len())?,
                None => writeln!(f, "    {}: {}", name, ty)?,
            }
        }
        Ok(())
    }
}

/// Raw input split into columns of cells.
#[derive(Debug, Clone)]
pub(crate) struct RawColumns {
    /// Column names carried by the input itself (frames only).
    pub names: Option<Vec<String>>,
    pub n_rows: usize,
    pub values: Vec<Vec<Value>>,
}

impl RawColumns {
    pub fn n_cols(&self) -> usize {
        self.values.len()
    }
}

pub(crate) fn raw_columns(features: &RawFeatures) -> Result<RawColumns> {
    match features {
        RawFeatures::Array(a) => columns_from_array(a),
        RawFeatures::Rows(rows) => columns_from_rows(rows),
        RawFeatures::Frame(df) => columns_from_frame(df),
    }
}

fn columns_from_array(a: &ArrayD<f64>) -> Result<RawColumns> {
    match a.ndim() {
        1 => Ok(RawColumns {
            names: None,
            n_rows: a.len(),
            values: vec![a.iter().copied().map(Value::Number).collect()],
        }),
        2 => {
            let a = a.view().into_dimensionality::<Ix2>()?;
            let values = a
                .axis_iter(Axis(1))
                .map(|col| col.iter().copied().map(Value::Number).collect())
                .collect();
            Ok(RawColumns {
                names: None,
                n_rows: a.nrows(),
                values,
            })
        }
        n => Err(InterpretError::Shape(format!(
            "feature array must be 1-D or 2-D, got {} dimensions (shape {:?})",
            n,
            a.shape()
        ))),
    }
}

fn columns_from_rows(rows: &[Vec<Value>]) -> Result<RawColumns> {
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        return Err(InterpretError::Shape(format!(
            "ragged rows: row {} has {} values, expected {}",
            i,
            row.len(),
            n_cols
        )));
    }

    let values = (0..n_cols)
        .map(|j| rows.iter().map(|row| row[j].clone()).collect())
        .collect();
    Ok(RawColumns {
        names: None,
        n_rows: rows.len(),
        values,
    })
}

fn columns_from_frame(df: &DataFrame) -> Result<RawColumns> {
    let n_rows = df.n_rows();
    if let Some(col) = df.columns().iter().find(|c| c.len() != n_rows) {
        return Err(InterpretError::Shape(format!(
            "frame column '{}' has {} rows, expected {}",
            col.name,
            col.len(),
            n_rows
        )));
    }

    Ok(RawColumns {
        names: Some(df.column_names()),
        n_rows,
        values: df.columns().iter().map(|c| c.values.clone()).collect(),
    })
}

/// First missing entry in row-major order.
fn find_missing(columns: &RawColumns) -> Option<(usize, usize)> {
    (0..columns.n_rows).find_map(|row| {
        columns
            .values
            .iter()
            .position(|col| col[row].is_missing())
            .map(|column| (row, column))
    })
}

/// Identity of a category level. Numbers and text never share a level,
/// so `3` and `"3"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LevelKey {
    /// Bit pattern with -0.0 folded into 0.0.
    Number(u64),
    Text(String),
    Missing,
}

/// Key of a cell and the label shown for it in the level table.
fn level_of(value: &Value) -> (LevelKey, String) {
    match value {
        Value::Number(x) => {
            let x = if *x == 0.0 { 0.0 } else { *x };
            (LevelKey::Number(x.to_bits()), x.to_string())
        }
        Value::Text(s) => (LevelKey::Text(s.clone()), s.clone()),
        Value::Missing => (LevelKey::Missing, value.to_string()),
    }
}

/// Encodes one complete column as `f64`. Columns holding any text are
/// replaced by codes in order of first appearance; `levels[code]` is the
/// display form of the cell behind each code.
fn encode_column(values: &[Value]) -> (Vec<f64>, Option<Vec<String>>) {
    if column_kind(values) == ColumnKind::Numeric {
        let numbers = values.iter().filter_map(Value::as_f64).collect();
        return (numbers, None);
    }

    let mut levels: Vec<String> = Vec::new();
    let mut codes: HashMap<LevelKey, usize> = HashMap::new();
    let encoded = values
        .iter()
        .map(|v| {
            let (key, label) = level_of(v);
            let code = *codes.entry(key).or_insert_with(|| {
                levels.push(label);
                levels.len() - 1
            });
            code as f64
        })
        .collect();
    (encoded, Some(levels))
}

/// Unifies raw features and labels with the default [`SchemaConfig`].
///
/// See [`unify_data_with`].
pub fn unify_data<S, D>(
    features: &RawFeatures,
    labels: &ArrayBase<S, D>,
    feature_names: Option<Vec<String>>,
    feature_types: Option<Vec<FeatureType>>,
) -> Result<UnifiedData>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    unify_data_with(features, labels, feature_names, feature_types, &SchemaConfig::default())
}

/// Converts raw features and labels into a validated [`UnifiedData`].
///
/// The feature matrix is always 2-D and the labels always 1-D. Any missing
/// feature entry (`Value::Missing` or NaN) rejects the whole call with
/// [`InterpretError::MissingValue`]; nothing is dropped or imputed. Names and
/// types not supplied are inferred with `config`.
pub fn unify_data_with<S, D>(
    features: &RawFeatures,
    labels: &ArrayBase<S, D>,
    feature_names: Option<Vec<String>>,
    feature_types: Option<Vec<FeatureType>>,
    config: &SchemaConfig,
) -> Result<UnifiedData>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let columns = raw_columns(features)?;

    if let Some((row, column)) = find_missing(&columns) {
        return Err(InterpretError::MissingValue { row, column });
    }

    let labels = unify_vector(labels)?;
    if labels.len() != columns.n_rows {
        return Err(InterpretError::length_mismatch("labels", columns.n_rows, labels.len()));
    }

    let (feature_names, feature_types) =
        schema_for_columns(&columns, feature_names, feature_types, config)?;

    let (encoded, levels): (Vec<Vec<f64>>, Vec<Option<Vec<String>>>) =
        columns.values.iter().map(|col| encode_column(col)).unzip();
    let features = Array2::from_shape_fn((columns.n_rows, columns.n_cols()), |(i, j)| encoded[j][i]);

    debug!(
        "Unified data: {} samples x {} features",
        features.nrows(),
        features.ncols()
    );

    Ok(UnifiedData {
        features,
        labels,
        feature_names,
        feature_types,
        levels,
    })
}
