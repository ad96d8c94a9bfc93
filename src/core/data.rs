// src/core/data.rs
use crate::core::errors::{InterpretError, Result};
use ndarray::{Array1, Array2, ArrayD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical feature matrix: rows are samples, columns are features.
pub type Features = Array2<f64>;

/// Canonical label vector, one entry per sample.
pub type Labels = Array1<f64>;

/// A single raw cell of tabular input.
///
/// The variant is the cell's type tag: schema inference and unification look
/// only at the tag, never at how the value was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Absent or null entry.
    Missing,
}

impl Value {
    /// True for `Missing` and for a `Number` holding NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Number(v) => v.is_nan(),
            Value::Text(_) => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Missing, Into::into)
    }
}

/// Storage kind of a column, the analogue of a frame dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every present entry is a number.
    Numeric,
    /// At least one entry is text.
    Object,
}

/// Kind of a column of cells. Missing entries do not affect the kind.
pub fn column_kind(values: &[Value]) -> ColumnKind {
    if values.iter().any(|v| matches!(v, Value::Text(_))) {
        ColumnKind::Object
    } else {
        ColumnKind::Numeric
    }
}

/// A named column of a [`DataFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Column {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        column_kind(&self.values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A labeled frame: ordered, named columns.
///
/// Column lengths are not checked on insertion; unification rejects frames
/// whose columns disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        DataFrame { columns }
    }

    /// Append a column, or replace the values of an existing column with the same name.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let column = Column::new(name, values);
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// A new frame holding only the named columns, in the order given.
    /// Fails with [`InterpretError::UnknownColumn`] on the first name not in the frame.
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let columns = names
            .iter()
            .map(|&n| {
                self.column(n)
                    .cloned()
                    .ok_or_else(|| InterpretError::UnknownColumn(n.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame { columns })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Row count of the first column (0 for a frame without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}

/// The closed set of raw feature inputs accepted by unification.
#[derive(Debug, Clone)]
pub enum RawFeatures {
    /// Numeric array; NaN marks a missing entry.
    Array(ArrayD<f64>),
    /// Nested sequence of rows.
    Rows(Vec<Vec<Value>>),
    Frame(DataFrame),
}

impl From<ArrayD<f64>> for RawFeatures {
    fn from(a: ArrayD<f64>) -> Self {
        RawFeatures::Array(a)
    }
}

impl From<Array2<f64>> for RawFeatures {
    fn from(a: Array2<f64>) -> Self {
        RawFeatures::Array(a.into_dyn())
    }
}

impl From<Array1<f64>> for RawFeatures {
    fn from(a: Array1<f64>) -> Self {
        RawFeatures::Array(a.into_dyn())
    }
}

impl From<Vec<Vec<Value>>> for RawFeatures {
    fn from(rows: Vec<Vec<Value>>) -> Self {
        RawFeatures::Rows(rows)
    }
}

impl From<Vec<Vec<f64>>> for RawFeatures {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        RawFeatures::Rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Value::Number).collect())
                .collect(),
        )
    }
}

impl From<DataFrame> for RawFeatures {
    fn from(df: DataFrame) -> Self {
        RawFeatures::Frame(df)
    }
}

/// Whether a feature is treated as a continuous quantity or a set of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Continuous,
    Categorical,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureType::Continuous => write!(f, "continuous"),
            FeatureType::Categorical => write!(f, "categorical"),
        }
    }
}
