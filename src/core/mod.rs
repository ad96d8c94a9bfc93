//! Shared data model and error type.

pub mod data;
pub mod errors;

pub use data::{
    column_kind, Column, ColumnKind, DataFrame, FeatureType, Features, Labels, RawFeatures, Value,
};
pub use errors::{InterpretError, Result};
