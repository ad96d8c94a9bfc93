// src/lib.rs

//! `interpret_core` turns heterogeneous tabular input (numeric arrays, nested
//! rows, labeled frames) into one canonical representation for model
//! interpretability code, and provides the small helpers used to label and
//! summarize model outputs.

// Declare the main modules of the crate
pub mod core;
pub mod traits;
pub mod unify;
pub mod utils;

// Re-export key components for easier use by library consumers
pub use crate::core::{
    Column, DataFrame, FeatureType, Features, InterpretError, Labels, RawFeatures, Result, Value,
};
pub use crate::traits::{unify_predict_fn, PredictFn, PredictModel};
pub use crate::unify::{
    autogen_schema, unify_data, unify_data_with, unify_vector, SchemaConfig, UnifiedData,
};
pub use crate::utils::{
    gen_feat_val_list, gen_global_selector, gen_local_selector, gen_perf_dicts, reverse_map,
    NameRegistry, PerformanceRecord,
};
