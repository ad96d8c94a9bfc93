pub mod data;
pub mod schema;
pub mod vector;

pub use data::{unify_data, unify_data_with, UnifiedData};
pub use schema::{autogen_schema, infer_feature_type, placeholder_name, SchemaConfig};
pub use vector::unify_vector;
