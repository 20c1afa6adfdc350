//! Maps OpenAPI schema descriptors to C# source fragments: identifiers, type expressions and
//! query-string statements. The functions are pure and meant to be called by a template
//! renderer once per schema, property or parameter.

mod collections;
pub mod deserializer;
pub mod error;
pub mod generator;
pub mod naming;
pub mod query;
pub mod types;

pub use deserializer::{ModelSchema, ParameterDef, SchemaDescriptor, SchemaRef};
pub use error::{CodegenError, Result};
pub use generator::{render_models, render_query_params, RenderOptions};
pub use naming::{
    capitalize, decapitalize, normalize_arg_name, normalize_endpoint_name, normalize_prop_name,
    normalize_schema_name,
};
pub use query::{emit_query_param_expression, format_query_param_stringify};
pub use types::{format_json_property, stringify_type};
