use log::{trace, warn};

use crate::deserializer::{ParameterDef, SchemaDescriptor};
use crate::error::{CodegenError, Result};
use crate::naming::normalize_arg_name;

fn stringify_suffix(type_name: Option<&str>) -> &'static str {
    match type_name {
        Some("boolean") => ".ToString().ToLowerInvariant()",
        Some("string") => "",
        _ => ".ToString()",
    }
}

/// The member chain turning a value of the given schema into the string of a query entry.
pub fn format_query_param_stringify(descriptor: &SchemaDescriptor) -> &'static str {
    stringify_suffix(descriptor.type_name())
}

/// Emits the C# statement adding `parameter` to a `queryParams` list of
/// `KeyValuePair<string, string>`, keyed by `nameof(<argument>)`.
///
/// Array parameters add one entry per element and are never null-guarded, scalar parameters
/// that are not required are only added when present. Object parameters cannot be expressed as
/// query entries and fail with [`CodegenError::UnsupportedShape`].
pub fn emit_query_param_expression(parameter: &ParameterDef) -> Result<String> {
    let arg = normalize_arg_name(&parameter.name)?;
    let key = format!("nameof({})", arg);
    let statement = match &parameter.schema {
        SchemaDescriptor::Array { items, .. } => format!(
            "queryParams.AddRange({}.Select(w => new KeyValuePair<string, string>({}, w{})))",
            arg,
            key,
            format_query_param_stringify(items)
        ),
        schema if schema.type_name() == Some("array") => format!(
            "queryParams.AddRange({}.Select(w => new KeyValuePair<string, string>({}, w{})))",
            arg,
            key,
            stringify_suffix(None)
        ),
        schema if schema.type_name() == Some("object") => {
            warn!("query parameter `{}` has an object schema", parameter.name);
            return Err(CodegenError::UnsupportedShape {
                parameter: parameter.name.clone(),
            });
        }
        schema => {
            let (guard, unwrap) = if parameter.required {
                (String::new(), "")
            } else {
                (format!("if (null != {}) ", arg), ".Value")
            };
            format!(
                "{}queryParams.Add(new KeyValuePair<string, string>({}, {}{}{}))",
                guard,
                key,
                arg,
                unwrap,
                format_query_param_stringify(schema)
            )
        }
    };
    trace!("query parameter `{}`: {}", parameter.name, statement);
    Ok(statement)
}
