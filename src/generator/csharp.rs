use anyhow::{bail, Context, Result};
use log::trace;

use crate::deserializer::{ModelSchema, SchemaDescriptor};
use crate::naming::{normalize_endpoint_name, normalize_prop_name, normalize_schema_name};
use crate::types::{format_json_property, stringify_type};

use super::RenderOptions;

const INDENT: &str = "    ";

pub(super) fn generate_namespace(
    endpoint: &str,
    schemas: &[&(String, ModelSchema)],
    options: &RenderOptions,
) -> Result<String> {
    let namespace = if endpoint.is_empty() {
        options.root_namespace.clone()
    } else {
        format!("{}.{}", options.root_namespace, normalize_endpoint_name(endpoint))
    };
    let classes = schemas
        .iter()
        .map(|(name, schema)| {
            generate_class(name, schema).with_context(|| format!("Failed to render schema `{}`", name))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!(
        "namespace {}\n{{\n{}}}\n",
        namespace,
        classes.join("\n")
    ))
}

fn generate_class(key: &str, schema: &ModelSchema) -> Result<String> {
    let raw_name = key.split_once('.').map(|(_, name)| name).unwrap_or(key);
    let class_name = normalize_schema_name(raw_name);
    if class_name.is_empty() {
        bail!("`{}` is empty once the DTO marker is removed", raw_name);
    }
    let properties = schema
        .properties
        .iter()
        .map(|(prop_name, descriptor)| generate_property(prop_name, &class_name, descriptor))
        .collect::<Result<Vec<_>>>()?;

    let mut code = String::new();
    code.push_str(&summary(INDENT, schema.description.as_deref().unwrap_or(raw_name)));
    code.push_str(&format!("{INDENT}public class {}\n{INDENT}{{\n", class_name));
    code.push_str(&properties.join("\n"));
    code.push_str(&format!("{INDENT}}}\n"));
    trace!("rendered class {}", class_name);
    Ok(code)
}

fn generate_property(
    prop_name: &str,
    class_name: &str,
    descriptor: &SchemaDescriptor,
) -> Result<String> {
    let member = normalize_prop_name(prop_name, class_name, descriptor)
        .with_context(|| format!("Invalid property name `{}`", prop_name))?;
    let field_type = stringify_type(descriptor, None, false);
    let indent = INDENT.repeat(2);
    Ok(format!(
        "{indent}{}\n{indent}public {} {} {{ get; set; }}\n",
        format_json_property(prop_name),
        field_type,
        member
    ))
}

fn summary(indent: &str, text: &str) -> String {
    let lines = text
        .lines()
        .map(|line| format!("{indent}/// {}\n", line.trim_end()))
        .collect::<String>();
    format!("{indent}/// <summary>\n{lines}{indent}/// </summary>\n")
}
