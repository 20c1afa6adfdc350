use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::deserializer::SchemaDescriptor;
use crate::error::{CodegenError, Result};
use crate::types::stringify_type;

lazy_static! {
    /// Argument names that collide with a C# keyword and their escaped spelling.
    /// Keep this table short and reviewed, nothing is inferred from the language.
    static ref RESERVED_ARG_NAMES: HashMap<&'static str, &'static str> =
        [("base", "Base")].into_iter().collect();
    static ref DTO_MARKER: Regex = Regex::new("(?i)DTO").unwrap();
}

/// Uppercases the first character, the rest is left untouched.
pub fn capitalize(input: &str) -> Result<String> {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
        None => Err(CodegenError::InvalidIdentifierInput {
            context: "capitalize".to_string(),
        }),
    }
}

/// Lowercases the first character, the rest is left untouched.
pub fn decapitalize(input: &str) -> Result<String> {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => Ok(first.to_lowercase().chain(chars).collect()),
        None => Err(CodegenError::InvalidIdentifierInput {
            context: "decapitalize".to_string(),
        }),
    }
}

/// `champion-mastery-v4` -> `champion_mastery_v4`
pub fn normalize_endpoint_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Removes every case-insensitive `DTO` marker from a schema name.
/// Removal is repeated until none is left, so `DDTOTO` ends up empty.
/// The result may be empty, callers have to guard against that.
pub fn normalize_schema_name(name: &str) -> String {
    let mut normalized = name.to_string();
    while DTO_MARKER.is_match(&normalized) {
        normalized = DTO_MARKER.replace_all(&normalized, "").into_owned();
    }
    trace!("schema name {} -> {}", name, normalized);
    normalized
}

/// Joins `_`-separated tokens, each with its first letter uppercased.
fn pascal_case(name: &str) -> Result<String> {
    name.split('_')
        .map(capitalize)
        .collect::<Result<Vec<_>>>()
        .map(|tokens| tokens.concat())
        .map_err(|_| CodegenError::InvalidIdentifierInput {
            context: format!("empty token in `{}`", name),
        })
}

/// `summoner_id` -> `summonerId`.
/// Names hitting an entry of the reserved-word table are replaced by its escaped spelling,
/// `base` is the only one known.
pub fn normalize_arg_name(name: &str) -> Result<String> {
    let arg_name = decapitalize(&pascal_case(name)?)?;
    match RESERVED_ARG_NAMES.get(arg_name.as_str()) {
        Some(escaped) => {
            debug!("argument `{}` escaped as `{}`", arg_name, escaped);
            Ok(escaped.to_string())
        }
        None => Ok(arg_name),
    }
}

/// `queue_type` -> `QueueType`.
/// A property whose name equals its enclosing schema's name gets the stringified property
/// type appended, since C# does not allow a member named like its class.
pub fn normalize_prop_name(
    prop_name: &str,
    schema_name: &str,
    descriptor: &SchemaDescriptor,
) -> Result<String> {
    let mut name = pascal_case(prop_name)?;
    if name == schema_name {
        let disambiguated = format!("{}{}", name, stringify_type(descriptor, None, false));
        debug!(
            "property `{}` shadows schema `{}`, renamed to `{}`",
            prop_name, schema_name, disambiguated
        );
        name = disambiguated;
    }
    Ok(name)
}
