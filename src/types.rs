use log::{debug, trace};

use crate::deserializer::SchemaDescriptor;
use crate::naming::normalize_schema_name;

/// Renders a descriptor as a C# type expression.
///
/// `endpoint` prefixes referenced schema names (`LolApi.Champion`) when the type is used outside
/// of its own namespace. `nullable` appends `?` to the outermost type only, array elements and
/// dictionary keys/values are never made nullable.
///
/// `anyOf` is approximated by its first alternative, the remaining alternatives are dropped.
/// Any `type` not known here is emitted verbatim, an untyped descriptor renders as an empty
/// type name.
pub fn stringify_type(
    descriptor: &SchemaDescriptor,
    endpoint: Option<&str>,
    nullable: bool,
) -> String {
    let qm = if nullable { "?" } else { "" };
    let rendered = match descriptor {
        SchemaDescriptor::AnyOf { any_of } => {
            if any_of.len() > 1 {
                debug!(
                    "anyOf with {} alternatives approximated by the first one",
                    any_of.len()
                );
            }
            return match any_of.first() {
                Some(first) => stringify_type(first, endpoint, nullable),
                None => qm.to_string(),
            };
        }
        SchemaDescriptor::Ref(schema_ref) => {
            let name = normalize_schema_name(schema_ref.get_schema_name());
            match endpoint {
                Some(endpoint) => format!("{}.{}{}", endpoint, name, qm),
                None => format!("{}{}", name, qm),
            }
        }
        SchemaDescriptor::Boolean { .. } => format!("bool{}", qm),
        SchemaDescriptor::Integer { format, .. } => match format.as_deref() {
            Some("int32") => format!("int{}", qm),
            _ => format!("long{}", qm),
        },
        // The format already is a C# spelling (`float`, `double`)
        SchemaDescriptor::Number { format, .. } => {
            format!("{}{}", format.as_deref().unwrap_or("double"), qm)
        }
        SchemaDescriptor::String { .. } => format!("string{}", qm),
        SchemaDescriptor::Array { items, .. } => {
            format!("{}[]{}", stringify_type(items, endpoint, false), qm)
        }
        SchemaDescriptor::Object { key, value, .. } => format!(
            "IDictionary<{}, {}>{}",
            stringify_type(key, endpoint, false),
            stringify_type(value, endpoint, false),
            qm
        ),
        SchemaDescriptor::Other { schema_type } => {
            format!("{}{}", schema_type.as_deref().unwrap_or_default(), qm)
        }
    };
    trace!("stringified {:?} as `{}`", descriptor, rendered);
    rendered
}

/// Attribute binding the serialized field name, `name` is interpolated without escaping.
pub fn format_json_property(name: &str) -> String {
    format!("[JsonProperty(\"{}\")]", name)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn descriptor(value: serde_json::Value) -> SchemaDescriptor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_stringify_primitives() {
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "integer", "format": "int32"})), None, false),
            "int"
        );
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "integer"})), None, false),
            "long"
        );
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "integer", "format": "int64"})), None, true),
            "long?"
        );
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "boolean"})), None, true),
            "bool?"
        );
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "number", "format": "float"})), None, false),
            "float"
        );
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "string"})), None, false),
            "string"
        );
    }

    #[test]
    fn test_stringify_ref() {
        let champion = descriptor(json!({"$ref": "#/components/schemas/lol.ChampionDTO"}));
        assert_eq!(stringify_type(&champion, Some("LolApi"), false), "LolApi.Champion");
        assert_eq!(stringify_type(&champion, None, false), "Champion");
        assert_eq!(stringify_type(&champion, None, true), "Champion?");
    }

    #[test]
    fn test_stringify_collections() {
        assert_eq!(
            stringify_type(
                &descriptor(json!({"type": "array", "items": {"type": "string"}})),
                None,
                false
            ),
            "string[]"
        );
        let teams = descriptor(json!({
            "type": "array",
            "items": {"$ref": "#/components/schemas/match-v5.TeamDto"}
        }));
        assert_eq!(stringify_type(&teams, Some("MatchV5"), true), "MatchV5.Team[]?");

        let masteries = descriptor(json!({
            "type": "object",
            "x-key": {"type": "integer", "format": "int32"},
            "additionalProperties": {
                "type": "array",
                "items": {"$ref": "#/components/schemas/champion-mastery-v4.ChampionMasteryDTO"}
            }
        }));
        assert_eq!(
            stringify_type(&masteries, None, false),
            "IDictionary<int, ChampionMastery[]>"
        );
        assert_eq!(
            stringify_type(&masteries, Some("Cm"), true),
            "IDictionary<int, Cm.ChampionMastery[]>?"
        );
    }

    #[test]
    fn test_stringify_any_of_takes_first() {
        let union = descriptor(json!({
            "anyOf": [{"type": "integer", "format": "int32"}, {"type": "string"}]
        }));
        assert_eq!(stringify_type(&union, None, true), "int?");
        let empty = descriptor(json!({"anyOf": []}));
        assert_eq!(stringify_type(&empty, None, false), "");
    }

    #[test]
    fn test_stringify_pass_through() {
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "DateTime"})), None, true),
            "DateTime?"
        );
        assert_eq!(stringify_type(&descriptor(json!({})), None, false), "");
        assert_eq!(
            stringify_type(&descriptor(json!({"type": "array"})), None, false),
            "array"
        );
    }

    #[test]
    fn test_format_json_property() {
        assert_eq!(format_json_property("summonerId"), "[JsonProperty(\"summonerId\")]");
    }
}
