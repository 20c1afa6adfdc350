use indexmap::IndexMap;
use monostate::MustBe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub schema_path: String,
}

impl SchemaRef {
    /// The referenced name with its namespace stripped, e.g.
    /// `#/components/schemas/lol.ChampionDTO` -> `ChampionDTO`.
    /// Everything up to and including the first `.` is the namespace, a path without any `.`
    /// is kept whole.
    pub fn get_schema_name(&self) -> &str {
        self.schema_path
            .split_once('.')
            .map(|(_, name)| name)
            .unwrap_or(&self.schema_path)
    }
}

/// A schema type descriptor as found on properties and parameters of the schema document.
///
/// Variant order is the resolution order: `anyOf` wins over everything, `$ref` wins over `type`.
/// Shapes that carry an unknown `type` (or none at all) land in `Other` and are passed
/// through verbatim by the stringifier.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SchemaDescriptor {
    /// Union of alternatives. Only the first alternative is ever used.
    AnyOf {
        #[serde(rename = "anyOf")]
        any_of: Vec<SchemaDescriptor>,
    },
    Ref(SchemaRef),
    Boolean {
        #[serde(rename = "type")]
        schema_type: MustBe!("boolean"),
    },
    Integer {
        #[serde(rename = "type")]
        schema_type: MustBe!("integer"),
        format: Option<String>,
    },
    Number {
        #[serde(rename = "type")]
        schema_type: MustBe!("number"),
        format: Option<String>,
    },
    String {
        #[serde(rename = "type")]
        schema_type: MustBe!("string"),
        format: Option<String>,
    },
    Array {
        #[serde(rename = "type")]
        schema_type: MustBe!("array"),
        items: Box<SchemaDescriptor>,
    },
    /// A dictionary, `x-key` describes the keys and `additionalProperties` the values.
    Object {
        #[serde(rename = "type")]
        schema_type: MustBe!("object"),
        #[serde(rename = "x-key")]
        key: Box<SchemaDescriptor>,
        #[serde(rename = "additionalProperties")]
        value: Box<SchemaDescriptor>,
    },
    Other {
        #[serde(rename = "type", default)]
        schema_type: Option<String>,
    },
}

impl SchemaDescriptor {
    /// The raw `type` field of this descriptor, `None` for `$ref`/`anyOf` descriptors and
    /// untyped ones.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            SchemaDescriptor::AnyOf { .. } | SchemaDescriptor::Ref(_) => None,
            SchemaDescriptor::Boolean { .. } => Some("boolean"),
            SchemaDescriptor::Integer { .. } => Some("integer"),
            SchemaDescriptor::Number { .. } => Some("number"),
            SchemaDescriptor::String { .. } => Some("string"),
            SchemaDescriptor::Array { .. } => Some("array"),
            SchemaDescriptor::Object { .. } => Some("object"),
            SchemaDescriptor::Other { schema_type } => schema_type.as_deref(),
        }
    }
}

/// An operation parameter, only `query` parameters are handled by the query emitter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "in")]
    pub location: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub schema: SchemaDescriptor,
}

/// A named entry of `components.schemas`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    pub description: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, SchemaDescriptor>,
    #[serde(default)]
    pub required: Vec<String>,
}
