mod csharp;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::collections::SliceExt;
use crate::deserializer::{ModelSchema, ParameterDef};
use crate::query::emit_query_param_expression;

/// Settings of the model renderer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix of every generated namespace, e.g. `Camille` -> `Camille.league_v4`
    pub root_namespace: String,
    pub usings: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            root_namespace: "Camille".to_string(),
            usings: vec![
                "System.Collections.Generic".to_string(),
                "Newtonsoft.Json".to_string(),
            ],
        }
    }
}

impl RenderOptions {
    pub fn from_yaml(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).context("Invalid render options")
    }
}

/// Renders C# model classes for every entry of `components.schemas` of a JSON or YAML schema
/// document. Schemas are grouped by the endpoint prefix of their key (`league-v4.LeagueListDTO`)
/// and every group becomes one namespace block, in document order.
pub fn render_models(input: &str, options: &RenderOptions) -> Result<String> {
    let document = serde_yaml::from_str::<serde_yaml::Value>(input)
        .context("Schema document is not valid JSON/YAML")?;
    let schemas = serde_yaml::from_value::<IndexMap<String, ModelSchema>>(
        document["components"]["schemas"].clone(),
    )
    .context("Failed to decode components.schemas")?;
    let schemas = schemas.into_iter().collect::<Vec<_>>();
    let groups = schemas.group_by_key(|(name, _)| {
        name.split_once('.')
            .map(|(endpoint, _)| endpoint.to_string())
            .unwrap_or_default()
    });
    debug!(
        "rendering {} schemas in {} namespaces",
        schemas.len(),
        groups.len()
    );
    let namespaces = groups
        .into_par_iter()
        .map(|(endpoint, schemas)| csharp::generate_namespace(&endpoint, &schemas, options))
        .collect::<Result<Vec<_>>>()?;

    let usings = options
        .usings
        .iter()
        .map(|using| format!("using {};\n", using))
        .collect::<String>();
    Ok(format!("{}\n{}", usings, namespaces.join("\n")))
}

/// Query statements of one operation, path-level parameters first, then the operation's own.
/// Parameters located anywhere but the query string are skipped.
pub fn render_query_params(
    parameter_sets: &[&[ParameterDef]],
) -> crate::error::Result<Vec<String>> {
    parameter_sets
        .flat_map_vec(|parameters| {
            parameters
                .iter()
                .filter(|parameter| parameter.location.as_deref() == Some("query"))
                .map(emit_query_param_expression)
                .collect()
        })
        .into_iter()
        .collect()
}
