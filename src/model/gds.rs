// src/model/gds.rs

//! Model structs for `GdsConfigurationDocument` files. This is the one
//! schema the crate both reads and writes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "GdsConfigurationDocument")]
pub struct GdsConfigurationDocument {
    #[serde(rename = "@schemaVersion", default)]
    pub schema_version: String,

    #[serde(rename = "Connectors", default)]
    pub connectors: Vec<Connectors>,
}

impl Default for GdsConfigurationDocument {
    fn default() -> Self {
        Self {
            schema_version: "1.0".into(),
            connectors: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Connectors {
    #[serde(rename = "Connector", default)]
    pub connector: Vec<ConnectorDecl>,
}

/// A connector's endpoints, each a `node:port` compound string.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectorDecl {
    #[serde(rename = "@startPort")]
    pub start_port: String,

    #[serde(rename = "@endPort")]
    pub end_port: String,
}
