// src/reader/gds.rs

//! Reader for the signal wiring configuration (GDS). The inverse operation
//! lives in [`crate::builder`].

use crate::error::ConfigError;
use crate::model::gds::GdsConfigurationDocument;
use crate::types::{Connection, ConnectorEndpoints, GdsConfiguration};
use std::path::Path;

/// The separator between the node key and the port id in a connector
/// endpoint string.
pub(crate) const ENDPOINT_SEPARATOR: char = ':';

/// Reads a GDS configuration and returns its connections, one per
/// connector, order preserved.
pub fn load_connections(path: impl AsRef<Path>) -> Result<Vec<Connection>, ConfigError> {
    let document: GdsConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(connections_of(&document))
}

/// Parses GDS content and returns its connections, as [`load_connections`]
/// but from a string.
pub fn connections_from_str(xml_content: &str) -> Result<Vec<Connection>, ConfigError> {
    let document: GdsConfigurationDocument = quick_xml::de::from_str(xml_content)?;
    Ok(connections_of(&document))
}

/// Reads a GDS configuration into a raw snapshot, endpoint strings unsplit.
pub fn load_gds_config(path: impl AsRef<Path>) -> Result<GdsConfiguration, ConfigError> {
    let document: GdsConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(GdsConfiguration {
        connectors: document
            .connectors
            .iter()
            .flat_map(|connectors| connectors.connector.iter())
            .map(|connector| ConnectorEndpoints {
                start_port: connector.start_port.clone(),
                end_port: connector.end_port.clone(),
            })
            .collect(),
    })
}

fn connections_of(document: &GdsConfigurationDocument) -> Vec<Connection> {
    let mut connections = Vec::new();
    for connectors in &document.connectors {
        for connector in &connectors.connector {
            let (from, from_port) = split_endpoint(&connector.start_port);
            let (to, to_port) = split_endpoint(&connector.end_port);
            connections.push(Connection {
                from: from.to_string(),
                to: to.to_string(),
                from_port: from_port.to_string(),
                to_port: to_port.to_string(),
            });
        }
    }
    connections
}

/// Splits a `node:port` endpoint on the first separator occurrence. Without
/// a separator the whole string is taken as the node key; further separator
/// occurrences stay inside the port id.
fn split_endpoint(endpoint: &str) -> (&str, &str) {
    endpoint
        .split_once(ENDPOINT_SEPARATOR)
        .unwrap_or((endpoint, ""))
}
